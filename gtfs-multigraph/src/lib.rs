pub mod app;
pub mod demand;
pub mod export;
pub mod feed;
pub mod network;
pub mod util;
