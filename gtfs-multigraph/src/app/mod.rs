mod app_error;
mod gtfs_multigraph_app;
mod network_config;
mod operation;

pub use app_error::AppError;
pub use gtfs_multigraph_app::GtfsMultigraphApp;
pub use network_config::NetworkConfig;
pub use operation::{run_network, MultigraphOperation};
