pub mod table_ops;

pub use table_ops::TableReadError;
