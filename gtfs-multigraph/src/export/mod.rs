//! rectangular CSV outputs of the network and demand pipelines.
mod export_error;
mod network_rows;

pub mod network_export;
pub mod writer_ops;
pub use export_error::ExportError;
pub use network_export::NetworkTables;
pub use network_rows::{EdgeRow, NodeRow, RouteRow, StopRoutesRow, TransferEdgeRow};
pub use writer_ops::TableRow;
