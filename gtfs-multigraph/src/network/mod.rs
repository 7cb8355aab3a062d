mod edge;
mod edge_orientation;
mod network_error;
mod network_index;
mod node;
mod node_ordering;
mod stop_canonicalizer;
mod transfer_edge;
mod transit_multigraph;
mod trip_segment;

pub mod network_ops;
pub mod transfer_ops;
pub use edge::{Edge, EdgeKey};
pub use edge_orientation::EdgeOrientation;
pub use network_error::NetworkError;
pub use network_index::NetworkIndex;
pub use node::Node;
pub use node_ordering::NodeOrdering;
pub use stop_canonicalizer::StopCanonicalizer;
pub use transfer_edge::{TransferEdge, TRANSFER_COST};
pub use transit_multigraph::TransitMultigraph;
pub use trip_segment::{segment_trips, TripSegment};
