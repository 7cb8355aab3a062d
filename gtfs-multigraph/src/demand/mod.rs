//! ridership aggregation, mapping to GTFS stops, and balancing of the net
//! morning/evening demand per network node.
mod apportionment;
mod demand_balancer;
mod demand_error;
mod node_ridership;
mod ridership_record;

pub mod demand_ops;
pub mod ridership_ops;
pub use apportionment::largest_remainder;
pub use demand_balancer::{balance_demand, net_ridership, BalancedDemandRow, DemandTotals};
pub use demand_error::DemandError;
pub use node_ridership::{join_node_ridership, NodeRidershipRow};
pub use ridership_record::{
    ComplexRidership, MappedRidership, RawRidershipRecord, StationMapRecord,
};
