use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::EdgeKey;

/// how trip segments travelling in opposite directions between the same stations
/// on the same route are keyed.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EdgeOrientation {
    /// (a, b, r) and (b, a, r) are different edges
    #[default]
    Directed,
    /// (a, b, r) and (b, a, r) collapse into one edge, kept in first-seen orientation
    Undirected,
}

impl EdgeOrientation {
    pub fn key(&self, src_node_id: usize, dst_node_id: usize, route_short_name: &str) -> EdgeKey {
        let (src_node_id, dst_node_id) = match self {
            EdgeOrientation::Directed => (src_node_id, dst_node_id),
            EdgeOrientation::Undirected => (
                src_node_id.min(dst_node_id),
                src_node_id.max(dst_node_id),
            ),
        };
        EdgeKey {
            src_node_id,
            dst_node_id,
            route_short_name: route_short_name.to_string(),
        }
    }
}
