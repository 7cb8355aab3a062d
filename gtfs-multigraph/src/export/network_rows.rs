use serde::{Deserialize, Serialize};

use super::writer_ops::TableRow;

/// a row of nodes.csv
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeRow {
    pub node_idx: usize,
    pub stop_id: String,
    #[serde(default)]
    pub stop_name: String,
    #[serde(default)]
    pub stop_lon: String,
    #[serde(default)]
    pub stop_lat: String,
}

impl TableRow for NodeRow {
    const HEADER: &'static [&'static str] =
        &["node_idx", "stop_id", "stop_name", "stop_lon", "stop_lat"];
}

/// a row of routes.csv
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteRow {
    pub route_idx: usize,
    pub route_short_name: String,
}

impl TableRow for RouteRow {
    const HEADER: &'static [&'static str] = &["route_idx", "route_short_name"];
}

/// a row of edges_by_route.csv, one per `x[i][j][route]` variable
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EdgeRow {
    pub edge_idx: usize,
    pub from_idx: usize,
    pub to_idx: usize,
    pub route_idx: usize,
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub route_short_name: String,
    pub count: u64,
}

impl TableRow for EdgeRow {
    const HEADER: &'static [&'static str] = &[
        "edge_idx",
        "from_idx",
        "to_idx",
        "route_idx",
        "from_stop_id",
        "to_stop_id",
        "route_short_name",
        "count",
    ];
}

/// a row of transfer_edges.csv
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransferEdgeRow {
    pub transfer_edge_id: usize,
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub from_idx: usize,
    pub to_idx: usize,
    pub transfer_type: String,
    pub min_transfer_time: String,
    pub cost: u32,
}

impl TableRow for TransferEdgeRow {
    const HEADER: &'static [&'static str] = &[
        "transfer_edge_id",
        "from_stop_id",
        "to_stop_id",
        "from_idx",
        "to_idx",
        "transfer_type",
        "min_transfer_time",
        "cost",
    ];
}

/// a row of stop_routes.csv
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StopRoutesRow {
    pub stop_id: String,
    pub stop_name: String,
    /// comma-joined, sorted route short names
    pub routes_at_stop: String,
}

impl TableRow for StopRoutesRow {
    const HEADER: &'static [&'static str] = &["stop_id", "stop_name", "routes_at_stop"];
}
