use serde::{Deserialize, Serialize};

/// a row of routes.txt.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RouteRecord {
    pub route_id: String,
    #[serde(default)]
    pub agency_id: String,
    /// rider-facing label, used as the edge key of the multigraph.
    #[serde(default)]
    pub route_short_name: String,
    #[serde(default)]
    pub route_color: String,
}
