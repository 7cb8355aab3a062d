use serde::{Deserialize, Serialize};

/// a row of stops.txt. coordinates are kept as the text found in the feed so that
/// missing or malformed values pass through to the exports unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct StopRecord {
    pub stop_id: String,
    /// empty when this stop is its own station.
    #[serde(default)]
    pub parent_station: String,
    #[serde(default)]
    pub stop_name: String,
    #[serde(default)]
    pub stop_lon: String,
    #[serde(default)]
    pub stop_lat: String,
}
