use serde::{Deserialize, Serialize};

/// a row of stop_times.txt. only the columns needed to segment trips are read.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct StopTimeRecord {
    pub trip_id: String,
    pub stop_id: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub stop_sequence: Option<u32>,
}
