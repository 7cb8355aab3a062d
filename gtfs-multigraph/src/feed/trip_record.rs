use serde::{Deserialize, Serialize};

/// a row of trips.txt.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TripRecord {
    pub trip_id: String,
    pub route_id: String,
}
