use serde::{Deserialize, Serialize};

use crate::export::TableRow;

/// one observation of a ridership export, before aggregation. the ridership
/// column is text and may carry thousands separators.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct RawRidershipRecord {
    pub station_complex_id: String,
    #[serde(default)]
    pub ridership: String,
}

/// total ridership of one station complex.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ComplexRidership {
    pub station_complex_id: String,
    pub ridership: f64,
}

impl TableRow for ComplexRidership {
    const HEADER: &'static [&'static str] = &["station_complex_id", "ridership"];
}

/// a row of the station map relating station complexes to GTFS stops. other
/// columns of the station map are ignored.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StationMapRecord {
    #[serde(rename = "Complex ID")]
    pub complex_id: String,
    #[serde(rename = "GTFS Stop ID")]
    pub gtfs_stop_id: String,
}

/// complex ridership with the GTFS stop it maps to, if any.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MappedRidership {
    pub station_complex_id: String,
    pub ridership: f64,
    #[serde(
        rename = "GTFS Stop ID",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub gtfs_stop_id: Option<String>,
}

impl TableRow for MappedRidership {
    const HEADER: &'static [&'static str] = &["station_complex_id", "ridership", "GTFS Stop ID"];
}
