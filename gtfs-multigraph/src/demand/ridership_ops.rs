use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

use super::{ComplexRidership, DemandError, MappedRidership, RawRidershipRecord, StationMapRecord};

/// parses a ridership count, dropping thousands separators, e.g. `"1,204"` -> `1204.0`.
pub fn parse_ridership(value: &str) -> Option<f64> {
    let cleaned = value.trim().replace(',', "");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// sums ridership per station complex, in order of first appearance. blank ridership
/// cells are missing observations: they add nothing, but their complex is still listed.
///
/// # Errors
///
/// [`DemandError::InvalidRidership`] naming the first row whose ridership is present
/// but does not parse.
pub fn aggregate_ridership(
    records: &[RawRidershipRecord],
) -> Result<Vec<ComplexRidership>, DemandError> {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    let mut n_blank: usize = 0;
    for (row, record) in records.iter().enumerate() {
        let total = totals.entry(record.station_complex_id.trim()).or_insert(0.0);
        if record.ridership.trim().is_empty() {
            n_blank += 1;
            continue;
        }
        let ridership =
            parse_ridership(&record.ridership).ok_or_else(|| DemandError::InvalidRidership {
                row,
                value: record.ridership.clone(),
            })?;
        *total += ridership;
    }
    if n_blank > 0 {
        log::debug!("{n_blank} ridership rows have no value and were skipped");
    }
    log::info!(
        "aggregated {} ridership rows into {} station complexes",
        records.len(),
        totals.len()
    );
    let result = totals
        .into_iter()
        .map(|(station_complex_id, ridership)| ComplexRidership {
            station_complex_id: station_complex_id.to_string(),
            ridership,
        })
        .collect();
    Ok(result)
}

/// left-joins complex ridership onto the station map. a complex mapped to several
/// GTFS stops produces one row per stop; an unmapped complex keeps a single row
/// without a stop id. identical station map rows count once.
pub fn map_to_stops(
    ridership: &[ComplexRidership],
    station_map: &[StationMapRecord],
) -> Vec<MappedRidership> {
    let unique: IndexSet<(&str, &str)> = station_map
        .iter()
        .map(|r| (r.complex_id.trim(), r.gtfs_stop_id.trim()))
        .collect();
    let mut stops_by_complex: HashMap<&str, Vec<&str>> = HashMap::new();
    for (complex_id, stop_id) in unique {
        stops_by_complex.entry(complex_id).or_default().push(stop_id);
    }

    let mut result = vec![];
    let mut unmatched = vec![];
    for row in ridership {
        match stops_by_complex.get(row.station_complex_id.as_str()) {
            Some(stop_ids) => {
                for stop_id in stop_ids {
                    result.push(MappedRidership {
                        station_complex_id: row.station_complex_id.clone(),
                        ridership: row.ridership,
                        gtfs_stop_id: Some(stop_id.to_string()),
                    });
                }
            }
            None => {
                unmatched.push(row.station_complex_id.as_str());
                result.push(MappedRidership {
                    station_complex_id: row.station_complex_id.clone(),
                    ridership: row.ridership,
                    gtfs_stop_id: None,
                });
            }
        }
    }
    if !unmatched.is_empty() {
        log::warn!(
            "{} station complexes have no GTFS stop id: {}",
            unmatched.len(),
            unmatched.iter().join(", ")
        );
    }
    result
}
