use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{DemandError, MappedRidership};
use crate::export::{NodeRow, TableRow};

/// a network node with the morning and evening ridership of its station complex.
/// nodes without a matching complex have no complex id and no ridership.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NodeRidershipRow {
    pub node_idx: usize,
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lon: String,
    pub stop_lat: String,
    pub station_complex_id: Option<String>,
    pub ridership_morning: Option<f64>,
    pub ridership_evening: Option<f64>,
}

impl TableRow for NodeRidershipRow {
    const HEADER: &'static [&'static str] = &[
        "node_idx",
        "stop_id",
        "stop_name",
        "stop_lon",
        "stop_lat",
        "station_complex_id",
        "ridership_morning",
        "ridership_evening",
    ];
}

/// the single mapped row for each GTFS stop id. repeated rows that agree are
/// collapsed, rows that disagree make the join ambiguous.
fn unique_by_stop<'a>(
    rows: &'a [MappedRidership],
    with_complex: bool,
) -> Result<HashMap<&'a str, &'a MappedRidership>, DemandError> {
    let mut lookup: HashMap<&str, &MappedRidership> = HashMap::new();
    for row in rows {
        let Some(stop_id) = row.gtfs_stop_id.as_deref().map(str::trim) else {
            continue;
        };
        match lookup.get(stop_id) {
            None => {
                lookup.insert(stop_id, row);
            }
            Some(existing) => {
                let agrees = existing.ridership == row.ridership
                    && (!with_complex || existing.station_complex_id == row.station_complex_id);
                if !agrees {
                    return Err(DemandError::AmbiguousJoin {
                        stop_id: stop_id.to_string(),
                        first: format!(
                            "complex {} ridership {}",
                            existing.station_complex_id, existing.ridership
                        ),
                        second: format!(
                            "complex {} ridership {}",
                            row.station_complex_id, row.ridership
                        ),
                    });
                }
            }
        }
    }
    Ok(lookup)
}

/// left-joins nodes with morning (complex id and ridership) and evening (ridership)
/// rows on GTFS stop id.
///
/// # Errors
///
/// [`DemandError::AmbiguousJoin`] when a stop id maps to rows that disagree.
pub fn join_node_ridership(
    nodes: &[NodeRow],
    morning: &[MappedRidership],
    evening: &[MappedRidership],
) -> Result<Vec<NodeRidershipRow>, DemandError> {
    let morning_lookup = unique_by_stop(morning, true)?;
    let evening_lookup = unique_by_stop(evening, false)?;

    let result = nodes
        .iter()
        .map(|node| {
            let am = morning_lookup.get(node.stop_id.as_str());
            let pm = evening_lookup.get(node.stop_id.as_str());
            NodeRidershipRow {
                node_idx: node.node_idx,
                stop_id: node.stop_id.clone(),
                stop_name: node.stop_name.clone(),
                stop_lon: node.stop_lon.clone(),
                stop_lat: node.stop_lat.clone(),
                station_complex_id: am.map(|r| r.station_complex_id.clone()),
                ridership_morning: am.map(|r| r.ridership),
                ridership_evening: pm.map(|r| r.ridership),
            }
        })
        .collect_vec();

    let unmatched = result
        .iter()
        .filter(|r| r.station_complex_id.is_none())
        .map(|r| r.stop_id.as_str())
        .collect_vec();
    if !unmatched.is_empty() {
        log::warn!(
            "{} nodes have no matching station complex: {}",
            unmatched.len(),
            unmatched.join(", ")
        );
    }
    Ok(result)
}
