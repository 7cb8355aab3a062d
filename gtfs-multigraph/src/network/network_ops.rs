use std::path::Path;

use super::{segment_trips, EdgeOrientation, NetworkError, StopCanonicalizer, TransitMultigraph};
use crate::feed::{ReferenceTables, StopTimeRecord, STOP_TIMES_FILENAME};
use crate::util::table_ops;

pub fn read_stop_times(feed_directory: &Path) -> Result<Vec<StopTimeRecord>, NetworkError> {
    let stop_times: Vec<StopTimeRecord> =
        table_ops::read_table(&feed_directory.join(STOP_TIMES_FILENAME))?;
    log::info!("stop times {}", stop_times.len());
    Ok(stop_times)
}

/// segments the retained trips and builds the station multigraph from them.
pub fn build_network<I>(
    tables: &ReferenceTables,
    stop_times: I,
    orientation: EdgeOrientation,
) -> Result<TransitMultigraph, NetworkError>
where
    I: IntoIterator<Item = StopTimeRecord>,
{
    let segments = segment_trips(stop_times, &tables.trips);
    let canonicalizer = StopCanonicalizer::new(&tables.stops);
    let graph = TransitMultigraph::new(&canonicalizer, &segments, orientation)?;
    log::info!("built {:?} network", graph.orientation());

    let unplottable = graph
        .nodes
        .iter()
        .filter(|n| n.position().is_none())
        .map(|n| n.stop_id.as_str())
        .collect::<Vec<_>>();
    if !unplottable.is_empty() {
        log::warn!(
            "{} nodes have no valid numeric coordinates: {}",
            unplottable.len(),
            unplottable.join(", ")
        );
    }
    Ok(graph)
}
