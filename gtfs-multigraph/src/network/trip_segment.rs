use indexmap::IndexMap;
use itertools::Itertools;

use crate::feed::{RetainedTrip, StopTimeRecord};

/// a pair of consecutive stops on a retained trip, before canonicalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripSegment {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub route_short_name: String,
}

/// groups stop times by trip and walks each retained trip's stops in order, emitting
/// one segment per consecutive pair.
///
/// stop times are grouped by trip id wherever they appear in the file, and ordered by
/// `stop_sequence` within a trip when every row of the trip has one (otherwise the trip
/// keeps file order). trips that are not retained, or that have fewer than two stop times, emit
/// nothing.
pub fn segment_trips<I>(stop_times: I, trips: &IndexMap<String, RetainedTrip>) -> Vec<TripSegment>
where
    I: IntoIterator<Item = StopTimeRecord>,
{
    let mut by_trip: IndexMap<String, Vec<StopTimeRecord>> = IndexMap::new();
    let mut n_dropped_rows: usize = 0;
    for stop_time in stop_times {
        if trips.contains_key(&stop_time.trip_id) {
            by_trip
                .entry(stop_time.trip_id.clone())
                .or_default()
                .push(stop_time);
        } else {
            n_dropped_rows += 1;
        }
    }
    log::debug!("skipped {n_dropped_rows} stop times of trips that were not retained");

    let mut n_short_trips: usize = 0;
    let mut n_unsequenced_trips: usize = 0;
    let mut segments = vec![];
    for (trip_id, mut trip_stop_times) in by_trip {
        let Some(trip) = trips.get(&trip_id) else {
            continue;
        };
        if trip_stop_times.len() < 2 {
            n_short_trips += 1;
            continue;
        }
        // a trip is reordered only when every row carries a sequence; sort is stable
        if trip_stop_times.iter().all(|st| st.stop_sequence.is_some()) {
            trip_stop_times.sort_by_key(|st| st.stop_sequence);
        } else {
            n_unsequenced_trips += 1;
        }
        let trip_segments = trip_stop_times
            .iter()
            .tuple_windows()
            .map(|(src, dst)| TripSegment {
                from_stop_id: src.stop_id.clone(),
                to_stop_id: dst.stop_id.clone(),
                route_short_name: trip.route_short_name.clone(),
            });
        segments.extend(trip_segments);
    }
    if n_short_trips > 0 {
        log::debug!("{n_short_trips} trips have fewer than 2 stop times and produce no edges");
    }
    if n_unsequenced_trips > 0 {
        log::debug!(
            "{n_unsequenced_trips} trips lack a stop_sequence on some rows and keep file order"
        );
    }
    log::info!("edges (trip segments) {}", segments.len());
    segments
}
