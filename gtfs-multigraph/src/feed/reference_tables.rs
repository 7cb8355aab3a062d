use std::path::Path;

use indexmap::IndexMap;

use super::{
    RouteAdmission, RouteRecord, StopRecord, TransferRecord, TripRecord, ROUTES_FILENAME,
    STOPS_FILENAME, TRANSFERS_FILENAME, TRIPS_FILENAME,
};
use crate::network::NetworkError;
use crate::util::table_ops;

/// a trip on an admitted route, carrying the labels of its route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetainedTrip {
    pub trip_id: String,
    pub route_short_name: String,
    pub route_color: String,
}

/// the lookup tables of a GTFS feed, keyed by entity id and kept in file order.
/// only admitted routes and the trips that run on them are retained.
#[derive(Clone, Debug, Default)]
pub struct ReferenceTables {
    pub routes: IndexMap<String, RouteRecord>,
    pub trips: IndexMap<String, RetainedTrip>,
    pub stops: IndexMap<String, StopRecord>,
    pub transfers: Vec<TransferRecord>,
}

impl ReferenceTables {
    /// builds the lookup tables from already-parsed rows, applying route admission.
    /// trips of routes that are not admitted are dropped.
    pub fn new(
        routes: Vec<RouteRecord>,
        trips: Vec<TripRecord>,
        stops: Vec<StopRecord>,
        transfers: Vec<TransferRecord>,
        admission: &RouteAdmission,
    ) -> ReferenceTables {
        let routes: IndexMap<String, RouteRecord> = routes
            .into_iter()
            .filter(|r| admission.admits(r))
            .map(|r| (r.route_id.clone(), r))
            .collect();

        let n_trips_total = trips.len();
        let trips: IndexMap<String, RetainedTrip> = trips
            .into_iter()
            .filter_map(|trip| {
                let route = routes.get(&trip.route_id)?;
                let retained = RetainedTrip {
                    trip_id: trip.trip_id.clone(),
                    route_short_name: route.route_short_name.clone(),
                    route_color: route.route_color.clone(),
                };
                Some((trip.trip_id, retained))
            })
            .collect();
        log::debug!(
            "dropped {} trips on routes that were not admitted",
            n_trips_total - trips.len()
        );

        let stops: IndexMap<String, StopRecord> = stops
            .into_iter()
            .map(|s| (s.stop_id.clone(), s))
            .collect();

        log::info!("routes {}", routes.len());
        log::info!("trips {}", trips.len());
        log::info!("stops {}", stops.len());
        log::info!("transfers {}", transfers.len());

        ReferenceTables {
            routes,
            trips,
            stops,
            transfers,
        }
    }

    /// reads routes, trips, stops and (optionally) transfers from a GTFS directory.
    pub fn read(
        feed_directory: &Path,
        admission: &RouteAdmission,
    ) -> Result<ReferenceTables, NetworkError> {
        let routes = table_ops::read_table(&feed_directory.join(ROUTES_FILENAME))?;
        let trips = table_ops::read_table(&feed_directory.join(TRIPS_FILENAME))?;
        let stops = table_ops::read_table(&feed_directory.join(STOPS_FILENAME))?;
        let transfers = table_ops::read_optional_table(&feed_directory.join(TRANSFERS_FILENAME))?;
        Ok(ReferenceTables::new(
            routes, trips, stops, transfers, admission,
        ))
    }
}
