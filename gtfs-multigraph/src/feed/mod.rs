//! row records and lookup tables for the static GTFS files consumed by the
//! network builder.
mod reference_tables;
mod route_admission;
mod route_record;
mod stop_record;
mod stop_time_record;
mod transfer_record;
mod trip_record;

pub use reference_tables::{ReferenceTables, RetainedTrip};
pub use route_admission::RouteAdmission;
pub use route_record::RouteRecord;
pub use stop_record::StopRecord;
pub use stop_time_record::StopTimeRecord;
pub use transfer_record::TransferRecord;
pub use trip_record::TripRecord;

pub const ROUTES_FILENAME: &str = "routes.txt";
pub const TRIPS_FILENAME: &str = "trips.txt";
pub const STOPS_FILENAME: &str = "stops.txt";
pub const STOP_TIMES_FILENAME: &str = "stop_times.txt";
pub const TRANSFERS_FILENAME: &str = "transfers.txt";
