use clap::Parser;

use super::MultigraphOperation;

/// builds a station multigraph from a GTFS feed and balances station demand
/// from ridership counts
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GtfsMultigraphApp {
    #[command(subcommand)]
    pub op: MultigraphOperation,
}
