//! builds a canonical station multigraph from a GTFS feed and balances per-station
//! demand from morning and evening ridership.
use clap::Parser;
use gtfs_multigraph::app::GtfsMultigraphApp;

fn main() {
    env_logger::init();
    let args = GtfsMultigraphApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
