use std::path::Path;

use clap::Subcommand;
use serde::{Deserialize, Serialize};

use super::{AppError, NetworkConfig};
use crate::demand::demand_ops;
use crate::export::NetworkTables;
use crate::feed::ReferenceTables;
use crate::network::{
    network_ops, transfer_ops, EdgeOrientation, NetworkIndex, NodeOrdering, StopCanonicalizer,
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum MultigraphOperation {
    /// build the station network of a GTFS feed and write its node, route, edge,
    /// transfer and stop-route tables
    Network {
        /// directory containing routes.txt, trips.txt, stops.txt, stop_times.txt
        /// and optionally transfers.txt
        #[arg(long)]
        feed_directory: String,
        #[arg(long)]
        output_directory: String,
        /// .toml or .json file with network build parameters
        #[arg(long)]
        configuration_file: Option<String>,
        /// overrides the node ordering of the configuration
        #[arg(long, value_enum)]
        node_ordering: Option<NodeOrdering>,
        /// overrides the edge orientation of the configuration
        #[arg(long, value_enum)]
        edge_orientation: Option<EdgeOrientation>,
    },
    /// sum a raw ridership export per station complex
    AggregateRidership {
        #[arg(long)]
        input_file: String,
        #[arg(long)]
        output_file: String,
    },
    /// attach GTFS stop ids to aggregated station complex ridership
    MapRidership {
        #[arg(long)]
        input_file: String,
        /// station list with 'Complex ID' and 'GTFS Stop ID' columns
        #[arg(long)]
        station_map_file: String,
        #[arg(long)]
        output_file: String,
    },
    /// join network nodes with morning and evening ridership and balance the net demand
    Demand {
        /// nodes.csv written by the network operation
        #[arg(long)]
        nodes_file: String,
        #[arg(long)]
        morning_file: String,
        #[arg(long)]
        evening_file: String,
        #[arg(long)]
        output_directory: String,
        /// .toml or .json file; only the compress and overwrite settings are used
        #[arg(long)]
        configuration_file: Option<String>,
    },
}

impl MultigraphOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            MultigraphOperation::Network {
                feed_directory,
                output_directory,
                configuration_file,
                node_ordering,
                edge_orientation,
            } => {
                let mut conf = read_configuration(configuration_file.as_deref())?;
                if let Some(ordering) = node_ordering {
                    conf.node_ordering = *ordering;
                }
                if let Some(orientation) = edge_orientation {
                    conf.edge_orientation = *orientation;
                }
                run_network(Path::new(feed_directory), Path::new(output_directory), &conf)
            }
            MultigraphOperation::AggregateRidership {
                input_file,
                output_file,
            } => {
                demand_ops::aggregate_ridership_file(
                    Path::new(input_file),
                    Path::new(output_file),
                )?;
                Ok(())
            }
            MultigraphOperation::MapRidership {
                input_file,
                station_map_file,
                output_file,
            } => {
                demand_ops::map_ridership_file(
                    Path::new(input_file),
                    Path::new(station_map_file),
                    Path::new(output_file),
                )?;
                Ok(())
            }
            MultigraphOperation::Demand {
                nodes_file,
                morning_file,
                evening_file,
                output_directory,
                configuration_file,
            } => {
                let conf = read_configuration(configuration_file.as_deref())?;
                demand_ops::run_demand(
                    Path::new(nodes_file),
                    Path::new(morning_file),
                    Path::new(evening_file),
                    Path::new(output_directory),
                    conf.compress,
                    conf.overwrite,
                )?;
                Ok(())
            }
        }
    }
}

fn read_configuration(configuration_file: Option<&str>) -> Result<NetworkConfig, AppError> {
    let conf = match configuration_file {
        None => NetworkConfig::default(),
        Some(f) => {
            log::info!("reading configuration from {f}");
            NetworkConfig::from_file(Path::new(f))?
        }
    };
    let conf_json = serde_json::to_string(&conf).map_err(|e| {
        AppError::ConfigurationError(format!("failure encoding configuration: {e}"))
    })?;
    log::debug!("configuration: {conf_json}");
    Ok(conf)
}

/// reads the feed, builds and indexes the network, maps transfers, and writes
/// all network tables. nothing is written if any stage fails.
pub fn run_network(
    feed_directory: &Path,
    output_directory: &Path,
    conf: &NetworkConfig,
) -> Result<(), AppError> {
    let tables = ReferenceTables::read(feed_directory, &conf.route_admission())?;
    let stop_times = network_ops::read_stop_times(feed_directory)?;
    let graph = network_ops::build_network(&tables, stop_times, conf.edge_orientation)?;
    let index = NetworkIndex::new(&graph, conf.node_ordering);
    log::info!(
        "indexed {} nodes, {} routes, {} edges (keyed by route)",
        index.n_nodes(),
        index.n_routes(),
        index.n_edges()
    );

    let canonicalizer = StopCanonicalizer::new(&tables.stops);
    let transfers = transfer_ops::map_transfers(&tables.transfers, &canonicalizer, &index)?;
    let export = NetworkTables::new(&index, &transfers)?;
    export.write(output_directory, conf.compress, conf.overwrite)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{run_network, MultigraphOperation};
    use crate::app::{GtfsMultigraphApp, NetworkConfig};
    use crate::network::{EdgeOrientation, NodeOrdering};

    #[test]
    fn test_parse_network_arguments() {
        let app = GtfsMultigraphApp::try_parse_from([
            "gtfs_multigraph",
            "network",
            "--feed-directory",
            "feed",
            "--output-directory",
            "out",
            "--node-ordering",
            "canonical-id",
        ])
        .unwrap();
        match app.op {
            MultigraphOperation::Network {
                node_ordering,
                edge_orientation,
                configuration_file,
                ..
            } => {
                assert_eq!(node_ordering, Some(NodeOrdering::CanonicalId));
                assert_eq!(edge_orientation, None);
                assert_eq!(configuration_file, None);
            }
            _ => panic!("expected network operation"),
        }
    }

    #[test]
    fn test_run_network_on_test_feed() {
        let feed = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join("feed");
        let output = std::env::temp_dir().join("gtfs_multigraph_run_network_test");
        std::fs::create_dir_all(&output).unwrap();
        let conf = NetworkConfig {
            node_ordering: NodeOrdering::CanonicalId,
            edge_orientation: EdgeOrientation::Directed,
            ..Default::default()
        };
        run_network(&feed, &output, &conf).unwrap();

        let routes = std::fs::read_to_string(output.join("routes.csv")).unwrap();
        assert_eq!(routes, "route_idx,route_short_name\n0,1\n1,2\n2,A\n");
        let edges = std::fs::read_to_string(output.join("edges_by_route.csv")).unwrap();
        assert_eq!(edges.lines().count(), 7);
        let transfers = std::fs::read_to_string(output.join("transfer_edges.csv")).unwrap();
        assert_eq!(transfers.lines().count(), 3);
    }
}
