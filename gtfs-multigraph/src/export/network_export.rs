use std::path::Path;

use super::{
    writer_ops, EdgeRow, ExportError, NodeRow, RouteRow, StopRoutesRow, TransferEdgeRow,
};
use crate::network::{NetworkError, NetworkIndex, TransferEdge};

pub const NODES_TABLE: &str = "nodes";
pub const ROUTES_TABLE: &str = "routes";
pub const EDGES_TABLE: &str = "edges_by_route";
pub const TRANSFER_EDGES_TABLE: &str = "transfer_edges";
pub const STOP_ROUTES_TABLE: &str = "stop_routes";

/// all rectangular tables describing one built network.
#[derive(Clone, Debug, Default)]
pub struct NetworkTables {
    pub nodes: Vec<NodeRow>,
    pub routes: Vec<RouteRow>,
    pub edges: Vec<EdgeRow>,
    pub transfer_edges: Vec<TransferEdgeRow>,
    pub stop_routes: Vec<StopRoutesRow>,
}

impl NetworkTables {
    pub fn new(
        index: &NetworkIndex,
        transfers: &[TransferEdge],
    ) -> Result<NetworkTables, NetworkError> {
        Ok(NetworkTables {
            nodes: node_rows(index),
            routes: route_rows(index),
            edges: edge_rows(index)?,
            transfer_edges: transfer_edge_rows(transfers),
            stop_routes: stop_routes_rows(index),
        })
    }

    /// writes all five tables into `output_directory`. every target is checked
    /// before the first file is created.
    pub fn write(
        &self,
        output_directory: &Path,
        compress: bool,
        overwrite: bool,
    ) -> Result<(), ExportError> {
        let filenames = [
            NODES_TABLE,
            ROUTES_TABLE,
            EDGES_TABLE,
            TRANSFER_EDGES_TABLE,
            STOP_ROUTES_TABLE,
        ]
        .map(|name| writer_ops::table_filename(name, compress));
        let paths = writer_ops::check_targets(output_directory, &filenames, overwrite)?;
        match &paths[..] {
            [nodes, routes, edges, transfer_edges, stop_routes] => {
                writer_ops::write_table_file(nodes, &self.nodes)?;
                writer_ops::write_table_file(routes, &self.routes)?;
                writer_ops::write_table_file(edges, &self.edges)?;
                writer_ops::write_table_file(transfer_edges, &self.transfer_edges)?;
                writer_ops::write_table_file(stop_routes, &self.stop_routes)?;
                Ok(())
            }
            _ => Err(ExportError::CsvWriteError(format!(
                "expected 5 network tables, found {}",
                paths.len()
            ))),
        }
    }
}

pub fn node_rows(index: &NetworkIndex) -> Vec<NodeRow> {
    index
        .nodes()
        .map(|(node_idx, _, node)| NodeRow {
            node_idx,
            stop_id: node.stop_id.clone(),
            stop_name: node.stop_name.clone(),
            stop_lon: node.stop_lon.clone(),
            stop_lat: node.stop_lat.clone(),
        })
        .collect()
}

pub fn route_rows(index: &NetworkIndex) -> Vec<RouteRow> {
    index
        .routes()
        .iter()
        .enumerate()
        .map(|(route_idx, route)| RouteRow {
            route_idx,
            route_short_name: route.to_string(),
        })
        .collect()
}

pub fn edge_rows(index: &NetworkIndex) -> Result<Vec<EdgeRow>, NetworkError> {
    let graph = index.graph();
    index
        .edges()
        .map(|(edge_idx, edge)| {
            let route_idx = index.route_idx(&edge.route_short_name).ok_or_else(|| {
                NetworkError::InternalError(format!(
                    "route '{}' of edge {edge_idx} has no route index",
                    edge.route_short_name
                ))
            })?;
            Ok(EdgeRow {
                edge_idx,
                from_idx: index.node_idx_of(edge.src_node_id),
                to_idx: index.node_idx_of(edge.dst_node_id),
                route_idx,
                from_stop_id: graph.nodes[edge.src_node_id].stop_id.clone(),
                to_stop_id: graph.nodes[edge.dst_node_id].stop_id.clone(),
                route_short_name: edge.route_short_name.clone(),
                count: edge.count,
            })
        })
        .collect()
}

pub fn transfer_edge_rows(transfers: &[TransferEdge]) -> Vec<TransferEdgeRow> {
    transfers
        .iter()
        .enumerate()
        .map(|(transfer_edge_id, t)| TransferEdgeRow {
            transfer_edge_id,
            from_stop_id: t.from_stop_id.clone(),
            to_stop_id: t.to_stop_id.clone(),
            from_idx: t.from_idx,
            to_idx: t.to_idx,
            transfer_type: t.transfer_type.clone(),
            min_transfer_time: t.min_transfer_time.clone(),
            cost: t.cost,
        })
        .collect()
}

pub fn stop_routes_rows(index: &NetworkIndex) -> Vec<StopRoutesRow> {
    let graph = index.graph();
    index
        .nodes()
        .map(|(_, node_id, node)| StopRoutesRow {
            stop_id: node.stop_id.clone(),
            stop_name: node.stop_name.clone(),
            routes_at_stop: graph.routes_at_node(node_id).join(","),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use itertools::Itertools;

    use super::NetworkTables;
    use crate::export::{writer_ops, NodeRow};
    use crate::feed::StopRecord;
    use crate::network::{
        EdgeOrientation, NetworkIndex, NodeOrdering, StopCanonicalizer, TransferEdge,
        TransitMultigraph, TripSegment, TRANSFER_COST,
    };

    fn stops() -> IndexMap<String, StopRecord> {
        [
            ("N1", "Dyckman St", "-73.925536", "40.860531"),
            ("N2", "207 St", "", ""),
            ("N3", "215 St", "-73.915279", "40.869444"),
        ]
        .into_iter()
        .map(|(id, name, lon, lat)| {
            let stop = StopRecord {
                stop_id: id.to_string(),
                parent_station: String::new(),
                stop_name: name.to_string(),
                stop_lon: lon.to_string(),
                stop_lat: lat.to_string(),
            };
            (id.to_string(), stop)
        })
        .collect()
    }

    fn segments() -> Vec<TripSegment> {
        [("N3", "N2", "1"), ("N2", "N1", "1"), ("N3", "N2", "1"), ("N2", "N1", "A")]
            .into_iter()
            .map(|(f, t, r)| TripSegment {
                from_stop_id: f.to_string(),
                to_stop_id: t.to_string(),
                route_short_name: r.to_string(),
            })
            .collect_vec()
    }

    #[test]
    fn test_network_tables() {
        let stops = stops();
        let canonicalizer = StopCanonicalizer::new(&stops);
        let graph =
            TransitMultigraph::new(&canonicalizer, &segments(), EdgeOrientation::Directed)
                .unwrap();
        let index = NetworkIndex::new(&graph, NodeOrdering::CanonicalId);
        let transfers = vec![TransferEdge {
            from_stop_id: String::from("N1"),
            to_stop_id: String::from("N3"),
            from_idx: index.node_idx("N1").unwrap(),
            to_idx: index.node_idx("N3").unwrap(),
            transfer_type: String::from("2"),
            min_transfer_time: String::from("120"),
            cost: TRANSFER_COST,
        }];
        let tables = NetworkTables::new(&index, &transfers).unwrap();

        let node_ids = tables.nodes.iter().map(|n| n.stop_id.as_str()).collect_vec();
        assert_eq!(node_ids, vec!["N1", "N2", "N3"]);
        assert_eq!(
            tables.nodes[1],
            NodeRow {
                node_idx: 1,
                stop_id: String::from("N2"),
                stop_name: String::from("207 St"),
                stop_lon: String::new(),
                stop_lat: String::new(),
            }
        );

        assert_eq!(tables.routes.len(), 2);
        assert_eq!(tables.routes[1].route_short_name, "A");

        assert_eq!(tables.edges.len(), 3);
        let first = &tables.edges[0];
        assert_eq!((first.from_idx, first.to_idx, first.route_idx), (2, 1, 0));
        assert_eq!(first.count, 2);
        let last = &tables.edges[2];
        assert_eq!((last.from_stop_id.as_str(), last.route_short_name.as_str()), ("N2", "A"));
        assert_eq!(last.route_idx, 1);

        assert_eq!(tables.transfer_edges[0].transfer_edge_id, 0);
        assert_eq!(tables.transfer_edges[0].cost, 1);

        let routes_at = tables
            .stop_routes
            .iter()
            .map(|r| (r.stop_id.as_str(), r.routes_at_stop.as_str()))
            .collect_vec();
        assert_eq!(routes_at, vec![("N1", "1,A"), ("N2", "1,A"), ("N3", "1")]);
    }

    #[test]
    fn test_empty_network_tables_keep_headers() {
        let graph = TransitMultigraph::default();
        let index = NetworkIndex::new(&graph, NodeOrdering::Discovery);
        let tables = NetworkTables::new(&index, &[]).unwrap();
        assert!(tables.nodes.is_empty());
        assert!(tables.edges.is_empty());

        let mut buffer: Vec<u8> = vec![];
        writer_ops::write_table(&mut buffer, &tables.edges, "edges").unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "edge_idx,from_idx,to_idx,route_idx,from_stop_id,to_stop_id,route_short_name,count\n"
        );
    }

    #[test]
    fn test_write_network_directory() {
        let directory = std::env::temp_dir().join("gtfs_multigraph_network_export_test");
        std::fs::create_dir_all(&directory).unwrap();
        let stops = stops();
        let canonicalizer = StopCanonicalizer::new(&stops);
        let graph =
            TransitMultigraph::new(&canonicalizer, &segments(), EdgeOrientation::Directed)
                .unwrap();
        let index = NetworkIndex::new(&graph, NodeOrdering::Discovery);
        let tables = NetworkTables::new(&index, &[]).unwrap();
        tables.write(&directory, false, true).unwrap();

        let nodes = std::fs::read_to_string(directory.join("nodes.csv")).unwrap();
        assert!(nodes.starts_with("node_idx,stop_id,stop_name,stop_lon,stop_lat\n"));
        assert_eq!(nodes.lines().count(), 4);
        let transfers = std::fs::read_to_string(directory.join("transfer_edges.csv")).unwrap();
        assert_eq!(transfers.lines().count(), 1);

        let result = tables.write(&directory, false, false);
        assert!(result.is_err());
    }
}
