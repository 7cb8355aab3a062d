use std::collections::HashMap;

use itertools::Itertools;

use super::{Edge, Node, NodeOrdering, TransitMultigraph};

/// dense integer indices over a built [`TransitMultigraph`] for matrix-style use.
///
/// - nodes: `0..N`, by discovery order or by canonical id (see [`NodeOrdering`])
/// - routes: `0..R`, by sorted short name, only routes that appear on an edge
/// - edges: `0..E`, in edge arena order
///
/// the index borrows the graph, so it cannot outlive or observe a mutation of it.
#[derive(Debug)]
pub struct NetworkIndex<'a> {
    graph: &'a TransitMultigraph,
    /// node index -> node arena id
    node_order: Vec<usize>,
    /// node arena id -> node index
    node_positions: Vec<usize>,
    /// canonical stop id -> node index
    node_index: HashMap<&'a str, usize>,
    routes: Vec<&'a str>,
    route_index: HashMap<&'a str, usize>,
}

impl<'a> NetworkIndex<'a> {
    pub fn new(graph: &'a TransitMultigraph, ordering: NodeOrdering) -> NetworkIndex<'a> {
        let node_order: Vec<usize> = match ordering {
            NodeOrdering::Discovery => (0..graph.nodes.len()).collect(),
            NodeOrdering::CanonicalId => (0..graph.nodes.len())
                .sorted_by(|a, b| graph.nodes[*a].stop_id.cmp(&graph.nodes[*b].stop_id))
                .collect(),
        };
        let mut node_positions = vec![0; graph.nodes.len()];
        for (idx, node_id) in node_order.iter().enumerate() {
            node_positions[*node_id] = idx;
        }
        let node_index = node_order
            .iter()
            .enumerate()
            .map(|(idx, node_id)| (graph.nodes[*node_id].stop_id.as_str(), idx))
            .collect();

        let routes = graph
            .edges
            .iter()
            .map(|e| e.route_short_name.as_str())
            .sorted()
            .dedup()
            .collect_vec();
        let route_index = routes
            .iter()
            .enumerate()
            .map(|(idx, route)| (*route, idx))
            .collect();

        log::info!("Num nodes: {}", node_order.len());
        log::info!("Num routes: {}", routes.len());

        NetworkIndex {
            graph,
            node_order,
            node_positions,
            node_index,
            routes,
            route_index,
        }
    }

    pub fn graph(&self) -> &'a TransitMultigraph {
        self.graph
    }

    pub fn n_nodes(&self) -> usize {
        self.node_order.len()
    }

    pub fn n_routes(&self) -> usize {
        self.routes.len()
    }

    pub fn n_edges(&self) -> usize {
        self.graph.edges.len()
    }

    /// node index of a canonical stop id
    pub fn node_idx(&self, stop_id: &str) -> Option<usize> {
        self.node_index.get(stop_id).copied()
    }

    /// node index of a node arena id
    pub fn node_idx_of(&self, node_id: usize) -> usize {
        self.node_positions[node_id]
    }

    pub fn route_idx(&self, route_short_name: &str) -> Option<usize> {
        self.route_index.get(route_short_name).copied()
    }

    /// route short names ordered by route index
    pub fn routes(&self) -> &[&'a str] {
        &self.routes
    }

    /// `(node_idx, node_arena_id, node)` in node index order
    pub fn nodes(&self) -> impl Iterator<Item = (usize, usize, &'a Node)> + '_ {
        let graph = self.graph;
        self.node_order
            .iter()
            .enumerate()
            .map(move |(idx, node_id)| (idx, *node_id, &graph.nodes[*node_id]))
    }

    /// `(edge_idx, edge)` in edge index order
    pub fn edges(&self) -> impl Iterator<Item = (usize, &'a Edge)> {
        let graph = self.graph;
        graph.edges.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use itertools::Itertools;

    use super::NetworkIndex;
    use crate::feed::StopRecord;
    use crate::network::{
        EdgeOrientation, NodeOrdering, StopCanonicalizer, TransitMultigraph, TripSegment,
    };

    fn graph() -> TransitMultigraph {
        let stops: IndexMap<String, StopRecord> = ["Z", "M", "A"]
            .into_iter()
            .map(|id| {
                let stop = StopRecord {
                    stop_id: id.to_string(),
                    ..Default::default()
                };
                (id.to_string(), stop)
            })
            .collect();
        let canonicalizer = StopCanonicalizer::new(&stops);
        let segments = [("Z", "M", "Q"), ("M", "A", "B"), ("A", "M", "Q"), ("Z", "M", "Q")]
            .into_iter()
            .map(|(f, t, r)| TripSegment {
                from_stop_id: f.to_string(),
                to_stop_id: t.to_string(),
                route_short_name: r.to_string(),
            })
            .collect_vec();
        TransitMultigraph::new(&canonicalizer, &segments, EdgeOrientation::Directed).unwrap()
    }

    fn assert_bijection(indices: Vec<usize>) {
        let n = indices.len();
        let sorted = indices.into_iter().sorted().collect_vec();
        assert_eq!(sorted, (0..n).collect_vec());
    }

    #[test]
    fn test_discovery_order() {
        let graph = graph();
        let index = NetworkIndex::new(&graph, NodeOrdering::Discovery);
        assert_eq!(index.node_idx("Z"), Some(0));
        assert_eq!(index.node_idx("M"), Some(1));
        assert_eq!(index.node_idx("A"), Some(2));
    }

    #[test]
    fn test_canonical_id_order() {
        let graph = graph();
        let index = NetworkIndex::new(&graph, NodeOrdering::CanonicalId);
        assert_eq!(index.node_idx("A"), Some(0));
        assert_eq!(index.node_idx("M"), Some(1));
        assert_eq!(index.node_idx("Z"), Some(2));
        for (idx, node_id, node) in index.nodes() {
            assert_eq!(index.node_idx_of(node_id), idx);
            assert_eq!(index.node_idx(&node.stop_id), Some(idx));
        }
    }

    #[test]
    fn test_routes_sorted_and_only_realized() {
        let graph = graph();
        let index = NetworkIndex::new(&graph, NodeOrdering::Discovery);
        assert_eq!(index.routes(), &["B", "Q"]);
        assert_eq!(index.route_idx("B"), Some(0));
        assert_eq!(index.route_idx("Q"), Some(1));
        assert_eq!(index.route_idx("7"), None);
    }

    #[test]
    fn test_indices_are_dense() {
        let graph = graph();
        for ordering in [NodeOrdering::Discovery, NodeOrdering::CanonicalId] {
            let index = NetworkIndex::new(&graph, ordering);
            assert_bijection(index.nodes().map(|(idx, _, _)| idx).collect());
            assert_bijection(
                index
                    .nodes()
                    .map(|(_, node_id, _)| index.node_idx_of(node_id))
                    .collect(),
            );
            assert_bijection(index.edges().map(|(idx, _)| idx).collect());
            assert_bijection(
                index
                    .routes()
                    .iter()
                    .filter_map(|r| index.route_idx(r))
                    .collect(),
            );
            assert_eq!(index.n_edges(), 3);
        }
    }
}
