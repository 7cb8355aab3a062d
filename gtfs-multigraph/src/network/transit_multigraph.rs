use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use super::{Edge, EdgeKey, EdgeOrientation, Node, NetworkError, StopCanonicalizer, TripSegment};

/// station multigraph with route-keyed edges, stored as dense node and edge arenas.
/// an edge exists at most once per (from, to, route) key; repeated trip segments
/// increase its count.
#[derive(Clone, Debug, Default)]
pub struct TransitMultigraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    orientation: EdgeOrientation,
    /// for each canonical stop id, the node arena id
    node_lookup: HashMap<String, usize>,
    /// for each edge key, the edge arena id
    edge_lookup: HashMap<EdgeKey, usize>,
}

impl TransitMultigraph {
    /// builds the network from the trip segments of all retained trips.
    ///
    /// nodes are created by walking the stops table in file order and materializing
    /// each canonical station referenced by at least one segment. edges are then
    /// upserted for each segment after canonicalizing both endpoints.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownStop`] if any segment references a stop id, or any
    /// referenced station, that is not in the stops table.
    pub fn new(
        canonicalizer: &StopCanonicalizer,
        segments: &[TripSegment],
        orientation: EdgeOrientation,
    ) -> Result<TransitMultigraph, NetworkError> {
        let canonical_segments = segments
            .iter()
            .map(|s| {
                let src = canonicalizer.canonicalize(&s.from_stop_id)?;
                let dst = canonicalizer.canonicalize(&s.to_stop_id)?;
                Ok((src, dst, s.route_short_name.as_str()))
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;
        let referenced: HashSet<&str> = canonical_segments
            .iter()
            .flat_map(|(src, dst, _)| [*src, *dst])
            .collect();
        log::info!("stops {}", referenced.len());

        let mut graph = TransitMultigraph {
            orientation,
            ..Default::default()
        };

        for stop in canonicalizer.stops() {
            let canonical_id = canonicalizer.canonicalize(&stop.stop_id)?;
            if referenced.contains(canonical_id) && !graph.node_lookup.contains_key(canonical_id)
            {
                let station = canonicalizer.canonical_stop(&stop.stop_id)?;
                graph.add_node(Node::from(station));
            }
        }
        log::info!("Nodes: {}", graph.nodes.len());

        for (src, dst, route_short_name) in canonical_segments {
            let src_node_id = graph.expect_node_id(src)?;
            let dst_node_id = graph.expect_node_id(dst)?;
            graph.upsert_edge(src_node_id, dst_node_id, route_short_name);
        }
        log::info!("Edges (MultiGraph): {}", graph.edges.len());

        Ok(graph)
    }

    pub fn orientation(&self) -> EdgeOrientation {
        self.orientation
    }

    /// node arena id for a canonical stop id
    pub fn node_id(&self, stop_id: &str) -> Option<usize> {
        self.node_lookup.get(stop_id).copied()
    }

    pub fn node(&self, stop_id: &str) -> Option<&Node> {
        self.node_id(stop_id).and_then(|id| self.nodes.get(id))
    }

    pub fn contains_node(&self, stop_id: &str) -> bool {
        self.node_lookup.contains_key(stop_id)
    }

    /// the edge stored for a (from, to, route) triple under this graph's orientation.
    pub fn edge(&self, from_stop_id: &str, to_stop_id: &str, route_short_name: &str) -> Option<&Edge> {
        let src_node_id = self.node_id(from_stop_id)?;
        let dst_node_id = self.node_id(to_stop_id)?;
        let key = self.orientation.key(src_node_id, dst_node_id, route_short_name);
        self.edge_lookup.get(&key).and_then(|id| self.edges.get(*id))
    }

    /// sorted, distinct short names of routes with an edge touching this node, in
    /// either direction.
    pub fn routes_at_node(&self, node_id: usize) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.is_incident(node_id))
            .map(|e| e.route_short_name.as_str())
            .sorted()
            .dedup()
            .collect_vec()
    }

    fn add_node(&mut self, node: Node) -> usize {
        let node_id = self.nodes.len();
        self.node_lookup.insert(node.stop_id.clone(), node_id);
        self.nodes.push(node);
        node_id
    }

    fn expect_node_id(&self, stop_id: &str) -> Result<usize, NetworkError> {
        self.node_id(stop_id).ok_or_else(|| {
            NetworkError::InternalError(format!(
                "station '{stop_id}' is referenced by a trip segment but has no node"
            ))
        })
    }

    fn upsert_edge(&mut self, src_node_id: usize, dst_node_id: usize, route_short_name: &str) {
        let key = self
            .orientation
            .key(src_node_id, dst_node_id, route_short_name);
        match self.edge_lookup.get(&key) {
            Some(edge_id) => {
                self.edges[*edge_id].count += 1;
            }
            None => {
                let edge_id = self.edges.len();
                self.edges.push(Edge {
                    src_node_id,
                    dst_node_id,
                    route_short_name: route_short_name.to_string(),
                    count: 1,
                });
                self.edge_lookup.insert(key, edge_id);
            }
        }
    }
}
