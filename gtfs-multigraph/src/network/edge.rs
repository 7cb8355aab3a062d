/// identity of an edge in the multigraph: node arena ids plus the route short name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub src_node_id: usize,
    pub dst_node_id: usize,
    pub route_short_name: String,
}

/// the collapsed set of trip segments that share a (from, to, route) triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// arena id of the source node
    pub src_node_id: usize,
    /// arena id of the destination node
    pub dst_node_id: usize,
    pub route_short_name: String,
    /// number of trip segments collapsed into this edge
    pub count: u64,
}

impl Edge {
    pub fn is_incident(&self, node_id: usize) -> bool {
        self.src_node_id == node_id || self.dst_node_id == node_id
    }

    pub fn is_self_loop(&self) -> bool {
        self.src_node_id == self.dst_node_id
    }
}
