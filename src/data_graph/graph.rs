use crate::types::{Edge, VId, Vertex};
use std::collections::HashMap;

/// The target graph the patterns are mined from.
///
/// Built once by a loader, then held behind a shared reference by the
/// mining core; nothing mutates it after [`build_adjacency_index`] has run.
///
/// [`build_adjacency_index`]: #method.build_adjacency_index
pub struct DataGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    adjacency: HashMap<VId, Vec<VId>>,
    edge_labels: HashMap<(VId, VId), Vec<String>>,
    directed: bool,
}

impl DataGraph {
    pub fn new() -> Self {
        Self {
            vertices: vec![],
            edges: vec![],
            adjacency: HashMap::new(),
            edge_labels: HashMap::new(),
            directed: false,
        }
    }

    pub fn add_vertex(&mut self, id: VId, label: &str) {
        self.vertices.push(Vertex::new(id, label));
    }

    pub fn add_edge(&mut self, source: VId, target: VId, label: &str) {
        self.edges.push(Edge::new(source, target, label));
    }

    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Recomputes the derived indices from the current edge list.
    ///
    /// Must be called after loading and before any query.  Idempotent.
    /// An undirected graph gets symmetric adjacency rows; a directed graph
    /// only forward rows.  The edge label index always keeps the stored
    /// arc orientation.
    pub fn build_adjacency_index(&mut self) {
        self.adjacency.clear();
        self.edge_labels.clear();
        for edge in &self.edges {
            self.adjacency
                .entry(edge.source)
                .or_insert_with(Vec::new)
                .push(edge.target);
            if !self.directed {
                self.adjacency
                    .entry(edge.target)
                    .or_insert_with(Vec::new)
                    .push(edge.source);
            }
            self.edge_labels
                .entry((edge.source, edge.target))
                .or_insert_with(Vec::new)
                .push(edge.label.clone());
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn neighbors(&self, vid: VId) -> Option<&[VId]> {
        self.adjacency.get(&vid).map(|ns| ns.as_slice())
    }

    /// Returns whether an arc `source -> target` with `label` is stored.
    ///
    /// The probe is orientation-exact even for undirected graphs: it asks
    /// about the stored arc, not the symmetric relation.
    pub fn has_edge(&self, source: VId, target: VId, label: &str) -> bool {
        self.edge_labels
            .get(&(source, target))
            .map_or(false, |labels| labels.iter().any(|l| l == label))
    }
}
