use crate::types::{Edge, VId, Vertex};
use std::collections::HashMap;

/// A candidate subgraph being tested for frequency.
///
/// Vertex ids are the dense role range `0..vertex_count()`.  Patterns are
/// value objects: the mining engine extends a pattern by cloning it and
/// appending a vertex with its edges, so every search branch owns its own
/// copy and no emitted pattern is ever mutated in place.
#[derive(Debug, Clone)]
pub struct Pattern {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    adjacency: HashMap<VId, Vec<VId>>,
}

impl Pattern {
    pub fn new() -> Self {
        Self {
            vertices: vec![],
            edges: vec![],
            adjacency: HashMap::new(),
        }
    }

    pub fn add_vertex(&mut self, id: VId, label: &str) {
        self.vertices.push(Vertex::new(id, label));
    }

    pub fn add_edge(&mut self, source: VId, target: VId, label: &str) {
        self.edges.push(Edge::new(source, target, label));
    }

    /// Recomputes the adjacency rows from the edge list.  Pattern edges are
    /// stored as arcs, so rows are forward-only; the engine inserts both
    /// arcs of an undirected connection explicitly.
    pub fn build_adjacency_index(&mut self) {
        self.adjacency.clear();
        for edge in &self.edges {
            self.adjacency
                .entry(edge.source)
                .or_insert_with(Vec::new)
                .push(edge.target);
        }
    }

    /// A pattern is valid iff it has at least one vertex and every edge
    /// endpoint is an in-range role id.
    pub fn is_valid(&self) -> bool {
        if self.vertices.is_empty() {
            return false;
        }
        let num_roles = self.vertices.len() as VId;
        self.edges
            .iter()
            .all(|e| (0..num_roles).contains(&e.source) && (0..num_roles).contains(&e.target))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_empty() {
        assert!(!Pattern::new().is_valid());
    }

    #[test]
    fn test_is_valid_single_vertex() {
        let mut pattern = Pattern::new();
        pattern.add_vertex(0, "a");
        assert!(pattern.is_valid());
    }

    #[test]
    fn test_is_valid_edge_out_of_range() {
        let mut pattern = Pattern::new();
        pattern.add_vertex(0, "a");
        pattern.add_edge(0, 1, "e");
        assert!(!pattern.is_valid());
        pattern.add_vertex(1, "b");
        assert!(pattern.is_valid());
    }

    #[test]
    fn test_is_valid_negative_endpoint() {
        let mut pattern = Pattern::new();
        pattern.add_vertex(0, "a");
        pattern.add_edge(-1, 0, "e");
        assert!(!pattern.is_valid());
    }

    #[test]
    fn test_adjacency_forward_only() {
        let mut pattern = Pattern::new();
        pattern.add_vertex(0, "a");
        pattern.add_vertex(1, "b");
        pattern.add_edge(0, 1, "e");
        pattern.build_adjacency_index();
        assert_eq!(pattern.neighbors(0), Some(&[1][..]));
        assert_eq!(pattern.neighbors(1), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut pattern = Pattern::new();
        pattern.add_vertex(0, "a");
        let mut extension = pattern.clone();
        extension.add_vertex(1, "b");
        extension.add_edge(0, 1, "e");
        assert_eq!(pattern.vertex_count(), 1);
        assert_eq!(pattern.edge_count(), 0);
        assert_eq!(extension.vertex_count(), 2);
    }
}
