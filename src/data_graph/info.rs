use crate::data_graph::DataGraph;
use derive_more::Display;
use itertools::Itertools;

/// Summary statistics of a data graph.
#[derive(Debug, Display)]
#[display(
    fmt = "num_vertices: {}\nnum_edges: {}\nnum_vlabels: {}\nnum_elabels: {}\ndirected: {}",
    num_vertices,
    num_edges,
    num_vlabels,
    num_elabels,
    directed
)]
pub struct GraphInfo {
    num_vertices: usize,
    num_edges: usize,
    num_vlabels: usize,
    num_elabels: usize,
    directed: bool,
}

impl GraphInfo {
    pub fn new(graph: &DataGraph) -> Self {
        Self {
            num_vertices: graph.vertex_count(),
            num_edges: graph.edge_count(),
            num_vlabels: graph.vertices().iter().map(|v| &v.label).unique().count(),
            num_elabels: graph.edges().iter().map(|e| &e.label).unique().count(),
            directed: graph.directed(),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}

/// Counts vertices per label, most frequent first.
pub fn vlabel_histogram(graph: &DataGraph) -> Vec<(String, usize)> {
    graph
        .vertices()
        .iter()
        .map(|v| v.label.clone())
        .sorted()
        .dedup_with_count()
        .map(|(count, label)| (label, count))
        .sorted_by(|(l1, c1), (l2, c2)| c2.cmp(c1).then(l1.cmp(l2)))
        .collect()
}
