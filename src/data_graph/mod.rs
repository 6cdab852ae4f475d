//! The data graph.

pub use graph::DataGraph;
pub use info::{vlabel_histogram, GraphInfo};
pub use load::{load_graph, load_graph_sqlite, read_graph};

mod graph;
mod info;
mod load;
