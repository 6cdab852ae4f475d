//! Various types related to graph mining.

/// The vertex id type.
///
/// Data graph vertex ids come from the input and may be sparse.  Pattern
/// vertex ids are always the dense range `0..vertex_count()` and denote
/// roles in the pattern, not data graph identities.
pub type VId = i32;

/// A labeled vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub id: VId,
    pub label: String,
}

impl Vertex {
    pub fn new(id: VId, label: &str) -> Self {
        Self {
            id,
            label: String::from(label),
        }
    }
}

/// A labeled edge stored as an arc from `source` to `target`.
///
/// Whether the arc is interpreted symmetrically depends on the owning
/// graph's directedness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: VId,
    pub target: VId,
    pub label: String,
}

impl Edge {
    pub fn new(source: VId, target: VId, label: &str) -> Self {
        Self {
            source,
            target,
            label: String::from(label),
        }
    }
}
