use crate::{
    data_graph::DataGraph,
    pattern::Pattern,
    types::{VId, Vertex},
};
use std::collections::HashMap;

/// A witness that a pattern occurs in the data graph under one specific
/// role assignment.
///
/// `support` is this occurrence's contribution to the pattern's support
/// statistic.  Matches are ephemeral: the engine folds them into a support
/// value and drops them.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub mapping: HashMap<VId, VId>,
    pub support: f64,
}

impl Pattern {
    /// Enumerates every role assignment realizing this pattern in `target`.
    ///
    /// Roles are assigned in increasing id order by exhaustive backtracking
    /// over all target vertices.  Two roles may map to the same target
    /// vertex; injectivity is not enforced.
    pub fn find_occurrences(&self, target: &DataGraph) -> Vec<Match> {
        let mut matches = vec![];
        let mut mapping = HashMap::new();
        self.assign_role(target, 0, &mut mapping, &mut matches);
        matches
    }

    /// The occurrence density: occurrence count over target vertex count.
    pub fn calculate_support(&self, target: &DataGraph) -> f64 {
        let matches = self.find_occurrences(target);
        if matches.is_empty() {
            return 0.0;
        }
        matches.len() as f64 / target.vertex_count() as f64
    }

    fn assign_role(
        &self,
        target: &DataGraph,
        role: usize,
        mapping: &mut HashMap<VId, VId>,
        matches: &mut Vec<Match>,
    ) {
        if role == self.vertex_count() {
            matches.push(Match {
                mapping: mapping.clone(),
                support: 1.0 / target.vertex_count() as f64,
            });
            return;
        }
        for candidate in target.vertices() {
            if self.is_compatible_assignment(role, candidate, mapping, target) {
                mapping.insert(role as VId, candidate.id);
                self.assign_role(target, role + 1, mapping, matches);
                mapping.remove(&(role as VId));
            }
        }
    }

    /// Checks whether `candidate` can play `role` given the roles assigned
    /// so far: its label must equal the role's label, and every pattern arc
    /// from `role` to an already-assigned role must be mirrored by a stored
    /// target arc with the same label.  Arcs whose source role is still
    /// unassigned are left to that role's own assignment step.
    fn is_compatible_assignment(
        &self,
        role: usize,
        candidate: &Vertex,
        mapping: &HashMap<VId, VId>,
        target: &DataGraph,
    ) -> bool {
        if self.vertices()[role].label != candidate.label {
            return false;
        }
        for edge in self.edges() {
            if edge.source as usize == role {
                if let Some(&assigned) = mapping.get(&edge.target) {
                    if !target.has_edge(candidate.id, assigned, &edge.label) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
