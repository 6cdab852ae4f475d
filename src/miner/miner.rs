use crate::{data_graph::DataGraph, pattern::Pattern, types::VId};
use log::info;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mining configuration, fixed for the engine's lifetime.
#[derive(Debug, Clone)]
pub struct MiningOptions {
    /// Minimum support in `[0, 1]` a pattern must reach to be kept.
    pub min_support: f64,
    /// Extend patterns with forward arcs only instead of arc pairs.
    pub directed: bool,
    /// Relax the frequency threshold by `approx_error`.
    pub approximate: bool,
    /// One-sided threshold relaxation in `[0, 1]`; only ever admits more
    /// patterns than exact mode.
    pub approx_error: f64,
    /// Upper bound on pattern vertex count.
    pub max_pattern_size: usize,
    /// Accepted for interface compatibility; nothing consumes it yet.
    pub max_distance: usize,
}

/// Receives fractional completion updates in `[0, 1]`.
pub type ProgressCallback = Box<dyn Fn(f64) + Send + Sync>;

/// How a pattern grows when its search-tree node is expanded.
#[derive(Clone, Copy)]
enum ExtensionRule {
    /// A new vertex wired to every prior vertex with `"e"` arcs.
    Structural,
    /// `Structural`, plus `"t"` arcs between every ordered pair of prior
    /// vertices, modeling closure relationships.
    Transitive,
}

/// Explores the pattern space of a data graph and keeps the frequent part.
///
/// The engine holds the target graph by shared reference for its entire
/// lifetime; every search branch reads it, none mutates it.
pub struct Miner<'a> {
    target: &'a DataGraph,
    options: MiningOptions,
    progress_callback: Option<ProgressCallback>,
}

impl<'a> Miner<'a> {
    pub fn new(target: &'a DataGraph, options: MiningOptions) -> Self {
        Self {
            target,
            options,
            progress_callback: None,
        }
    }

    /// Registers a callback invoked once per processed root seed with the
    /// fraction of seeds completed so far.
    pub fn set_progress_callback<F>(&mut self, callback: F)
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.progress_callback = Some(Box::new(callback));
    }

    /// Mines frequent subgraphs: structural extension only.
    pub fn mine_frequent_subgraphs(&self) -> Vec<Pattern> {
        self.mine(ExtensionRule::Structural)
    }

    /// Mines frequent patterns: structural extension plus transitive arcs
    /// between prior vertices.
    pub fn mine_frequent_patterns(&self) -> Vec<Pattern> {
        self.mine(ExtensionRule::Transitive)
    }

    /// Seeds one singleton pattern per target vertex and explores each
    /// seed's extension tree.  Duplicate labels produce duplicate seeds.
    ///
    /// Seeds are independent units of work: each branch owns its patterns
    /// by value and only reads the shared target, so the seed loop fans out
    /// on the rayon pool.  Per-seed results are merged in seed order, which
    /// keeps the output identical to a sequential walk.
    fn mine(&self, rule: ExtensionRule) -> Vec<Pattern> {
        let num_seeds = self.target.vertex_count();
        info!("mining {} seeds", num_seeds);
        let completed = AtomicUsize::new(0);
        let results: Vec<Pattern> = self
            .target
            .vertices()
            .par_iter()
            .map(|vertex| {
                let mut seed = Pattern::new();
                seed.add_vertex(0, &vertex.label);
                seed.build_adjacency_index();
                let mut found = vec![];
                self.explore(&seed, rule, &mut found);
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                self.report_progress(done as f64 / num_seeds as f64);
                found
            })
            .flatten()
            .collect();
        info!("found {} frequent patterns", results.len());
        results
    }

    /// One node of the search tree.  Pattern size strictly increases along
    /// any path, so the walk terminates within `max_pattern_size` levels.
    fn explore(&self, current: &Pattern, rule: ExtensionRule, results: &mut Vec<Pattern>) {
        if current.vertex_count() > self.options.max_pattern_size {
            return;
        }
        // anti-monotonic pruning: descendants of an infrequent pattern are
        // never explored
        if !self.is_frequent(current) {
            return;
        }
        results.push(current.clone());
        for mut extension in self.generate_extensions(current, rule) {
            if extension.is_valid() {
                extension.build_adjacency_index();
                self.explore(&extension, rule, results);
            }
        }
    }

    /// Exact mode keeps a pattern at `support >= min_support`; approximate
    /// mode shifts the threshold down by `approx_error`, trading precision
    /// for recall.
    fn is_frequent(&self, pattern: &Pattern) -> bool {
        let support = pattern.calculate_support(self.target);
        if self.options.approximate {
            support >= self.options.min_support * (1.0 - self.options.approx_error)
        } else {
            support >= self.options.min_support
        }
    }

    /// One child per target vertex: a copy of `current` plus a new vertex
    /// carrying that target vertex's label, connected to every existing
    /// vertex.  No canonical-form dedup is performed, so repeated labels in
    /// the target yield duplicate children.
    fn generate_extensions(&self, current: &Pattern, rule: ExtensionRule) -> Vec<Pattern> {
        let num_roles = current.vertex_count() as VId;
        self.target
            .vertices()
            .iter()
            .map(|vertex| {
                let mut extension = current.clone();
                extension.add_vertex(num_roles, &vertex.label);
                for role in 0..num_roles {
                    extension.add_edge(role, num_roles, "e");
                    if !self.options.directed {
                        extension.add_edge(num_roles, role, "e");
                    }
                    if let ExtensionRule::Transitive = rule {
                        for other in 0..num_roles {
                            if role != other {
                                extension.add_edge(role, other, "t");
                            }
                        }
                    }
                }
                extension
            })
            .collect()
    }

    fn report_progress(&self, progress: f64) {
        if let Some(callback) = &self.progress_callback {
            callback(progress);
        }
    }
}
