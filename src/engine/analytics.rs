//! Aggregate analytics built by repeating traversals from every vertex.

use serde::Serialize;

use crate::graph::traversal::{bfs_positions, dfs_positions};
use crate::graph::AdjListsGraph;
use crate::types::Vertex;

/// Component sizes for a whole graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    /// Largest reachable set over all start vertices.
    pub largest: usize,
    /// Smallest reachable set over all start vertices.
    pub shortest: usize,
    /// True when some vertex reaches every vertex.
    pub connected: bool,
}

/// Stateless engine for whole-graph analytics.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Create a new analytics engine.
    pub fn new() -> Self {
        Self
    }

    /// Maximum DFS reachable-set size over every start vertex. 0 for an empty graph.
    pub fn largest_component_size<T: Vertex>(&self, graph: &AdjListsGraph<T>) -> usize {
        (0..graph.vertex_count())
            .map(|v| dfs_positions(graph, v, None).0.len())
            .max()
            .unwrap_or(0)
    }

    /// Minimum BFS reachable-set size over every start vertex. 0 for an empty graph.
    ///
    /// A vertex with no successors reaches only itself, so any such vertex
    /// makes this 1.
    pub fn shortest_component_size<T: Vertex>(&self, graph: &AdjListsGraph<T>) -> usize {
        (0..graph.vertex_count())
            .map(|v| bfs_positions(graph, v).len())
            .min()
            .unwrap_or(0)
    }

    /// True if the largest reachable set covers every vertex.
    pub fn is_connected<T: Vertex>(&self, graph: &AdjListsGraph<T>) -> bool {
        self.largest_component_size(graph) == graph.vertex_count()
    }

    /// Largest and shortest component sizes plus connectedness.
    pub fn components<T: Vertex>(&self, graph: &AdjListsGraph<T>) -> ComponentSummary {
        let largest = self.largest_component_size(graph);
        ComponentSummary {
            largest,
            shortest: self.shortest_component_size(graph),
            connected: largest == graph.vertex_count(),
        }
    }

    /// The vertex whose target-seeking DFS runs to every other vertex
    /// discover the fewest vertices in total.
    ///
    /// Unreachable targets contribute 0. Ties go to the earliest vertex.
    /// Returns `None` for an empty graph.
    pub fn most_central<T: Vertex>(&self, graph: &AdjListsGraph<T>) -> Option<T> {
        let n = graph.vertex_count();
        let mut best: Option<(usize, usize)> = None;

        for candidate in 0..n {
            let total: usize = (0..n)
                .filter(|&other| other != candidate)
                .map(|other| {
                    let (order, found) = dfs_positions(graph, candidate, Some(other));
                    if found {
                        order.len()
                    } else {
                        0
                    }
                })
                .sum();

            log::debug!("centrality sum for vertex #{}: {}", candidate, total);

            if best.map_or(true, |(_, least)| total < least) {
                best = Some((candidate, total));
            }
        }

        best.map(|(pos, _)| graph.vertex_at(pos).clone())
    }
}
