//! Fluent API for building AdjListsGraph instances.

use crate::types::Vertex;

use super::AdjListsGraph;

enum Step<T> {
    Vertex(T),
    Arc(T, T),
    Edge(T, T),
}

/// Fluent builder for constructing an [`AdjListsGraph`].
///
/// Steps are replayed in call order on `build`, so an arc naming a vertex
/// that is only added later is dropped, the same as calling the graph's
/// mutators directly.
pub struct GraphBuilder<T> {
    steps: Vec<Step<T>>,
}

impl<T: Vertex> GraphBuilder<T> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, vertex: T) -> &mut Self {
        self.steps.push(Step::Vertex(vertex));
        self
    }

    /// Add several vertices in order.
    pub fn vertices<I: IntoIterator<Item = T>>(&mut self, vertices: I) -> &mut Self {
        self.steps.extend(vertices.into_iter().map(Step::Vertex));
        self
    }

    /// Add an arc `from -> to`.
    pub fn arc(&mut self, from: T, to: T) -> &mut Self {
        self.steps.push(Step::Arc(from, to));
        self
    }

    /// Add an edge between `a` and `b`.
    pub fn edge(&mut self, a: T, b: T) -> &mut Self {
        self.steps.push(Step::Edge(a, b));
        self
    }

    /// Add an edge for every pair.
    pub fn edges<I: IntoIterator<Item = (T, T)>>(&mut self, pairs: I) -> &mut Self {
        self.steps.extend(pairs.into_iter().map(|(a, b)| Step::Edge(a, b)));
        self
    }

    /// Build the final graph.
    pub fn build(self) -> AdjListsGraph<T> {
        let mut graph = AdjListsGraph::new();
        for step in self.steps {
            match step {
                Step::Vertex(v) => {
                    graph.add_vertex(v);
                }
                Step::Arc(from, to) => {
                    graph.add_arc(&from, &to);
                }
                Step::Edge(a, b) => {
                    graph.add_edge(&a, &b);
                }
            }
        }
        graph
    }
}

impl<T: Vertex> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
