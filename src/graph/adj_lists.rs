//! Core graph structure: vertices plus one ordered successor list per vertex.

use std::collections::HashMap;
use std::fmt;

use crate::types::{GraphError, GraphResult, Vertex};

/// A directed multigraph stored as adjacency lists.
///
/// Vertex order is insertion order. Each successor list is an ordered
/// sequence of vertex positions and may hold the same target more than once.
#[derive(Debug, Clone)]
pub struct AdjListsGraph<T> {
    /// All vertices, in insertion order.
    vertices: Vec<T>,
    /// Successor positions, parallel to `vertices`.
    arcs: Vec<Vec<usize>>,
    /// Vertex value -> position in `vertices`.
    positions: HashMap<T, usize>,
}

impl<T: Vertex> AdjListsGraph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            arcs: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            arcs: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    // ==================== Queries ====================

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of arcs, counting duplicates.
    pub fn arc_count(&self) -> usize {
        self.arcs.iter().map(Vec::len).sum()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True if `vertex` is in the graph.
    pub fn contains(&self, vertex: &T) -> bool {
        self.positions.contains_key(vertex)
    }

    /// Successors of `vertex`, in adjacency order. The list is a copy.
    pub fn successors(&self, vertex: &T) -> GraphResult<Vec<T>> {
        let pos = self.require(vertex)?;
        Ok(self.arcs[pos]
            .iter()
            .map(|&j| self.vertices[j].clone())
            .collect())
    }

    /// Length of the successor list of `vertex`.
    pub fn out_degree(&self, vertex: &T) -> GraphResult<usize> {
        let pos = self.require(vertex)?;
        Ok(self.arcs[pos].len())
    }

    /// Every vertex with at least one arc into `vertex`, in vertex order.
    pub fn predecessors(&self, vertex: &T) -> GraphResult<Vec<T>> {
        let target = self.require(vertex)?;
        Ok(self
            .arcs
            .iter()
            .enumerate()
            .filter(|(_, list)| list.contains(&target))
            .map(|(i, _)| self.vertices[i].clone())
            .collect())
    }

    /// True if `to` is among the successors of `from`.
    pub fn is_arc(&self, from: &T, to: &T) -> GraphResult<bool> {
        let i = self.require(from)?;
        let j = self.require(to)?;
        Ok(self.arcs[i].contains(&j))
    }

    /// True if arcs exist in both directions between `a` and `b`.
    pub fn is_edge(&self, a: &T, b: &T) -> GraphResult<bool> {
        Ok(self.is_arc(a, b)? && self.is_arc(b, a)?)
    }

    /// True if every stored arc has its reverse arc.
    pub fn is_undirected(&self) -> bool {
        self.arcs
            .iter()
            .enumerate()
            .all(|(i, list)| list.iter().all(|&j| self.arcs[j].contains(&i)))
    }

    /// All arcs as `(from, to)` pairs, in storage order.
    pub fn arcs(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.arcs.iter().enumerate().flat_map(move |(i, list)| {
            list.iter()
                .map(move |&j| (&self.vertices[i], &self.vertices[j]))
        })
    }

    // ==================== Mutation ====================

    /// Add a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.positions.contains_key(&vertex) {
            return false;
        }
        self.positions.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.arcs.push(Vec::new());
        true
    }

    /// Remove a vertex and every arc touching it. Returns false if absent.
    pub fn remove_vertex(&mut self, vertex: &T) -> bool {
        let Some(pos) = self.positions.remove(vertex) else {
            return false;
        };

        self.vertices.remove(pos);
        self.arcs.remove(pos);

        // Drop every arc into the removed vertex and shift later positions down.
        for list in &mut self.arcs {
            list.retain(|&j| j != pos);
            for j in list.iter_mut() {
                if *j > pos {
                    *j -= 1;
                }
            }
        }

        for (i, v) in self.vertices.iter().enumerate().skip(pos) {
            if let Some(p) = self.positions.get_mut(v) {
                *p = i;
            }
        }

        true
    }

    /// Append `to` to the successors of `from`. No-op unless both exist.
    pub fn add_arc(&mut self, from: &T, to: &T) -> bool {
        match (self.position(from), self.position(to)) {
            (Some(i), Some(j)) => {
                self.arcs[i].push(j);
                true
            }
            _ => false,
        }
    }

    /// Remove the first `from -> to` arc. No-op unless both exist.
    pub fn remove_arc(&mut self, from: &T, to: &T) -> bool {
        match (self.position(from), self.position(to)) {
            (Some(i), Some(j)) => Self::remove_first(&mut self.arcs[i], j),
            _ => false,
        }
    }

    /// Add arcs `a -> b` and `b -> a`.
    ///
    /// `b` is appended to the end of `a`'s successors, while `a` goes to the
    /// front of `b`'s successors. Traversal order depends on this.
    pub fn add_edge(&mut self, a: &T, b: &T) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) => {
                self.arcs[i].push(j);
                self.arcs[j].insert(0, i);
                true
            }
            _ => false,
        }
    }

    /// Remove the first `a -> b` arc and the first `b -> a` arc.
    pub fn remove_edge(&mut self, a: &T, b: &T) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) => {
                let forward = Self::remove_first(&mut self.arcs[i], j);
                let backward = Self::remove_first(&mut self.arcs[j], i);
                forward || backward
            }
            _ => false,
        }
    }

    // ==================== Position access for traversal ====================

    pub(crate) fn position(&self, vertex: &T) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    pub(crate) fn require(&self, vertex: &T) -> GraphResult<usize> {
        self.position(vertex).ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    pub(crate) fn successor_positions(&self, pos: usize) -> &[usize] {
        &self.arcs[pos]
    }

    pub(crate) fn vertex_at(&self, pos: usize) -> &T {
        &self.vertices[pos]
    }

    fn remove_first(list: &mut Vec<usize>, target: usize) -> bool {
        match list.iter().position(|&j| j == target) {
            Some(k) => {
                list.remove(k);
                true
            }
            None => false,
        }
    }
}

impl<T: Vertex> Default for AdjListsGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Vertex + fmt::Display> fmt::Display for AdjListsGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "***Vertices***")?;
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "***Edges***")?;
        for (i, list) in self.arcs.iter().enumerate() {
            write!(f, "from {}: [", self.vertices[i])?;
            for (k, &j) in list.iter().enumerate() {
                if k > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.vertices[j])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
