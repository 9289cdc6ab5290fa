//! Graph traversal algorithms (DFS, target-seeking DFS, BFS).
//!
//! All visited-state is local to a single call. Neighbors are explored in
//! successor-list order, so results are fully determined by the graph's
//! mutation history.

use std::collections::VecDeque;

use crate::types::{GraphResult, Vertex};

use super::AdjListsGraph;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Depth-first, preorder discovery.
    DepthFirst,
    /// Breadth-first, level order.
    BreadthFirst,
}

impl TraversalOrder {
    /// Parse a traversal order from a short name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth" | "depth_first" => Some(Self::DepthFirst),
            "bfs" | "breadth" | "breadth_first" => Some(Self::BreadthFirst),
            _ => None,
        }
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }
}

/// Depth-first discovery order from `start`, start first.
pub fn dfs<T: Vertex>(graph: &AdjListsGraph<T>, start: &T) -> GraphResult<Vec<T>> {
    let start = graph.require(start)?;
    let (order, _) = dfs_positions(graph, start, None);
    Ok(to_vertices(graph, &order))
}

/// Depth-first discovery order from `start`, stopping once `target` is found.
///
/// Returns an empty sequence when `target` is not reachable. When
/// `start == target` the result is `[start]`.
pub fn dfs_to<T: Vertex>(graph: &AdjListsGraph<T>, start: &T, target: &T) -> GraphResult<Vec<T>> {
    let start = graph.require(start)?;
    let target = graph.require(target)?;
    let (order, found) = dfs_positions(graph, start, Some(target));
    if found {
        Ok(to_vertices(graph, &order))
    } else {
        Ok(Vec::new())
    }
}

/// Breadth-first discovery order from `start`, start first.
pub fn bfs<T: Vertex>(graph: &AdjListsGraph<T>, start: &T) -> GraphResult<Vec<T>> {
    let start = graph.require(start)?;
    let order = bfs_positions(graph, start);
    Ok(to_vertices(graph, &order))
}

/// Run the traversal selected by `order`.
pub fn traverse<T: Vertex>(
    graph: &AdjListsGraph<T>,
    start: &T,
    order: TraversalOrder,
) -> GraphResult<Vec<T>> {
    match order {
        TraversalOrder::DepthFirst => dfs(graph, start),
        TraversalOrder::BreadthFirst => bfs(graph, start),
    }
}

/// Explicit-stack DFS over vertex positions.
///
/// The stack top advances to its first unvisited successor, or is popped when
/// none remain. `cursor` remembers how far each successor list has been
/// scanned; since marks are never cleared, resuming there finds the same
/// successor a rescan from the front would.
pub(crate) fn dfs_positions<T: Vertex>(
    graph: &AdjListsGraph<T>,
    start: usize,
    target: Option<usize>,
) -> (Vec<usize>, bool) {
    let n = graph.vertex_count();
    let mut marked = vec![false; n];
    let mut cursor = vec![0usize; n];
    let mut order = vec![start];
    let mut stack = vec![start];
    marked[start] = true;

    if target == Some(start) {
        return (order, true);
    }

    while let Some(&top) = stack.last() {
        let successors = graph.successor_positions(top);
        let mut next = None;
        while cursor[top] < successors.len() {
            let candidate = successors[cursor[top]];
            cursor[top] += 1;
            if !marked[candidate] {
                next = Some(candidate);
                break;
            }
        }

        match next {
            Some(v) => {
                marked[v] = true;
                order.push(v);
                if target == Some(v) {
                    return (order, true);
                }
                stack.push(v);
            }
            None => {
                stack.pop();
            }
        }
    }

    (order, false)
}

/// Queue-based BFS over vertex positions; marks on enqueue.
pub(crate) fn bfs_positions<T: Vertex>(graph: &AdjListsGraph<T>, start: usize) -> Vec<usize> {
    let mut marked = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    marked[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &next in graph.successor_positions(current) {
            if !marked[next] {
                marked[next] = true;
                queue.push_back(next);
            }
        }
    }

    order
}

fn to_vertices<T: Vertex>(graph: &AdjListsGraph<T>, positions: &[usize]) -> Vec<T> {
    positions
        .iter()
        .map(|&p| graph.vertex_at(p).clone())
        .collect()
}
