//! In-memory graph operations: the core data structure.

pub mod adj_lists;
pub mod builder;
pub mod traversal;

pub use adj_lists::AdjListsGraph;
pub use builder::GraphBuilder;
pub use traversal::{bfs, dfs, dfs_to, traverse, TraversalOrder};
