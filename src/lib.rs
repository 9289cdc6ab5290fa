//! storygraph: adjacency-list directed graphs and traversal analytics.
//!
//! The core is a generic multigraph ([`AdjListsGraph`]) with DFS, BFS and
//! whole-graph analytics. Around it sit an account/story collection that
//! builds such a graph from delimited files, and a TGF exporter.

pub mod cli;
pub mod collection;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use collection::{AccountCollection, CollectionStats};
pub use engine::{AnalyticsEngine, ComponentSummary};
pub use format::{AccountReader, TgfWriter};
pub use graph::{bfs, dfs, dfs_to, traverse, AdjListsGraph, GraphBuilder, TraversalOrder};
pub use types::{Account, GraphError, GraphResult, IngestConfig, Vertex};
