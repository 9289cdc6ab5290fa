//! Error types for the storygraph library.

use thiserror::Error;

/// All errors that can occur in the storygraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A query or traversal referenced a vertex absent from the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// An input row could not be split into the expected fields.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A count field did not parse as a non-negative integer.
    #[error("Invalid count on line {line}: {value:?}")]
    InvalidCount { line: usize, value: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Build a `VertexNotFound` from any debuggable vertex value.
    pub fn vertex_not_found<T: std::fmt::Debug + ?Sized>(vertex: &T) -> Self {
        Self::VertexNotFound(format!("{:?}", vertex))
    }
}

/// Convenience result type for storygraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
