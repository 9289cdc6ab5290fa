//! Shared data types for the storygraph library.

pub mod account;
pub mod error;

pub use account::{Account, IngestConfig};
pub use error::{GraphError, GraphResult};

use std::fmt::Debug;
use std::hash::Hash;

/// Default field delimiter for account files.
pub const DEFAULT_FIELD_DELIMITER: char = '\t';

/// Default separator between story IDs inside the stories field.
pub const DEFAULT_STORY_SEPARATOR: char = ',';

/// Number of fields in an account row.
pub const ACCOUNT_FIELD_COUNT: usize = 5;

/// Line separating the vertex table from the arc table in TGF output.
pub const TGF_SEPARATOR: &str = "#";

/// Any value usable as a graph vertex.
///
/// Vertices are compared by equality and indexed by hash. `Debug` is needed
/// so a missing vertex can be named in [`GraphError::VertexNotFound`].
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}
