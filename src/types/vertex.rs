//! The bound every vertex identity must satisfy.

use std::fmt::Debug;
use std::hash::Hash;

/// An opaque vertex identity.
///
/// Vertices are stored by value and compared by equality and hash. `Debug`
/// is only used to name a vertex in [`GraphError::VertexNotFound`].
///
/// [`GraphError::VertexNotFound`]: super::GraphError::VertexNotFound
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}
