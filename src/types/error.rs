//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A query or traversal referenced a vertex that is not in the graph.
    #[error("Vertex {0} not found in the graph")]
    VertexNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A vertex label that cannot be written as a single edge-list token.
    #[error("Vertex label {label:?} cannot be written: {reason}")]
    InvalidLabel { label: String, reason: &'static str },

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Build a `VertexNotFound` naming the given vertex.
    pub fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        GraphError::VertexNotFound(format!("{:?}", vertex))
    }
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
