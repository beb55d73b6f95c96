//! adjgraph — adjacency-list directed graphs with BFS and DFS.
//!
//! Vertices are plain values (anything `Eq + Hash + Clone + Debug`) and each
//! vertex keeps its successors in insertion order. Traversals borrow the
//! graph read-only and return owned results.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{DotWriter, EdgeListReader, EdgeListWriter, GraphSnapshot};
pub use graph::{depth_first, shortest_path, AdjacencyGraph, GraphBuilder, Traversal};
pub use types::{GraphError, GraphResult, Vertex};
