//! In-memory graph operations — the core data structure and its traversals.

pub mod adjacency;
pub mod builder;
pub mod traversal;

pub use adjacency::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use traversal::{depth_first, shortest_path, Path, Traversal};
