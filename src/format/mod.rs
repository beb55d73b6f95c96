//! Text formats for reading and writing graphs.

pub mod dot;
pub mod edge_list;
pub mod json;

pub use dot::DotWriter;
pub use edge_list::{EdgeListReader, EdgeListWriter};
pub use json::GraphSnapshot;
