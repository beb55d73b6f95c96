//! JSON snapshots of a graph.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::AdjacencyGraph;
use crate::types::{GraphResult, Vertex};

/// A serializable copy of a graph's vertices and edges.
///
/// `edges` lists each source's successors in insertion order, so rebuilding
/// the graph with [`into_graph`](Self::into_graph) preserves traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<V> {
    /// Every vertex of the graph.
    pub vertices: Vec<V>,
    /// Every edge as `(from, to)`.
    pub edges: Vec<(V, V)>,
}

impl<V: Vertex> GraphSnapshot<V> {
    /// Take a snapshot of `graph`.
    pub fn from_graph(graph: &AdjacencyGraph<V>) -> Self {
        Self {
            vertices: graph.iter_vertices().cloned().collect(),
            edges: graph
                .edges()
                .map(|(from, to)| (from.clone(), to.clone()))
                .collect(),
        }
    }

    /// Rebuild a graph from the snapshot.
    pub fn into_graph(self) -> AdjacencyGraph<V> {
        let mut graph = AdjacencyGraph::with_capacity(self.vertices.len());
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        graph.extend(self.edges);
        graph
    }
}

impl<V: Vertex + Serialize> GraphSnapshot<V> {
    /// Encode as JSON.
    pub fn to_json(&self, pretty: bool) -> GraphResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write as JSON to a file, replacing its contents.
    pub fn write_to_file(&self, path: &Path, pretty: bool) -> GraphResult<()> {
        std::fs::write(path, self.to_json(pretty)?)?;
        Ok(())
    }
}

impl<V: Vertex + for<'de> Deserialize<'de>> GraphSnapshot<V> {
    /// Decode from JSON.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read JSON from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
