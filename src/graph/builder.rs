//! Fluent API for building AdjacencyGraph instances.

use crate::types::Vertex;

use super::AdjacencyGraph;

/// Fluent builder for constructing an [`AdjacencyGraph`].
///
/// Every call goes through the graph's own mutation operations, so the
/// built graph upholds the same invariants as one assembled by hand.
pub struct GraphBuilder<V: Vertex> {
    graph: AdjacencyGraph<V>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Create a new builder for an empty graph.
    pub fn new() -> Self {
        Self {
            graph: AdjacencyGraph::new(),
        }
    }

    /// Add an isolated vertex.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.graph.add_vertex(vertex);
        self
    }

    /// Add an edge.
    pub fn edge(&mut self, from: V, to: V) -> &mut Self {
        self.graph.add_edge(from, to);
        self
    }

    /// Add several edges in order.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        self.graph.extend(edges);
        self
    }

    /// Add an edge between every pair of consecutive vertices.
    pub fn path<I>(&mut self, vertices: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut vertices = vertices.into_iter();
        if let Some(mut previous) = vertices.next() {
            self.graph.add_vertex(previous.clone());
            for vertex in vertices {
                self.graph.add_edge(previous, vertex.clone());
                previous = vertex;
            }
        }
        self
    }

    /// Build the final graph, leaving the builder empty.
    pub fn build(&mut self) -> AdjacencyGraph<V> {
        std::mem::take(&mut self.graph)
    }
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
