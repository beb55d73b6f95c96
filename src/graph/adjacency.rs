//! Core graph structure — vertices with ordered successor lists.

use std::collections::{HashMap, HashSet};

use crate::types::{GraphError, GraphResult, Vertex};

/// A directed, unweighted graph stored as an adjacency list.
///
/// Every vertex owns an ordered list of its successors. The order is the
/// order in which edges were added and it decides tie-breaks in both
/// [`shortest_path`](super::shortest_path) and
/// [`depth_first`](super::depth_first).
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V: Vertex> {
    /// Vertex -> successors in insertion order, without duplicates.
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: Vertex> AdjacencyGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Add a vertex with no successors. No-op if it is already present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Remove a vertex and every edge pointing to it.
    ///
    /// Returns `false` if the vertex was not in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            return false;
        }
        for successors in self.adjacency.values_mut() {
            successors.retain(|v| v != vertex);
        }
        true
    }

    /// Add the edge `from -> to`, creating either endpoint if needed.
    ///
    /// Adding an edge that already exists leaves the graph unchanged.
    pub fn add_edge(&mut self, from: V, to: V) {
        if !self.adjacency.contains_key(&to) {
            self.adjacency.insert(to.clone(), Vec::new());
        }
        let successors = self.adjacency.entry(from).or_default();
        if !successors.contains(&to) {
            successors.push(to);
        }
    }

    /// Remove the edge `from -> to` if it exists.
    ///
    /// Returns `false` if there was no such edge. Never fails, even if
    /// either endpoint is missing.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.adjacency.get_mut(from) {
            Some(successors) => match successors.iter().position(|v| v == to) {
                Some(pos) => {
                    successors.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// All vertices as a set. Order carries no meaning.
    pub fn vertices(&self) -> HashSet<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Iterate over all vertices without cloning them.
    pub fn iter_vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Number of vertices.
    pub fn vertices_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges: the sum of all successor list lengths.
    pub fn edges_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Every edge as `(from, to)`, each source's successors in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.adjacency
            .iter()
            .flat_map(|(from, successors)| successors.iter().map(move |to| (from, to)))
    }

    /// Successors of `vertex` in insertion order.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<&[V]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Number of successors of `vertex`.
    pub fn out_degree(&self, vertex: &V) -> GraphResult<usize> {
        self.neighbors(vertex).map(<[V]>::len)
    }

    /// Whether the edge `from -> to` exists.
    ///
    /// Both endpoints must be vertices of the graph.
    pub fn has_edge(&self, from: &V, to: &V) -> GraphResult<bool> {
        if !self.contains(to) {
            return Err(GraphError::vertex_not_found(to));
        }
        Ok(self.neighbors(from)?.contains(to))
    }

    /// Whether `vertex` is in the graph.
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Remove all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> PartialEq for AdjacencyGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<V: Vertex> Eq for AdjacencyGraph<V> {}

impl<V: Vertex> Extend<(V, V)> for AdjacencyGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}

impl<V: Vertex> FromIterator<(V, V)> for AdjacencyGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
