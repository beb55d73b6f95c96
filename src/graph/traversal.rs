//! Graph traversal algorithms (BFS shortest path, DFS preorder).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, Vertex};

use super::AdjacencyGraph;

/// An ordered walk through the graph, first vertex to last.
pub type Path<V> = Vec<V>;

/// Shortest path from `from` to `to`, counted in edges.
///
/// Returns `Ok(None)` when `to` is not reachable from `from`. Among several
/// shortest paths the one whose vertices were discovered first wins, which
/// follows the insertion order of successor lists.
pub fn shortest_path<V: Vertex>(
    graph: &AdjacencyGraph<V>,
    from: &V,
    to: &V,
) -> GraphResult<Option<Path<V>>> {
    if !graph.contains(from) {
        return Err(GraphError::vertex_not_found(from));
    }
    if !graph.contains(to) {
        return Err(GraphError::vertex_not_found(to));
    }

    if from == to {
        return Ok(Some(vec![from.clone()]));
    }

    let mut visited: HashSet<&V> = HashSet::new();
    let mut discovered_by: HashMap<&V, &V> = HashMap::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    visited.insert(from);
    queue.push_back(from);

    let mut reached = false;
    while let Some(current) = queue.pop_front() {
        if current == to {
            reached = true;
            break;
        }
        log::trace!("bfs: expanding {:?}", current);

        for neighbor in graph.neighbors(current)? {
            if visited.insert(neighbor) {
                discovered_by.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    if !reached {
        log::debug!(
            "bfs: no path from {:?} to {:?} ({} vertices visited)",
            from,
            to,
            visited.len()
        );
        return Ok(None);
    }

    let mut path = vec![to.clone()];
    let mut current = to;
    while let Some(&parent) = discovered_by.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();

    log::debug!(
        "bfs: path from {:?} to {:?} has {} edges ({} vertices visited)",
        from,
        to,
        path.len() - 1,
        visited.len()
    );
    Ok(Some(path))
}

/// All vertices reachable from `start`, in depth-first preorder.
///
/// Produces the same order as a recursive walk that descends into
/// successors in insertion order, but keeps its frames on the heap so deep
/// graphs cannot overflow the call stack.
pub fn depth_first<V: Vertex>(graph: &AdjacencyGraph<V>, start: &V) -> GraphResult<Vec<V>> {
    let start_successors = graph.neighbors(start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    // (successors of the vertex, index of the next successor to look at)
    let mut stack: Vec<(&[V], usize)> = Vec::new();

    visited.insert(start);
    order.push(start.clone());
    stack.push((start_successors, 0));

    while let Some(frame) = stack.last_mut() {
        let (successors, next) = *frame;
        if next == successors.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let vertex = &successors[next];
        if visited.insert(vertex) {
            log::trace!("dfs: entering {:?}", vertex);
            order.push(vertex.clone());
            stack.push((graph.neighbors(vertex)?, 0));
        }
    }

    log::debug!("dfs: {} vertices reachable from {:?}", order.len(), start);
    Ok(order)
}

/// Traversals as methods on the graph.
pub trait Traversal<V: Vertex> {
    /// See [`shortest_path`].
    fn shortest_path(&self, from: &V, to: &V) -> GraphResult<Option<Path<V>>>;

    /// See [`depth_first`].
    fn depth_first(&self, start: &V) -> GraphResult<Vec<V>>;
}

impl<V: Vertex> Traversal<V> for AdjacencyGraph<V> {
    fn shortest_path(&self, from: &V, to: &V) -> GraphResult<Option<Path<V>>> {
        shortest_path(self, from, to)
    }

    fn depth_first(&self, start: &V) -> GraphResult<Vec<V>> {
        depth_first(self, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_path_prefers_first_inserted_successor() {
        let graph: AdjacencyGraph<char> = [('s', 'a'), ('s', 'b'), ('a', 't'), ('b', 't')]
            .into_iter()
            .collect();
        assert_eq!(
            shortest_path(&graph, &'s', &'t').unwrap(),
            Some(vec!['s', 'a', 't'])
        );
    }

    #[test]
    fn depth_first_handles_cycles() {
        let graph: AdjacencyGraph<u8> = [(0, 1), (1, 2), (2, 0), (2, 3)].into_iter().collect();
        assert_eq!(depth_first(&graph, &1).unwrap(), vec![1, 2, 0, 3]);
    }
}
