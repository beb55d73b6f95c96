//! Phase 2 tests: BFS shortest path and DFS traversal.

use std::collections::{HashMap, HashSet};

use adjgraph::graph::{depth_first, shortest_path, AdjacencyGraph, GraphBuilder, Traversal};
use adjgraph::types::GraphError;

use rand::Rng;

// ==================== Helper ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The reference graph: 1→2, 1→3, 2→4, 2→5, 3→6, 3→7, 4→8, 6→5, 5→8, 9→7.
fn scenario_graph() -> AdjacencyGraph<i32> {
    GraphBuilder::new()
        .edges([
            (1, 2),
            (1, 3),
            (2, 4),
            (2, 5),
            (3, 6),
            (3, 7),
            (4, 8),
            (6, 5),
            (5, 8),
            (9, 7),
        ])
        .build()
}

/// Distance from `from` to every reachable vertex by layering the whole graph.
fn layer_distances(graph: &AdjacencyGraph<u32>, from: u32) -> HashMap<u32, usize> {
    let mut distances = HashMap::new();
    distances.insert(from, 0);
    let mut layer = vec![from];
    let mut depth = 0;
    while !layer.is_empty() {
        depth += 1;
        let mut next = Vec::new();
        for v in &layer {
            for &n in graph.neighbors(v).unwrap() {
                if !distances.contains_key(&n) {
                    distances.insert(n, depth);
                    next.push(n);
                }
            }
        }
        layer = next;
    }
    distances
}

/// Recursive preorder walk, used as the oracle for the iterative DFS.
fn recursive_preorder(
    graph: &AdjacencyGraph<u32>,
    v: u32,
    seen: &mut HashSet<u32>,
    out: &mut Vec<u32>,
) {
    seen.insert(v);
    out.push(v);
    for &n in graph.neighbors(&v).unwrap() {
        if !seen.contains(&n) {
            recursive_preorder(graph, n, seen, out);
        }
    }
}

fn random_graph(vertex_count: u32, edge_count: usize) -> AdjacencyGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = AdjacencyGraph::new();
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for _ in 0..edge_count {
        graph.add_edge(rng.gen_range(0..vertex_count), rng.gen_range(0..vertex_count));
    }
    graph
}

fn assert_is_walk(graph: &AdjacencyGraph<u32>, path: &[u32]) {
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1]).unwrap(),
            "{:?} is not a walk",
            path
        );
    }
}

// ==================== BFS Scenario ====================

#[test]
fn test_bfs_path_1_to_8() {
    init_logger();
    let graph = scenario_graph();
    assert_eq!(
        shortest_path(&graph, &1, &8).unwrap(),
        Some(vec![1, 2, 4, 8])
    );
}

#[test]
fn test_bfs_path_3_to_8() {
    let graph = scenario_graph();
    assert_eq!(
        shortest_path(&graph, &3, &8).unwrap(),
        Some(vec![3, 6, 5, 8])
    );
}

#[test]
fn test_bfs_unreachable_1_to_9() {
    let graph = scenario_graph();
    assert_eq!(shortest_path(&graph, &1, &9).unwrap(), None);
}

#[test]
fn test_bfs_direct_edge() {
    let graph = scenario_graph();
    assert_eq!(shortest_path(&graph, &9, &7).unwrap(), Some(vec![9, 7]));
    assert_eq!(shortest_path(&graph, &7, &9).unwrap(), None);
}

#[test]
fn test_bfs_same_vertex() {
    let graph = scenario_graph();
    assert_eq!(shortest_path(&graph, &5, &5).unwrap(), Some(vec![5]));

    let looped = GraphBuilder::new().edges([(1, 1), (1, 2)]).build();
    assert_eq!(shortest_path(&looped, &1, &1).unwrap(), Some(vec![1]));

    let mut isolated = AdjacencyGraph::new();
    isolated.add_vertex("only");
    assert_eq!(
        shortest_path(&isolated, &"only", &"only").unwrap(),
        Some(vec!["only"])
    );
}

#[test]
fn test_bfs_missing_vertices() {
    let graph = scenario_graph();
    assert!(matches!(
        shortest_path(&graph, &100, &1),
        Err(GraphError::VertexNotFound(_))
    ));
    assert!(matches!(
        shortest_path(&graph, &1, &100),
        Err(GraphError::VertexNotFound(_))
    ));
    assert!(matches!(
        shortest_path(&graph, &100, &100),
        Err(GraphError::VertexNotFound(_))
    ));
}

#[test]
fn test_bfs_tie_break_follows_insertion_order() {
    // Two equally short routes; the first inserted successor wins.
    let forward = GraphBuilder::new()
        .edges([("s", "a"), ("s", "b"), ("a", "t"), ("b", "t")])
        .build();
    assert_eq!(
        shortest_path(&forward, &"s", &"t").unwrap(),
        Some(vec!["s", "a", "t"])
    );

    let reversed = GraphBuilder::new()
        .edges([("s", "b"), ("s", "a"), ("a", "t"), ("b", "t")])
        .build();
    assert_eq!(
        shortest_path(&reversed, &"s", &"t").unwrap(),
        Some(vec!["s", "b", "t"])
    );
}

#[test]
fn test_bfs_late_discoverer_does_not_corrupt_path() {
    // 3 is a successor of both 1 and 2; 1 is dequeued first and keeps it.
    let graph = GraphBuilder::new()
        .edges([(0, 1), (0, 2), (2, 3), (1, 3), (3, 4), (2, 4)])
        .build();
    assert_eq!(shortest_path(&graph, &0, &3).unwrap(), Some(vec![0, 1, 3]));
    assert_eq!(shortest_path(&graph, &0, &4).unwrap(), Some(vec![0, 2, 4]));
}

#[test]
fn test_bfs_with_cycles() {
    let graph = GraphBuilder::new().path([1, 2, 3, 4, 1]).build();
    assert_eq!(
        shortest_path(&graph, &3, &2).unwrap(),
        Some(vec![3, 4, 1, 2])
    );
}

#[test]
fn test_bfs_does_not_mutate_graph() {
    let graph = scenario_graph();
    let before = graph.clone();
    let _ = shortest_path(&graph, &1, &8).unwrap();
    let _ = depth_first(&graph, &1).unwrap();
    assert_eq!(graph, before);
}

// ==================== BFS Properties ====================

#[test]
fn test_bfs_lengths_match_layering_random() {
    init_logger();
    for _ in 0..25 {
        let graph = random_graph(25, 50);
        for from in 0..25 {
            let distances = layer_distances(&graph, from);
            for to in 0..25 {
                let found = shortest_path(&graph, &from, &to).unwrap();
                match distances.get(&to) {
                    Some(&d) => {
                        let path = found.expect("reachable vertex must have a path");
                        assert_eq!(path.len() - 1, d);
                        assert_eq!(path.first(), Some(&from));
                        assert_eq!(path.last(), Some(&to));
                        assert_is_walk(&graph, &path);
                    }
                    None => assert!(found.is_none()),
                }
            }
        }
    }
}

// ==================== DFS Scenario ====================

#[test]
fn test_dfs_from_1() {
    let graph = scenario_graph();
    assert_eq!(
        depth_first(&graph, &1).unwrap(),
        vec![1, 2, 4, 8, 5, 3, 6, 7]
    );
}

#[test]
fn test_dfs_from_9() {
    let graph = scenario_graph();
    assert_eq!(depth_first(&graph, &9).unwrap(), vec![9, 7]);
}

#[test]
fn test_dfs_sink_vertex() {
    let graph = scenario_graph();
    assert_eq!(depth_first(&graph, &8).unwrap(), vec![8]);
}

#[test]
fn test_dfs_missing_start() {
    let graph = scenario_graph();
    assert!(matches!(
        depth_first(&graph, &0),
        Err(GraphError::VertexNotFound(_))
    ));

    let empty: AdjacencyGraph<i32> = AdjacencyGraph::new();
    assert!(depth_first(&empty, &0).is_err());
}

#[test]
fn test_dfs_deep_chain_does_not_overflow() {
    let graph = GraphBuilder::new().path(0..200_000u32).build();
    let order = depth_first(&graph, &0).unwrap();
    assert_eq!(order.len(), 200_000);
    assert_eq!(order.last(), Some(&199_999));

    let path = shortest_path(&graph, &0, &199_999).unwrap().unwrap();
    assert_eq!(path.len(), 200_000);
}

// ==================== DFS Properties ====================

#[test]
fn test_dfs_matches_recursive_preorder_random() {
    for _ in 0..50 {
        let graph = random_graph(40, 80);
        for start in 0..40 {
            let order = depth_first(&graph, &start).unwrap();

            let mut seen = HashSet::new();
            let mut expected = Vec::new();
            recursive_preorder(&graph, start, &mut seen, &mut expected);
            assert_eq!(order, expected);

            let unique: HashSet<_> = order.iter().collect();
            assert_eq!(unique.len(), order.len(), "DFS revisited a vertex");
            assert_eq!(
                unique.len(),
                layer_distances(&graph, start).len(),
                "DFS must visit exactly the reachable vertices"
            );
        }
    }
}

// ==================== Trait Methods ====================

#[test]
fn test_traversal_trait_methods() {
    let graph = scenario_graph();
    assert_eq!(graph.shortest_path(&1, &8).unwrap(), Some(vec![1, 2, 4, 8]));
    assert_eq!(graph.depth_first(&9).unwrap(), vec![9, 7]);
}
