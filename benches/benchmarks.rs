//! Criterion benchmarks for adjgraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use adjgraph::graph::{depth_first, shortest_path, AdjacencyGraph};

/// Build a random graph with `edges_per_vertex` successors per vertex.
fn make_random_graph(vertex_count: u32, edges_per_vertex: usize) -> AdjacencyGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = AdjacencyGraph::with_capacity(vertex_count as usize);
    for v in 0..vertex_count {
        graph.add_vertex(v);
        for _ in 0..edges_per_vertex {
            graph.add_edge(v, rng.gen_range(0..vertex_count));
        }
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    c.bench_function("add_edge_10k", |b| {
        b.iter(|| black_box(make_random_graph(10_000, 4)))
    });
}

fn bench_remove_vertex(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 4);
    c.bench_function("remove_vertex_10k", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut g| {
                g.remove_vertex(black_box(&5_000));
                g
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_random_graph(100_000, 4);
    let mut rng = rand::thread_rng();
    c.bench_function("shortest_path_100k", |b| {
        b.iter(|| {
            let from = rng.gen_range(0..100_000);
            let to = rng.gen_range(0..100_000);
            black_box(shortest_path(&graph, &from, &to).unwrap())
        })
    });
}

fn bench_depth_first(c: &mut Criterion) {
    let graph = make_random_graph(100_000, 4);
    c.bench_function("depth_first_100k", |b| {
        b.iter(|| black_box(depth_first(&graph, black_box(&0)).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_remove_vertex,
    bench_shortest_path,
    bench_depth_first
);
criterion_main!(benches);
