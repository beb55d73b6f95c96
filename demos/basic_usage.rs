//! Basic build -> search -> export flow.

use adjgraph::*;

fn main() -> GraphResult<()> {
    // Build the graph
    let mut builder = GraphBuilder::new();
    builder
        .edges([(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (3, 7), (4, 8)])
        .edges([(6, 5), (5, 8), (9, 7)]);
    let graph = builder.build();

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertices_count(),
        graph.edges_count()
    );

    // Shortest paths
    for (from, to) in [(1, 8), (3, 8), (1, 9)] {
        match shortest_path(&graph, &from, &to)? {
            Some(path) => println!("Shortest path {} -> {}: {:?}", from, to, path),
            None => println!("No path from {} to {}", from, to),
        }
    }

    // Depth-first order
    println!("DFS from 1: {:?}", depth_first(&graph, &1)?);

    // Export
    let path = std::env::temp_dir().join("adjgraph_demo.dot");
    DotWriter::new().write_to_file(&graph, &path)?;
    println!("\nSaved to {}", path.display());

    Ok(())
}
