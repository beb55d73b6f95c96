//! CLI command implementations.
//!
//! Every command reads an edge-list file whose vertices are strings and
//! writes its report to `out`, as plain text or as JSON.

use std::io::Write;
use std::path::Path;

use crate::format::{DotWriter, EdgeListReader, GraphSnapshot};
use crate::graph::{depth_first, shortest_path, AdjacencyGraph};
use crate::types::GraphResult;

fn load(path: &Path) -> GraphResult<AdjacencyGraph<String>> {
    EdgeListReader::new().read_from_file(path)
}

fn print_json(out: &mut impl Write, value: &serde_json::Value) -> GraphResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Display vertex and edge counts.
pub fn cmd_info(path: &Path, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertices_count(),
            "edges": graph.edges_count(),
            "empty": graph.is_empty(),
        });
        print_json(out, &info)?;
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Vertices: {}", graph.vertices_count())?;
        writeln!(out, "Edges: {}", graph.edges_count())?;
        writeln!(out, "Empty: {}", graph.is_empty())?;
    }
    Ok(())
}

/// List the successors of a vertex.
pub fn cmd_neighbors(path: &Path, vertex: &str, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load(path)?;
    let neighbors = graph.neighbors(&vertex.to_string())?;

    if json {
        print_json(
            out,
            &serde_json::json!({"vertex": vertex, "neighbors": neighbors}),
        )?;
    } else {
        writeln!(out, "{} -> [{}]", vertex, neighbors.join(", "))?;
    }
    Ok(())
}

/// Report whether an edge exists.
pub fn cmd_has_edge(
    path: &Path,
    from: &str,
    to: &str,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load(path)?;
    let exists = graph.has_edge(&from.to_string(), &to.to_string())?;

    if json {
        print_json(
            out,
            &serde_json::json!({"from": from, "to": to, "exists": exists}),
        )?;
    } else if exists {
        writeln!(out, "Edge {} -> {} exists", from, to)?;
    } else {
        writeln!(out, "No edge {} -> {}", from, to)?;
    }
    Ok(())
}

/// Find the shortest path between two vertices.
pub fn cmd_path(
    path: &Path,
    from: &str,
    to: &str,
    json: bool,
    out: &mut impl Write,
) -> GraphResult<()> {
    let graph = load(path)?;
    let found = shortest_path(&graph, &from.to_string(), &to.to_string())?;

    if json {
        let info = match &found {
            Some(p) => serde_json::json!({
                "from": from,
                "to": to,
                "path": p,
                "length": p.len() - 1,
            }),
            None => serde_json::json!({"from": from, "to": to, "path": null}),
        };
        print_json(out, &info)?;
    } else {
        match found {
            Some(p) => {
                writeln!(out, "{}", p.join(" -> "))?;
                writeln!(out, "\nLength: {} edges", p.len() - 1)?;
            }
            None => writeln!(out, "No path from {} to {}", from, to)?,
        }
    }
    Ok(())
}

/// List every vertex reachable from `start` in depth-first order.
pub fn cmd_dfs(path: &Path, start: &str, json: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load(path)?;
    let order = depth_first(&graph, &start.to_string())?;

    if json {
        print_json(out, &serde_json::json!({"start": start, "order": order}))?;
    } else {
        for (i, vertex) in order.iter().enumerate() {
            writeln!(out, "{:>4}. {}", i + 1, vertex)?;
        }
        writeln!(out, "\n{} vertices reachable", order.len())?;
    }
    Ok(())
}

/// Export the graph as DOT, to `output` if given, otherwise to `out`.
pub fn cmd_dot(path: &Path, output: Option<&Path>, out: &mut impl Write) -> GraphResult<()> {
    let graph = load(path)?;
    let writer = DotWriter::new();

    match output {
        Some(target) => {
            writer.write_to_file(&graph, target)?;
            writeln!(out, "Wrote {}", target.display())?;
        }
        None => writer.write_to(&graph, out)?,
    }
    Ok(())
}

/// Export the graph as a JSON snapshot.
pub fn cmd_export(path: &Path, pretty: bool, out: &mut impl Write) -> GraphResult<()> {
    let graph = load(path)?;
    let snapshot = GraphSnapshot::from_graph(&graph);
    writeln!(out, "{}", snapshot.to_json(pretty)?)?;
    Ok(())
}
