//! Reads and writes the line-based edge-list text format.
//!
//! Each non-comment line is either `u v` or `u -> v`, declaring an edge,
//! or a single token `u`, declaring a vertex. Edges keep the order in
//! which their lines appear, so successor order survives a round trip.

use std::collections::HashSet;
use std::fmt::Display;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use crate::graph::AdjacencyGraph;
use crate::types::{GraphError, GraphResult, Vertex};

/// Separator allowed between the two vertices of an edge line.
const ARROW: &str = "->";

/// Comment prefix assumed for files written by [`EdgeListWriter`].
const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Reader for edge-list files.
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with this prefix are skipped (default: `#`).
    comment_prefix: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment prefix.
    pub fn comment_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Read an edge-list file into a graph.
    pub fn read_from_file<V>(&self, path: &Path) -> GraphResult<AdjacencyGraph<V>>
    where
        V: Vertex + FromStr,
        V::Err: Display,
    {
        let file = std::fs::File::open(path)?;
        self.read_from(BufReader::new(file))
    }

    /// Read from any buffered reader into a graph.
    pub fn read_from<V, R>(&self, reader: R) -> GraphResult<AdjacencyGraph<V>>
    where
        V: Vertex + FromStr,
        V::Err: Display,
        R: BufRead,
    {
        let mut graph = AdjacencyGraph::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty()
                || (!self.comment_prefix.is_empty() && trimmed.starts_with(&self.comment_prefix))
            {
                continue;
            }

            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            match tokens.as_slice() {
                [vertex] => graph.add_vertex(parse_vertex(vertex, line_no)?),
                [from, to] | [from, "->", to] => {
                    let from: V = parse_vertex(from, line_no)?;
                    let to: V = parse_vertex(to, line_no)?;
                    if graph.neighbors(&from).map_or(false, |n| n.contains(&to)) {
                        log::warn!("line {}: duplicate edge {:?} -> {:?} ignored", line_no, from, to);
                        continue;
                    }
                    graph.add_edge(from, to);
                }
                _ => {
                    return Err(GraphError::Parse {
                        line: line_no,
                        message: format!("expected `u v`, `u -> v` or `u`, got {:?}", trimmed),
                    })
                }
            }
        }

        log::debug!(
            "edge list: read {} vertices and {} edges",
            graph.vertices_count(),
            graph.edges_count()
        );
        Ok(graph)
    }
}

fn parse_vertex<V>(token: &str, line: usize) -> GraphResult<V>
where
    V: FromStr,
    V::Err: Display,
{
    if token == ARROW {
        return Err(GraphError::Parse {
            line,
            message: format!("`{}` must sit between two vertices", ARROW),
        });
    }
    token.parse().map_err(|e: V::Err| GraphError::Parse {
        line,
        message: format!("invalid vertex {:?}: {}", token, e),
    })
}

/// Writer for edge-list files.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Write a graph to a file, replacing its contents.
    pub fn write_to_file<V>(graph: &AdjacencyGraph<V>, path: &Path) -> GraphResult<()>
    where
        V: Vertex + Display,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to any writer.
    ///
    /// Vertices that no edge mentions are written first as single-token
    /// lines, then every edge as `u v`. Labels a default [`EdgeListReader`]
    /// could not read back (empty, containing whitespace, starting with `#`
    /// or equal to `->`) fail with [`GraphError::InvalidLabel`] before
    /// anything is written.
    pub fn write_to<V>(graph: &AdjacencyGraph<V>, writer: &mut impl Write) -> GraphResult<()>
    where
        V: Vertex + Display,
    {
        let mut mentioned: HashSet<&V> = HashSet::new();
        let mut edge_lines = Vec::with_capacity(graph.edges_count());
        for (from, to) in graph.edges() {
            mentioned.insert(from);
            mentioned.insert(to);
            edge_lines.push(format!("{} {}", checked_label(from)?, checked_label(to)?));
        }

        let mut vertex_lines = Vec::new();
        for vertex in graph.iter_vertices() {
            if !mentioned.contains(vertex) {
                vertex_lines.push(checked_label(vertex)?);
            }
        }

        for line in vertex_lines.iter().chain(&edge_lines) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

/// Render `vertex` as a single token the reader maps back to the same vertex.
fn checked_label<V: Display>(vertex: &V) -> GraphResult<String> {
    let label = vertex.to_string();
    let reason = if label.is_empty() {
        "label is empty"
    } else if label.chars().any(char::is_whitespace) {
        "label contains whitespace"
    } else if label.starts_with(DEFAULT_COMMENT_PREFIX) {
        "label starts with the comment prefix"
    } else if label == ARROW {
        "label is the edge arrow"
    } else {
        return Ok(label);
    };
    Err(GraphError::InvalidLabel { label, reason })
}
