//! Writes graphs in the DOT format used by GraphViz.
//!
//! Only the basics are emitted: one statement per vertex followed by one
//! `source -> target;` statement per outgoing edge, wrapped in a `digraph`
//! block. Vertex statements are ordered by label so the same graph always
//! renders to the same text.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::graph::AdjacencyGraph;
use crate::types::{GraphResult, Vertex};

/// Words DOT reserves; they must be quoted to be used as vertex names.
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Writer for the DOT format.
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Name after the `digraph` keyword (default: `g`).
    graph_name: String,
    /// Prefix of every statement line (default: two spaces).
    indent: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            graph_name: "g".to_string(),
            indent: "  ".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name written after `digraph`.
    pub fn graph_name<S: Into<String>>(mut self, name: S) -> Self {
        self.graph_name = name.into();
        self
    }

    /// Set the prefix written before every statement.
    pub fn indent<S: Into<String>>(mut self, indent: S) -> Self {
        self.indent = indent.into();
        self
    }

    /// Write a graph to a file, replacing its contents.
    pub fn write_to_file<V>(&self, graph: &AdjacencyGraph<V>, path: &Path) -> GraphResult<()>
    where
        V: Vertex + Display,
    {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to any writer.
    ///
    /// Edges of a vertex follow its successor order.
    pub fn write_to<V>(&self, graph: &AdjacencyGraph<V>, writer: &mut impl Write) -> GraphResult<()>
    where
        V: Vertex + Display,
    {
        let mut vertices: Vec<(String, &V)> = graph
            .iter_vertices()
            .map(|v| (quote_id(&v.to_string()), v))
            .collect();
        vertices.sort_by(|a, b| a.0.cmp(&b.0));

        writeln!(writer, "digraph {} {{", quote_id(&self.graph_name))?;
        for (source, vertex) in &vertices {
            writeln!(writer, "{}{};", self.indent, source)?;
            for target in graph.neighbors(vertex)? {
                writeln!(
                    writer,
                    "{}{} -> {};",
                    self.indent,
                    source,
                    quote_id(&target.to_string())
                )?;
            }
        }
        writeln!(writer, "}}")?;
        Ok(())
    }

    /// Render a graph to a string.
    pub fn render<V>(&self, graph: &AdjacencyGraph<V>) -> GraphResult<String>
    where
        V: Vertex + Display,
    {
        let mut buf = Vec::new();
        self.write_to(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Quote `id` unless DOT accepts it bare.
fn quote_id(id: &str) -> String {
    if is_plain_id(id) || is_numeral(id) {
        id.to_string()
    } else {
        format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

fn is_plain_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id))
}

fn is_numeral(id: &str) -> bool {
    let digits = id.strip_prefix('-').unwrap_or(id);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    match fraction {
        None => !whole.is_empty() && all_digits(whole),
        Some(fraction) => {
            !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
        }
    }
}
