//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg — shortest paths and traversals over edge-list graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts of a graph
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// List the successors of a vertex
    Neighbors {
        /// Path to the edge-list file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Check whether an edge exists
    HasEdge {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex
        from: String,
        /// Target vertex
        to: String,
    },
    /// Find a shortest path between two vertices (BFS)
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex
        from: String,
        /// Target vertex
        to: String,
    },
    /// List vertices reachable from a start vertex in depth-first order
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Start vertex
        start: String,
    },
    /// Export the graph in DOT format
    Dot {
        /// Path to the edge-list file
        file: PathBuf,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Export the graph as JSON
    Export {
        /// Path to the edge-list file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json, &mut out),
        Commands::Neighbors { file, vertex } => {
            commands::cmd_neighbors(&file, &vertex, json, &mut out)
        }
        Commands::HasEdge { file, from, to } => {
            commands::cmd_has_edge(&file, &from, &to, json, &mut out)
        }
        Commands::Path { file, from, to } => commands::cmd_path(&file, &from, &to, json, &mut out),
        Commands::Dfs { file, start } => commands::cmd_dfs(&file, &start, json, &mut out),
        Commands::Dot { file, output } => commands::cmd_dot(&file, output.as_deref(), &mut out),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty, &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::VertexNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
