//! Shortest weighted path between two vertices.
//!
//! ```text
//! cargo run --example dijkstra_path -- A E
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use graphwalk::graph::basic::UnGraph;
use graphwalk::graph::traversal::try_dijkstra_to;
use graphwalk::graph::visitor::Predecessors;
use tracing_subscriber::EnvFilter;

const DEFAULT_GRAPH: &str = r#"{
    "edges": [
        { "from": "A", "to": "B", "weight": 0.1 },
        { "from": "B", "to": "D", "weight": 0.2 },
        { "from": "D", "to": "E", "weight": 0.1 },
        { "from": "A", "to": "C", "weight": 0.6 },
        { "from": "C", "to": "E", "weight": 0.3 }
    ]
}"#;

#[derive(Parser)]
#[command(about = "Dijkstra shortest path on an undirected weighted graph")]
struct Cli {
    /// JSON graph description (undirected); a small built-in graph otherwise
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Start vertex
    #[arg(default_value = "A")]
    source: String,

    /// End vertex
    #[arg(default_value = "E")]
    target: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = match &cli.graph {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => DEFAULT_GRAPH.to_owned(),
    };
    let graph: UnGraph<String> = UnGraph::from_json(&json)?;

    let mut preds = Predecessors::new();
    let distance = try_dijkstra_to(&graph, cli.source.clone(), &cli.target, &mut preds)?;
    if distance.is_infinite() {
        println!("{} is unreachable from {}", cli.target, cli.source);
        return Ok(());
    }

    let path = preds
        .path_to(&cli.target)
        .context("reached target has no recorded path")?;
    println!("distance: {distance}");
    println!("path: {}", path.join(" -> "));
    Ok(())
}
