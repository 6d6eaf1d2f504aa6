//! Hop distances from a source vertex.
//!
//! ```text
//! cargo run --example bfs_hop_distance -- A
//! RUST_LOG=graphwalk=trace cargo run --example bfs_hop_distance -- --graph g.json A
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use graphwalk::graph::basic::DiGraph;
use graphwalk::graph::traversal::breadth_first_visit;
use graphwalk::graph::visitor::{HopDistance, Predecessors};
use tracing_subscriber::EnvFilter;

const DEFAULT_GRAPH: &str = r#"{
    "edges": [
        { "from": "A", "to": "B" },
        { "from": "A", "to": "C" },
        { "from": "B", "to": "D" },
        { "from": "C", "to": "E" },
        { "from": "D", "to": "E" }
    ]
}"#;

#[derive(Parser)]
#[command(about = "Breadth-first hop distances from a source vertex")]
struct Cli {
    /// JSON graph description (directed); a small built-in graph otherwise
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Source vertex
    #[arg(default_value = "A")]
    source: String,
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
    let graph: DiGraph<String> = DiGraph::from_json(&json)?;
    if !graph.contains_vertex(&cli.source) {
        bail!("vertex {:?} is not in the graph", cli.source);
    }

    let mut visitor = (HopDistance::new(), Predecessors::new());
    breadth_first_visit(&graph, cli.source.clone(), &mut visitor);
    let (hops, preds) = visitor;

    let mut reached: Vec<_> = hops.into_inner().into_iter().collect();
    reached.sort_by(|(a, da), (b, db)| da.cmp(db).then_with(|| a.cmp(b)));
    for (vertex, hops) in reached {
        let via = preds.path_to(&vertex).unwrap_or_default().join(" -> ");
        println!("{vertex}: {hops} ({via})");
    }
    Ok(())
}
