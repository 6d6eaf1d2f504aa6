//! Topological ordering of a dependency graph.
//!
//! ```text
//! cargo run --example dfs_toposort
//! cargo run --example dfs_toposort -- --strategy recursive
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use graphwalk::graph::basic::DiGraph;
use graphwalk::graph::traversal::depth_first_visit_all_with;
use graphwalk::graph::visitor::{CycleDetector, FinishOrder};
use graphwalk::{ColorMap, DfsStrategy};
use tracing_subscriber::EnvFilter;

const DEFAULT_GRAPH: &str = r#"{
    "vertices": ["undershorts", "socks", "pants", "shoes", "watch", "shirt", "belt", "tie", "jacket"],
    "edges": [
        { "from": "undershorts", "to": "pants" },
        { "from": "undershorts", "to": "shoes" },
        { "from": "socks", "to": "shoes" },
        { "from": "pants", "to": "shoes" },
        { "from": "pants", "to": "belt" },
        { "from": "shirt", "to": "belt" },
        { "from": "shirt", "to": "tie" },
        { "from": "tie", "to": "jacket" },
        { "from": "belt", "to": "jacket" }
    ]
}"#;

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Recursive,
    Stack,
}

impl From<Strategy> for DfsStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Recursive => DfsStrategy::Recursive,
            Strategy::Stack => DfsStrategy::ExplicitStack,
        }
    }
}

#[derive(Parser)]
#[command(about = "Depth-first topological sort")]
struct Cli {
    /// JSON graph description (directed); a small built-in graph otherwise
    #[arg(long)]
    graph: Option<PathBuf>,

    /// How the depth-first engine tracks its path
    #[arg(long, value_enum, default_value_t = Strategy::Stack)]
    strategy: Strategy,
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

    let mut visitor = (FinishOrder::new(), CycleDetector::new());
    let mut colors = ColorMap::new();
    depth_first_visit_all_with(&graph, &mut visitor, &mut colors, cli.strategy.into());

    let (order, cycles) = visitor;
    if let Some((from, to)) = cycles.first_back_edge() {
        anyhow::bail!("no topological order: edge {from} -> {to} closes a cycle");
    }
    for (i, vertex) in order.into_topological().iter().enumerate() {
        println!("{:>2}. {vertex}", i + 1);
    }
    Ok(())
}
