//! Traversal engines.
//!
//! Each engine walks a graph through the [`navigate`](crate::graph::navigate)
//! capabilities and reports what it does to a visitor. Engines keep their
//! working state (colors, queue, stack, distances) private to one call.

mod bfs;
mod dfs;
mod dijkstra;

pub use bfs::{breadth_first_visit, breadth_first_visit_to, breadth_first_visit_with};
pub use dfs::{
    depth_first_visit, depth_first_visit_all_with, depth_first_visit_from, depth_first_visit_with,
    DfsStrategy,
};
pub use dijkstra::{dijkstra, dijkstra_to, try_dijkstra, try_dijkstra_to};
