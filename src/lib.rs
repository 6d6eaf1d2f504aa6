//! # `graphwalk` - Generic Graph Traversal Toolkit
//!
//! Breadth-first, depth-first and Dijkstra traversals over any graph that can
//! name the successors of a vertex. The engines report what they do through
//! an event-visitor protocol, so distances, paths, spanning trees and
//! topological orders are all computed by visitors, never by the engines.
//!
//! ## Guarantees
//!
//! ### Traversal Order
//! - **Breadth-first**: vertices are examined in non-decreasing hop count
//!   from the source.
//! - **Depth-first**: every edge is classified exactly once as a tree, back or
//!   forward/cross edge; both stack strategies emit the same events.
//! - **Dijkstra**: vertices are examined in non-decreasing distance, and a
//!   vertex's distance never changes after it is examined.
//!
//! ### Determinism
//! - The event sequence is fully determined by the order in which the graph
//!   enumerates successors (and vertices, for whole-graph visits).
//!
//! ## Architecture
//!
//! 1. **Navigation** (`graph::navigate`): `Forward`, `WeightedForward` and
//!    `VertexListForward` describe the read-only questions an engine asks.
//!    Adjacency maps and `Vec<Vec<usize>>` answer them out of the box.
//!
//! 2. **Traversal state** (`graph::access`): vertex colors and distances,
//!    owned by a single call. Color stores can be passed in to exclude
//!    vertices or to visit several sources with one shared state.
//!
//! 3. **Visitors** (`graph::visitor`): one trait per engine, every event with
//!    a no-op default. `&mut T` and pairs `(A, B)` are visitors too.
//!
//! 4. **Engines** (`graph::traversal`) and **algorithms**
//!    (`graph::algorithms`) built from an engine plus a recorder.
//!
//! ## Example
//!
//! ```rust
//! use graphwalk::graph::basic::UnGraph;
//! use graphwalk::graph::traversal::dijkstra_to;
//! use graphwalk::graph::visitor::Predecessors;
//!
//! let g: UnGraph<&str> = UnGraph::from_weighted_edges([
//!     ("A", "B", 0.1),
//!     ("B", "D", 0.2),
//!     ("D", "E", 0.1),
//!     ("A", "C", 0.6),
//!     ("C", "E", 0.3),
//! ]);
//!
//! let mut preds = Predecessors::new();
//! let d = dijkstra_to(&g, "A", &"E", &mut preds);
//! assert!((d - 0.4).abs() < 1e-9);
//! assert_eq!(preds.path_to(&"E"), Some(vec!["A", "B", "D", "E"]));
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): spans and summary events from the engines through
//!   the `tracing` crate. Install a subscriber to see them.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::IndexedMinHeap;
pub use error::{GraphError, Result};
pub use graph::algorithms::{hop_distances, shortest_path, topological_order};
pub use graph::traversal::{
    breadth_first_visit, breadth_first_visit_to, depth_first_visit, depth_first_visit_from,
    dijkstra, dijkstra_to, try_dijkstra, try_dijkstra_to, DfsStrategy,
};
pub use graph::{
    AdjacencyGraph, Color, ColorMap, ColorStore, DenseColorMap, DiGraph, DistanceMap, Forward,
    UnGraph, VertexListForward, WeightedForward,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // One byte per vertex in a dense color store.
    assert!(mem::size_of::<Color>() == 1);
    assert!(mem::size_of::<Option<Color>>() == 1);

    // The stateless visitor adds nothing to a composed pair.
    assert!(mem::size_of::<graph::visitor::NoOp>() == 0);
    assert!(mem::size_of::<DfsStrategy>() == 1);
};
