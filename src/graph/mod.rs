//! Graph navigation, traversal engines and their visitors.
//!
//! The crate is organized the way a traversal uses it:
//! - `navigate`: what a graph must answer (successors, weights, vertex listing)
//! - `access`: per-traversal state (colors, distances)
//! - `visitor`: the event protocol and ready-made recorders
//! - `traversal`: breadth-first, depth-first and Dijkstra engines
//! - `algorithms`: results composed from one engine and a recorder
//! - `basic`: a concrete in-memory graph for callers that have none

pub mod access;
pub mod algorithms;
pub mod basic;
pub mod navigate;
pub mod traversal;
pub mod visitor;

// Re-export commonly used types from submodules
pub use access::{Color, ColorMap, ColorStore, DenseColorMap, DistanceMap};
pub use basic::{AdjacencyGraph, DiGraph, UnGraph};
pub use navigate::{Forward, VertexListForward, WeightedForward};
pub use traversal::DfsStrategy;
