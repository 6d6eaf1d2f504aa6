//! Concrete graph representations.

pub mod adjacency;

pub use adjacency::{
    AdjacencyGraph, DiGraph, Directed, EdgeDescription, EdgeType, GraphDescription, UnGraph,
    Undirected,
};
