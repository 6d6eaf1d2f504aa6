//! Error types for the fallible entry points.
//!
//! The traversal engines themselves are total over well-formed input and never
//! return an error. Only the checked shortest-path variants, topological
//! ordering and, with the `json` feature, graph loading report failures through [`GraphError`].

use thiserror::Error;

/// Errors reported by checked traversals and graph loading.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge weight was negative or NaN.
    ///
    /// Dijkstra's algorithm silently produces wrong distances on such input,
    /// so the checked variants refuse to use the weight at all.
    #[error("invalid weight {weight} on edge {from} -> {to}: weights must be non-negative")]
    InvalidWeight {
        /// Debug rendering of the edge's source vertex.
        from: String,
        /// Debug rendering of the edge's target vertex.
        to: String,
        /// The offending weight, widened to `f64`.
        weight: f64,
    },

    /// A back edge was found, so the graph has no topological order.
    #[error("graph contains a cycle through vertex {vertex}")]
    Cycle {
        /// Debug rendering of the vertex the back edge points to.
        vertex: String,
    },

    /// The JSON graph description could not be parsed.
    #[cfg(feature = "json")]
    #[error("invalid graph description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
