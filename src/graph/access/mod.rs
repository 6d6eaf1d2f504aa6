//! Per-traversal state shared by the engines.
//!
//! Colors and distances are owned by a single traversal call. A color store
//! may also be handed in by the caller to restrict or resume a visit.

pub mod color;
pub mod distance;

pub use color::{Color, ColorMap, ColorStore, DenseColorMap};
pub use distance::DistanceMap;
