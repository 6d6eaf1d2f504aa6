//! Vertex coloring for traversals.
//!
//! Two storage choices sit behind the [`ColorStore`] trait:
//! - [`ColorMap`]: a sparse hash map for arbitrary hashable vertices
//! - [`DenseColorMap`]: a flat vector for small dense `usize` vertices
//!
//! Both treat a vertex they have never seen as [`Color::Unvisited`]. The
//! default is spelled out by `Color`'s `Default` impl, not left to the
//! storage's zero value.

use core::hash::Hash;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Traversal state of a vertex (classically white, gray and black).
///
/// Within one traversal run a vertex only moves forward through
/// `Unvisited < Frontier < Done`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    Unvisited,
    /// Discovered but not finished: queued (BFS, Dijkstra) or on the
    /// recursion stack (DFS).
    Frontier,
    /// Finished. All outgoing edges have been processed.
    Done,
}

/// Per-vertex color storage used by the traversal engines.
///
/// Implementations must answer [`Color::Unvisited`] for every vertex that was
/// never assigned a color.
pub trait ColorStore<V> {
    /// Returns the color of `vertex`.
    fn color(&self, vertex: &V) -> Color;

    /// Assigns `color` to `vertex`.
    fn set_color(&mut self, vertex: &V, color: Color);

    /// Marks `vertex` as finished so a later traversal using this store skips it.
    #[inline]
    fn exclude(&mut self, vertex: &V) {
        self.set_color(vertex, Color::Done);
    }
}

/// A sparse color map. Missing vertices are [`Color::Unvisited`].
#[derive(Debug, Clone)]
pub struct ColorMap<V> {
    colors: HashMap<V, Color>,
}

impl<V: Eq + Hash> PartialEq for ColorMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
    }
}

impl<V: Eq + Hash> Eq for ColorMap<V> {}

impl<V: Eq + Hash> ColorMap<V> {
    /// Creates an empty map (every vertex unvisited).
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` colored vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: HashMap::with_capacity(capacity),
        }
    }

    /// Number of vertices that have been colored at least once.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no vertex has been colored.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over every colored vertex in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Color)> + '_ {
        self.colors.iter().map(|(v, c)| (v, *c))
    }

    /// Resets every vertex to unvisited.
    pub fn clear(&mut self) {
        self.colors.clear();
    }
}

impl<V: Eq + Hash> Default for ColorMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> ColorStore<V> for ColorMap<V> {
    #[inline]
    fn color(&self, vertex: &V) -> Color {
        self.colors.get(vertex).copied().unwrap_or_default()
    }

    #[inline]
    fn set_color(&mut self, vertex: &V, color: Color) {
        if let Some(slot) = self.colors.get_mut(vertex) {
            *slot = color;
        } else {
            self.colors.insert(vertex.clone(), color);
        }
    }
}

/// A dense color vector for vertices numbered `0..n`.
///
/// Indices past the end read as [`Color::Unvisited`]. Assigning a visited
/// color to index `i` grows the vector to `i + 1` slots, one byte each, so
/// vertex ids should stay close to the vertex count. Assigning
/// [`Color::Unvisited`] past the end allocates nothing.
///
/// # Panics
/// [`ColorStore::set_color`] panics if asked to grow for vertex `usize::MAX`,
/// which no vector can hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenseColorMap {
    colors: Vec<Color>,
}

impl DenseColorMap {
    /// Creates a map sized for `vertex_count` vertices, all unvisited.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            colors: vec![Color::default(); vertex_count],
        }
    }

    /// Number of slots currently allocated.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no slot is allocated.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resets every vertex to unvisited, keeping the allocation.
    pub fn clear(&mut self) {
        self.colors.fill(Color::default());
    }

    /// Returns the colors as a slice indexed by vertex.
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

impl ColorStore<usize> for DenseColorMap {
    #[inline]
    fn color(&self, vertex: &usize) -> Color {
        self.colors.get(*vertex).copied().unwrap_or_default()
    }

    #[inline]
    fn set_color(&mut self, vertex: &usize, color: Color) {
        let idx = *vertex;
        if let Some(slot) = self.colors.get_mut(idx) {
            *slot = color;
            return;
        }
        if color == Color::Unvisited {
            return;
        }
        let Some(len) = idx.checked_add(1) else {
            panic!("vertex index {idx} exceeds dense color capacity");
        };
        self.colors.resize(len, Color::default());
        self.colors[idx] = color;
    }
}
