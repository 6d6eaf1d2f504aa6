//! Tentative and final distances for shortest-path traversals.

use core::hash::Hash;
use std::collections::HashMap;

use num_traits::Float;

/// Maps vertices to distances from a source. Missing vertices are at `+∞`.
///
/// Dijkstra only ever lowers an entry. Vertices never reached from the source
/// are absent rather than stored as infinity, so [`len`](Self::len) counts
/// reached vertices.
#[derive(Debug, Clone)]
pub struct DistanceMap<V, W> {
    distances: HashMap<V, W>,
}

impl<V: Eq + Hash, W: PartialEq> PartialEq for DistanceMap<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.distances == other.distances
    }
}

impl<V: Eq + Hash, W: Float> DistanceMap<V, W> {
    /// Creates an empty map (every vertex at infinity).
    pub fn new() -> Self {
        Self {
            distances: HashMap::new(),
        }
    }

    /// Returns the distance of `vertex`, or `+∞` if it was never reached.
    #[inline]
    pub fn distance(&self, vertex: &V) -> W {
        self.distances.get(vertex).copied().unwrap_or_else(W::infinity)
    }

    /// Returns the distance of `vertex` if it was reached.
    #[inline]
    pub fn get(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Returns `true` if `vertex` was reached.
    #[inline]
    pub fn contains(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Records `distance` for `vertex`.
    #[inline]
    pub fn set(&mut self, vertex: V, distance: W) {
        self.distances.insert(vertex, distance);
    }

    /// Number of reached vertices.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if no vertex was reached.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterates over reached vertices and their distances in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.distances.iter().map(|(v, d)| (v, *d))
    }

    /// Consumes the table and returns the plain map.
    pub fn into_inner(self) -> HashMap<V, W> {
        self.distances
    }
}

impl<V: Eq + Hash, W: Float> Default for DistanceMap<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_vertex_is_infinite() {
        let mut dist: DistanceMap<&str, f64> = DistanceMap::new();
        assert!(dist.distance(&"a").is_infinite());
        assert_eq!(dist.get(&"a"), None);

        dist.set("a", 0.0);
        dist.set("b", 1.5);
        assert_eq!(dist.distance(&"a"), 0.0);
        assert_eq!(dist.distance(&"b"), 1.5);
        assert!(dist.contains(&"b"));
        assert_eq!(dist.len(), 2);

        let plain = dist.into_inner();
        assert_eq!(plain.get("b"), Some(&1.5));
    }

    #[test]
    fn test_f32_weights() {
        let mut dist: DistanceMap<u32, f32> = DistanceMap::default();
        assert!(dist.is_empty());
        assert_eq!(dist.distance(&7), f32::INFINITY);
        dist.set(7, 2.5);
        assert_eq!(dist.iter().collect::<Vec<_>>(), vec![(&7, 2.5f32)]);
    }

    #[test]
    fn test_maps_compare_by_content() {
        let mut a: DistanceMap<&str, f64> = DistanceMap::new();
        let mut b = DistanceMap::new();
        a.set("x", 1.0);
        a.set("y", 2.0);
        b.set("y", 2.0);
        b.set("x", 1.0);
        assert_eq!(a, b);

        b.set("x", 0.5);
        assert_ne!(a, b);
    }
}
