//! Read-only capabilities a graph exposes to the traversal engines.
//!
//! The engines never store or mutate a graph. They only ask it three things:
//! - [`Forward`]: which vertices follow a given vertex (every engine)
//! - [`WeightedForward`]: how much an edge costs (Dijkstra)
//! - [`VertexListForward`]: which vertices exist at all (whole-graph DFS)
//!
//! Successors and vertices should come back in a stable order; the event
//! sequence of a traversal is fully determined by that order.
//!
//! Plain adjacency maps and vectors implement the capabilities directly, so
//! small graphs need no wrapper type:
//! - `HashMap<V, Vec<V>>` is [`Forward`]
//! - `BTreeMap<V, Vec<V>>` is [`Forward`] and [`VertexListForward`] (keys in order)
//! - `Vec<Vec<usize>>` is [`Forward`] and [`VertexListForward`] (`0..len`)

use core::hash::{BuildHasher, Hash};
use core::iter::Cloned;
use core::ops::Range;
use core::slice;
use std::collections::{btree_map, BTreeMap, HashMap};

use num_traits::Float;

/// Navigate forward from a vertex. The graph may be directed or undirected.
pub trait Forward {
    /// Vertex identifier. Only identity matters.
    type Vertex: Clone + Eq + Hash;

    /// Iterator over the successors of one vertex.
    type Successors<'a>: Iterator<Item = Self::Vertex> + 'a
    where
        Self: 'a;

    /// Returns the vertices reachable by leaving `vertex` along one edge.
    ///
    /// A vertex unknown to the graph has no successors.
    fn next_vertices(&self, vertex: &Self::Vertex) -> Self::Successors<'_>;
}

/// A [`Forward`] graph whose edges carry weights.
///
/// Dijkstra's algorithm assumes every weight is non-negative. A negative
/// weight does not fail the unchecked engines; it silently yields wrong
/// distances. Use the `try_` variants to have weights validated.
pub trait WeightedForward: Forward {
    /// Edge weight and distance type.
    type Weight: Float;

    /// Returns the weight of the edge `from -> to`.
    fn weight(&self, from: &Self::Vertex, to: &Self::Vertex) -> Self::Weight;
}

/// A [`Forward`] graph that can list all of its vertices.
pub trait VertexListForward: Forward {
    /// Iterator over every vertex of the graph.
    type Vertices<'a>: Iterator<Item = Self::Vertex> + 'a
    where
        Self: 'a;

    /// Returns all vertices. The order decides where a whole-graph visit
    /// restarts for each disconnected component.
    fn vertices(&self) -> Self::Vertices<'_>;
}

impl<V, S> Forward for HashMap<V, Vec<V>, S>
where
    V: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Vertex = V;
    type Successors<'a> = Cloned<slice::Iter<'a, V>>
    where
        Self: 'a;

    #[inline]
    fn next_vertices(&self, vertex: &V) -> Self::Successors<'_> {
        self.get(vertex).map_or(&[][..], Vec::as_slice).iter().cloned()
    }
}

impl<V> Forward for BTreeMap<V, Vec<V>>
where
    V: Clone + Ord + Hash,
{
    type Vertex = V;
    type Successors<'a> = Cloned<slice::Iter<'a, V>>
    where
        Self: 'a;

    #[inline]
    fn next_vertices(&self, vertex: &V) -> Self::Successors<'_> {
        self.get(vertex).map_or(&[][..], Vec::as_slice).iter().cloned()
    }
}

impl<V> VertexListForward for BTreeMap<V, Vec<V>>
where
    V: Clone + Ord + Hash,
{
    type Vertices<'a> = Cloned<btree_map::Keys<'a, V, Vec<V>>>
    where
        Self: 'a;

    /// Lists the keys in ascending order. A vertex that only ever appears as
    /// an edge target must have its own (possibly empty) entry to be listed.
    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        self.keys().cloned()
    }
}

impl Forward for Vec<Vec<usize>> {
    type Vertex = usize;
    type Successors<'a> = Cloned<slice::Iter<'a, usize>>;

    #[inline]
    fn next_vertices(&self, vertex: &usize) -> Self::Successors<'_> {
        self.get(*vertex).map_or(&[][..], Vec::as_slice).iter().cloned()
    }
}

impl VertexListForward for Vec<Vec<usize>> {
    type Vertices<'a> = Range<usize>;

    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        0..self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_map_successors() {
        let mut g: HashMap<&str, Vec<&str>> = HashMap::new();
        g.insert("A", vec!["B", "C"]);
        assert_eq!(g.next_vertices(&"A").collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(g.next_vertices(&"Z").count(), 0);
    }

    #[test]
    fn test_btree_map_lists_sorted_keys() {
        let mut g = BTreeMap::new();
        g.insert("F", vec!["B"]);
        g.insert("A", vec!["B", "C"]);
        g.insert("B", vec![]);
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec!["A", "B", "F"]);
        assert_eq!(g.next_vertices(&"F").collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_dense_adjacency() {
        let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![2], vec![]];
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(g.next_vertices(&0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(g.next_vertices(&9).count(), 0);
    }
}
