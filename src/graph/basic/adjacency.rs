//! A small in-memory weighted adjacency-list graph.
//!
//! `AdjacencyGraph` exists so callers (and this crate's tests, demos and
//! benchmarks) have something concrete to hand to the traversal engines. It
//! implements every navigation capability:
//! - successors come back in edge insertion order
//! - vertices are listed in insertion order
//! - a missing edge weighs `+∞`, so it can never be relaxed
//!
//! With the `json` feature, graphs can also be loaded from a JSON description:
//!
//! ```json
//! {
//!   "vertices": ["A", "B"],
//!   "edges": [{ "from": "A", "to": "B", "weight": 0.5 }]
//! }
//! ```
//!
//! `vertices` is optional and only fixes listing order; edge endpoints are
//! added automatically. A missing `weight` defaults to one.

use core::hash::Hash;
use core::iter::{Cloned, Map};
use core::marker::PhantomData;
use core::slice;
use std::collections::{HashMap, HashSet};

use num_traits::Float;
#[cfg(feature = "json")]
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use crate::error::Result;
use crate::graph::navigate::{Forward, VertexListForward, WeightedForward};

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;
/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}
impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// One edge of a [`GraphDescription`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>, W: Deserialize<'de>"))]
pub struct EdgeDescription<V, W> {
    /// Source vertex.
    pub from: V,
    /// Target vertex.
    pub to: V,
    /// Edge weight, one when omitted.
    #[serde(default)]
    pub weight: Option<W>,
}

/// Serializable description of an [`AdjacencyGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>, W: Deserialize<'de>"))]
pub struct GraphDescription<V, W> {
    /// Vertices in listing order. Edge endpoints missing here are appended.
    #[serde(default)]
    pub vertices: Vec<V>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeDescription<V, W>>,
}

/// An adjacency-list graph with weighted edges.
///
/// For an [`Undirected`] graph every edge is stored in both directions with
/// the same weight.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Hash insert + append |
/// | `add_edge` | \(O(\text{out-degree})\) | Replaces the weight of an existing edge |
/// | `next_vertices` | \(O(1)\) | Borrowing iterator over the list |
/// | `weight` | \(O(\text{out-degree})\) | Linear scan of the list |
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W = f64, Ty = Directed> {
    order: Vec<V>,
    adjacency: HashMap<V, Vec<(V, W)>>,
    edge_count: usize,
    _ty: PhantomData<Ty>,
}

/// A directed [`AdjacencyGraph`].
pub type DiGraph<V, W = f64> = AdjacencyGraph<V, W, Directed>;
/// An undirected [`AdjacencyGraph`].
pub type UnGraph<V, W = f64> = AdjacencyGraph<V, W, Undirected>;

impl<V, W, Ty> AdjacencyGraph<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Float,
    Ty: EdgeType,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
            _ty: PhantomData,
        }
    }

    /// Builds a graph from unit-weight edges, adding endpoints as needed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Builds a graph from weighted edges, adding endpoints as needed.
    pub fn from_weighted_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_weighted_edge(from, to, weight);
        }
        graph
    }

    /// Builds a graph from a parsed description.
    pub fn from_description(description: GraphDescription<V, W>) -> Self {
        let mut graph = Self::new();
        for v in description.vertices {
            graph.add_vertex(v);
        }
        for edge in description.edges {
            let weight = edge.weight.unwrap_or_else(W::one);
            graph.add_weighted_edge(edge.from, edge.to, weight);
        }
        graph
    }

    /// Parses a JSON description (see the module docs for the format).
    ///
    /// # Errors
    /// Returns [`GraphError::Json`](crate::GraphError::Json) if the text is
    /// not a valid description.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self>
    where
        V: DeserializeOwned,
        W: DeserializeOwned,
    {
        let description: GraphDescription<V, W> = serde_json::from_str(json)?;
        Ok(Self::from_description(description))
    }

    /// Returns a description listing every vertex and every stored edge.
    ///
    /// Undirected edges are listed once, in the direction they were added.
    pub fn to_description(&self) -> GraphDescription<V, W> {
        let mut edges = Vec::with_capacity(self.edge_count);
        let mut seen: HashSet<(V, V)> = HashSet::new();
        for from in &self.order {
            for (to, weight) in self.adjacency.get(from).map_or(&[][..], Vec::as_slice) {
                if !Ty::is_directed() {
                    if seen.contains(&(to.clone(), from.clone())) {
                        continue;
                    }
                    seen.insert((from.clone(), to.clone()));
                }
                edges.push(EdgeDescription {
                    from: from.clone(),
                    to: to.clone(),
                    weight: Some(*weight),
                });
            }
        }
        GraphDescription {
            vertices: self.order.clone(),
            edges,
        }
    }

    /// Adds `vertex` if it is not already present.
    ///
    /// Returns `true` if the vertex is new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Adds a unit-weight edge `from -> to`.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.add_weighted_edge(from, to, W::one());
    }

    /// Adds an edge `from -> to` with `weight`, or updates its weight.
    ///
    /// Weights are stored as given; negative weights are only rejected by the
    /// checked shortest-path entry points.
    pub fn add_weighted_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        let inserted = self.insert_arc(&from, &to, weight);
        if !Ty::is_directed() && from != to {
            self.insert_arc(&to, &from, weight);
        }
        if inserted {
            self.edge_count += 1;
        }
    }

    fn insert_arc(&mut self, from: &V, to: &V, weight: W) -> bool {
        let Some(nbrs) = self.adjacency.get_mut(from) else {
            return false;
        };
        if let Some(entry) = nbrs.iter_mut().find(|(v, _)| v == to) {
            entry.1 = weight;
            false
        } else {
            nbrs.push((to.clone(), weight));
            true
        }
    }

    /// Returns `true` if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|nbrs| nbrs.iter().any(|(v, _)| v == to))
    }

    /// Returns the weight of `from -> to`, if the edge exists.
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.adjacency
            .get(from)
            .and_then(|nbrs| nbrs.iter().find(|(v, _)| v == to))
            .map(|(_, w)| *w)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the out-degree of `vertex` (zero if absent).
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Returns `true` for [`Directed`] graphs.
    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }
}

impl<V, W, Ty> Default for AdjacencyGraph<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Float,
    Ty: EdgeType,
{
    fn default() -> Self {
        Self::new()
    }
}

fn target_of<V: Clone, W>(arc: &(V, W)) -> V {
    arc.0.clone()
}

impl<V, W, Ty> Forward for AdjacencyGraph<V, W, Ty>
where
    V: Clone + Eq + Hash,
{
    type Vertex = V;
    type Successors<'a> = Map<slice::Iter<'a, (V, W)>, fn(&(V, W)) -> V>
    where
        Self: 'a;

    #[inline]
    fn next_vertices(&self, vertex: &V) -> Self::Successors<'_> {
        self.adjacency
            .get(vertex)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(target_of as fn(&(V, W)) -> V)
    }
}

impl<V, W, Ty> WeightedForward for AdjacencyGraph<V, W, Ty>
where
    V: Clone + Eq + Hash,
    W: Float,
{
    type Weight = W;

    /// Returns the stored weight, or `+∞` when there is no such edge.
    #[inline]
    fn weight(&self, from: &V, to: &V) -> W {
        self.adjacency
            .get(from)
            .and_then(|nbrs| nbrs.iter().find(|(v, _)| v == to))
            .map_or_else(W::infinity, |(_, w)| *w)
    }
}

impl<V, W, Ty> VertexListForward for AdjacencyGraph<V, W, Ty>
where
    V: Clone + Eq + Hash,
{
    type Vertices<'a> = Cloned<slice::Iter<'a, V>>
    where
        Self: 'a;

    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        self.order.iter().cloned()
    }
}
