//! Dijkstra single-source shortest paths.
//!
//! Vertices are examined in non-decreasing distance from the source. The
//! engine keeps a color map, a [`DistanceMap`] and an [`IndexedMinHeap`]
//! keyed by tentative distance. For every popped vertex `v` the visitor sees:
//!
//! 1. `examine_vertex(v)` (a designated target stops the visit right here)
//! 2. per successor `n`: `examine_edge(v, n)`, then `edge_relaxed(v, n)`
//!    when `n` is not yet examined and `dist(v) + w(v, n)` is strictly
//!    smaller than `dist(n)`, followed by `discover_vertex(n)` the first time
//!    `n` is reached; otherwise `edge_not_relaxed(v, n)`
//! 3. `finish_vertex(v)`
//!
//! Edge weights must be non-negative. The unchecked entry points do not
//! validate this and return wrong distances on negative weights; the `try_`
//! variants reject a negative or NaN weight with
//! [`GraphError::InvalidWeight`] before using it.
//!
//! The returned [`DistanceMap`] contains exactly the vertices reached from the
//! source. Unreached vertices are absent and read as `+∞`.

use core::fmt::Debug;

use num_traits::{Float, Zero};

use crate::collections::IndexedMinHeap;
use crate::error::{GraphError, Result};
use crate::graph::access::{Color, ColorMap, ColorStore, DistanceMap};
use crate::graph::navigate::WeightedForward;
use crate::graph::visitor::DijkstraVisitor;

/// Distances from `source` to every vertex reachable from it.
///
/// ```rust
/// use graphwalk::graph::basic::DiGraph;
/// use graphwalk::graph::traversal::dijkstra;
/// use graphwalk::graph::visitor::NoOp;
///
/// let g: DiGraph<&str> = DiGraph::from_weighted_edges([("a", "b", 2.0), ("b", "c", 0.5)]);
/// let dist = dijkstra(&g, "a", &mut NoOp);
/// assert_eq!(dist.distance(&"c"), 2.5);
/// assert!(dist.distance(&"z").is_infinite());
/// ```
pub fn dijkstra<G, Vis>(
    graph: &G,
    source: G::Vertex,
    visitor: &mut Vis,
) -> DistanceMap<G::Vertex, G::Weight>
where
    G: WeightedForward,
    Vis: DijkstraVisitor<G::Vertex> + ?Sized,
{
    match visit(graph, source, None, visitor, accept_weight) {
        Ok(distances) => distances,
        Err(never) => match never {},
    }
}

/// Distance from `source` to `target`, stopping once `target` is examined.
///
/// Returns `+∞` if `target` cannot be reached. Everything the visitor records
/// up to and including the examination of `target` is final.
pub fn dijkstra_to<G, Vis>(
    graph: &G,
    source: G::Vertex,
    target: &G::Vertex,
    visitor: &mut Vis,
) -> G::Weight
where
    G: WeightedForward,
    Vis: DijkstraVisitor<G::Vertex> + ?Sized,
{
    match visit(graph, source, Some(target), visitor, accept_weight) {
        Ok(distances) => distances.distance(target),
        Err(never) => match never {},
    }
}

/// Checked variant of [`dijkstra`].
///
/// # Errors
/// Returns [`GraphError::InvalidWeight`] for the first negative or NaN
/// weight met. Events emitted before that point have already reached the
/// visitor.
pub fn try_dijkstra<G, Vis>(
    graph: &G,
    source: G::Vertex,
    visitor: &mut Vis,
) -> Result<DistanceMap<G::Vertex, G::Weight>>
where
    G: WeightedForward,
    G::Vertex: Debug,
    Vis: DijkstraVisitor<G::Vertex> + ?Sized,
{
    visit(graph, source, None, visitor, validate_weight)
}

/// Checked variant of [`dijkstra_to`].
///
/// # Errors
/// Returns [`GraphError::InvalidWeight`] for the first negative or NaN
/// weight met before `target` is examined.
pub fn try_dijkstra_to<G, Vis>(
    graph: &G,
    source: G::Vertex,
    target: &G::Vertex,
    visitor: &mut Vis,
) -> Result<G::Weight>
where
    G: WeightedForward,
    G::Vertex: Debug,
    Vis: DijkstraVisitor<G::Vertex> + ?Sized,
{
    visit(graph, source, Some(target), visitor, validate_weight).map(|d| d.distance(target))
}

#[inline]
fn accept_weight<V, W>(
    _from: &V,
    _to: &V,
    _weight: W,
) -> core::result::Result<(), core::convert::Infallible> {
    Ok(())
}

fn validate_weight<V: Debug, W: Float>(from: &V, to: &V, weight: W) -> Result<()> {
    if weight.is_nan() || weight < W::zero() {
        return Err(GraphError::InvalidWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight: weight.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(targeted = target.is_some())))]
fn visit<G, Vis, E, F>(
    graph: &G,
    source: G::Vertex,
    target: Option<&G::Vertex>,
    visitor: &mut Vis,
    mut check: F,
) -> core::result::Result<DistanceMap<G::Vertex, G::Weight>, E>
where
    G: WeightedForward,
    Vis: DijkstraVisitor<G::Vertex> + ?Sized,
    F: FnMut(&G::Vertex, &G::Vertex, G::Weight) -> core::result::Result<(), E>,
{
    let zero = G::Weight::zero();
    let mut colors = ColorMap::new();
    let mut distances = DistanceMap::new();
    let mut queue = IndexedMinHeap::new();

    #[cfg(feature = "tracing")]
    let (mut examined, mut relaxed) = (0usize, 0usize);

    visitor.discover_vertex(&source);
    colors.set_color(&source, Color::Frontier);
    distances.set(source.clone(), zero);
    queue.push(source, zero);

    while let Some((vertex, base)) = queue.pop() {
        visitor.examine_vertex(&vertex);
        #[cfg(feature = "tracing")]
        {
            examined += 1;
        }
        if target == Some(&vertex) {
            #[cfg(feature = "tracing")]
            tracing::debug!(examined, relaxed, "dijkstra reached target");
            return Ok(distances);
        }

        for next in graph.next_vertices(&vertex) {
            visitor.examine_edge(&vertex, &next);
            let weight = graph.weight(&vertex, &next);
            check(&vertex, &next, weight)?;

            // Finished vertices and the one being examined hold final distances.
            let color = colors.color(&next);
            let settled = color == Color::Done || next == vertex;
            let tentative = base + weight;
            if !settled && tentative < distances.distance(&next) {
                visitor.edge_relaxed(&vertex, &next);
                #[cfg(feature = "tracing")]
                {
                    relaxed += 1;
                }
                distances.set(next.clone(), tentative);
                if color == Color::Unvisited {
                    visitor.discover_vertex(&next);
                    colors.set_color(&next, Color::Frontier);
                    queue.push(next, tentative);
                } else {
                    queue.decrease_key(&next, tentative);
                }
            } else {
                visitor.edge_not_relaxed(&vertex, &next);
            }
        }

        visitor.finish_vertex(&vertex);
        colors.set_color(&vertex, Color::Done);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(examined, relaxed, reached = distances.len(), "dijkstra complete");
    Ok(distances)
}
