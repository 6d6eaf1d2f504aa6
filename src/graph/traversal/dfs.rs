//! Depth-first visit.
//!
//! When possible the visit moves on to a successor of the current vertex;
//! otherwise it backtracks to the last vertex with unexamined edges. Each
//! edge `v -> n` is classified by the color of `n` at the time it is seen:
//! - unvisited: `tree_edge`, then the visit descends into `n`
//! - frontier (on the stack): `back_edge`
//! - done: `forward_cross_edge`
//!
//! Two strategies produce identical event sequences:
//! - [`DfsStrategy::Recursive`]: one native call frame per tree edge
//! - [`DfsStrategy::ExplicitStack`]: a heap-allocated stack of successor
//!   iterators, safe for paths of any length

use serde::{Deserialize, Serialize};

use crate::graph::access::{Color, ColorMap, ColorStore};
use crate::graph::navigate::{Forward, VertexListForward};
use crate::graph::visitor::DfsVisitor;

/// How the depth-first engine keeps track of the current path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DfsStrategy {
    /// Native recursion. Recursion depth equals the longest simple path
    /// explored, so only use this on shallow graphs.
    Recursive,
    /// A heap-allocated stack with the same event order as recursion.
    #[default]
    ExplicitStack,
}

/// Depth-first visit building one tree rooted at `source`.
pub fn depth_first_visit_from<G, Vis>(graph: &G, source: G::Vertex, visitor: &mut Vis)
where
    G: Forward,
    Vis: DfsVisitor<G::Vertex> + ?Sized,
{
    let mut colors = ColorMap::new();
    depth_first_visit_with(graph, source, visitor, &mut colors, DfsStrategy::default());
}

/// Depth-first visit of a whole graph, building a forest.
///
/// Every vertex first receives `initialize_vertex`, in listing order. The
/// visit then restarts from each still-unvisited vertex, again in listing
/// order.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use graphwalk::graph::traversal::depth_first_visit;
/// use graphwalk::graph::visitor::FinishOrder;
///
/// let mut dag = BTreeMap::new();
/// dag.insert("shirt", vec!["tie"]);
/// dag.insert("tie", vec!["jacket"]);
/// dag.insert("jacket", vec![]);
///
/// let mut order = FinishOrder::new();
/// depth_first_visit(&dag, &mut order);
/// assert_eq!(order.topological(), vec!["shirt", "tie", "jacket"]);
/// ```
pub fn depth_first_visit<G, Vis>(graph: &G, visitor: &mut Vis)
where
    G: VertexListForward,
    Vis: DfsVisitor<G::Vertex> + ?Sized,
{
    let mut colors = ColorMap::new();
    depth_first_visit_all_with(graph, visitor, &mut colors, DfsStrategy::default());
}

/// Single-source depth-first visit with a caller-supplied color store and
/// strategy. Vertices already marked [`Color::Done`] are never entered.
///
/// If `source` is not [`Color::Unvisited`] in `colors`, nothing happens: no
/// event is emitted and no color changes.
pub fn depth_first_visit_with<G, Vis, C>(
    graph: &G,
    source: G::Vertex,
    visitor: &mut Vis,
    colors: &mut C,
    strategy: DfsStrategy,
) where
    G: Forward,
    Vis: DfsVisitor<G::Vertex> + ?Sized,
    C: ColorStore<G::Vertex> + ?Sized,
{
    if colors.color(&source) != Color::Unvisited {
        return;
    }
    match strategy {
        DfsStrategy::Recursive => visit_recursive(graph, source, visitor, colors),
        DfsStrategy::ExplicitStack => visit_iterative(graph, source, visitor, colors),
    }
}

/// Whole-graph depth-first visit with a caller-supplied color store and
/// strategy.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(strategy = ?strategy)))]
pub fn depth_first_visit_all_with<G, Vis, C>(
    graph: &G,
    visitor: &mut Vis,
    colors: &mut C,
    strategy: DfsStrategy,
) where
    G: VertexListForward,
    Vis: DfsVisitor<G::Vertex> + ?Sized,
    C: ColorStore<G::Vertex> + ?Sized,
{
    for vertex in graph.vertices() {
        visitor.initialize_vertex(&vertex);
    }

    #[cfg(feature = "tracing")]
    let mut trees = 0usize;

    for vertex in graph.vertices() {
        if colors.color(&vertex) == Color::Unvisited {
            #[cfg(feature = "tracing")]
            {
                trees += 1;
            }
            depth_first_visit_with(graph, vertex, visitor, colors, strategy);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(trees, "depth-first forest complete");
}

fn visit_recursive<G, Vis, C>(graph: &G, vertex: G::Vertex, visitor: &mut Vis, colors: &mut C)
where
    G: Forward,
    Vis: DfsVisitor<G::Vertex> + ?Sized,
    C: ColorStore<G::Vertex> + ?Sized,
{
    visitor.discover_vertex(&vertex);
    colors.set_color(&vertex, Color::Frontier);

    for next in graph.next_vertices(&vertex) {
        visitor.examine_edge(&vertex, &next);
        match colors.color(&next) {
            Color::Unvisited => {
                visitor.tree_edge(&vertex, &next);
                visit_recursive(graph, next, visitor, colors);
            }
            Color::Frontier => visitor.back_edge(&vertex, &next),
            Color::Done => visitor.forward_cross_edge(&vertex, &next),
        }
    }

    visitor.finish_vertex(&vertex);
    colors.set_color(&vertex, Color::Done);
}

fn visit_iterative<G, Vis, C>(graph: &G, source: G::Vertex, visitor: &mut Vis, colors: &mut C)
where
    G: Forward,
    Vis: DfsVisitor<G::Vertex> + ?Sized,
    C: ColorStore<G::Vertex> + ?Sized,
{
    visitor.discover_vertex(&source);
    colors.set_color(&source, Color::Frontier);
    let successors = graph.next_vertices(&source);
    let mut stack = vec![(source, successors)];

    while let Some((vertex, successors)) = stack.last_mut() {
        let Some(next) = successors.next() else {
            if let Some((done, _)) = stack.pop() {
                visitor.finish_vertex(&done);
                colors.set_color(&done, Color::Done);
            }
            continue;
        };

        visitor.examine_edge(vertex, &next);
        match colors.color(&next) {
            Color::Unvisited => {
                visitor.tree_edge(vertex, &next);
                visitor.discover_vertex(&next);
                colors.set_color(&next, Color::Frontier);
                let successors = graph.next_vertices(&next);
                stack.push((next, successors));
            }
            Color::Frontier => visitor.back_edge(vertex, &next),
            Color::Done => visitor.forward_cross_edge(vertex, &next),
        }
    }
}
