//! Common results derived from the traversal engines.
//!
//! Every function here is a thin composition of one engine and the
//! ready-made recorders in [`visitor`](crate::graph::visitor); none of them
//! touches engine internals.

use core::fmt::Debug;
use std::collections::HashMap;

use num_traits::Float;

use crate::error::{GraphError, Result};
use crate::graph::navigate::{Forward, VertexListForward, WeightedForward};
use crate::graph::traversal::{breadth_first_visit, depth_first_visit, dijkstra_to};
use crate::graph::visitor::{CycleDetector, FinishOrder, HopDistance, Predecessors};

/// Orders all vertices so that every edge `u -> v` has `u` before `v`.
///
/// # Errors
/// Returns [`GraphError::Cycle`] naming the target of the first back edge
/// when the graph is not acyclic.
///
/// ```rust
/// use graphwalk::graph::algorithms::topological_order;
/// use graphwalk::graph::basic::DiGraph;
///
/// let g: DiGraph<&str> = DiGraph::from_edges([("socks", "shoes"), ("pants", "shoes")]);
/// let order = topological_order(&g).unwrap();
/// assert_eq!(order.last(), Some(&"shoes"));
/// ```
pub fn topological_order<G>(graph: &G) -> Result<Vec<G::Vertex>>
where
    G: VertexListForward,
    G::Vertex: Debug,
{
    let mut visitor = (FinishOrder::new(), CycleDetector::new());
    depth_first_visit(graph, &mut visitor);

    let (order, cycles) = visitor;
    if let Some((_, to)) = cycles.first_back_edge() {
        return Err(GraphError::Cycle {
            vertex: format!("{to:?}"),
        });
    }
    Ok(order.into_topological())
}

/// Shortest path from `source` to `target` and its length.
///
/// Returns `None` when `target` cannot be reached. When `source == target`
/// the result is `(0, [source])`. Weights are not validated; see
/// [`try_dijkstra_to`](crate::graph::traversal::try_dijkstra_to).
pub fn shortest_path<G>(
    graph: &G,
    source: G::Vertex,
    target: &G::Vertex,
) -> Option<(G::Weight, Vec<G::Vertex>)>
where
    G: WeightedForward,
{
    let mut preds = Predecessors::new();
    let distance = dijkstra_to(graph, source, target, &mut preds);
    if distance.is_infinite() {
        return None;
    }
    preds.path_to(target).map(|path| (distance, path))
}

/// Hop count from `source` to every vertex it reaches.
pub fn hop_distances<G>(graph: &G, source: G::Vertex) -> HashMap<G::Vertex, usize>
where
    G: Forward,
{
    let mut hops = HopDistance::new();
    breadth_first_visit(graph, source, &mut hops);
    hops.into_inner()
}
