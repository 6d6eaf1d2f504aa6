//! Breadth-first visit.
//!
//! Vertices are examined in non-decreasing hop count from the source, in the
//! order the graph enumerates successors. For every dequeued vertex `v` the
//! visitor sees:
//!
//! 1. `examine_vertex(v)`
//! 2. per successor `n`: `examine_edge(v, n)`, then either
//!    `tree_edge(v, n)` + `discover_vertex(n)` (unvisited `n`), or
//!    `non_tree_edge(v, n)` followed by `gray_target` / `black_target`
//! 3. `finish_vertex(v)`

use std::collections::VecDeque;

use crate::graph::access::{Color, ColorMap, ColorStore};
use crate::graph::navigate::Forward;
use crate::graph::visitor::BfsVisitor;

/// Visits every vertex reachable from `source`, closest first.
///
/// Uses a fresh color map, so the whole reachable region is visited.
///
/// ```rust
/// use std::collections::HashMap;
/// use graphwalk::graph::traversal::breadth_first_visit;
/// use graphwalk::graph::visitor::HopDistance;
///
/// let mut g = HashMap::new();
/// g.insert("A", vec!["B", "C"]);
/// g.insert("B", vec!["D"]);
///
/// let mut hops = HopDistance::new();
/// breadth_first_visit(&g, "A", &mut hops);
/// assert_eq!(hops.get(&"D"), Some(2));
/// ```
pub fn breadth_first_visit<G, Vis>(graph: &G, source: G::Vertex, visitor: &mut Vis)
where
    G: Forward,
    Vis: BfsVisitor<G::Vertex> + ?Sized,
{
    let mut colors = ColorMap::new();
    visit(graph, source, None, visitor, &mut colors);
}

/// Like [`breadth_first_visit`], but with a caller-supplied color store.
///
/// Vertices already marked [`Color::Done`] are treated as visited and never
/// discovered, which restricts the visit to part of a larger graph. Reusing
/// one store across several calls visits each vertex at most once overall.
///
/// If `source` is not [`Color::Unvisited`] in `colors`, nothing happens: no
/// event is emitted and no color changes.
pub fn breadth_first_visit_with<G, Vis, C>(
    graph: &G,
    source: G::Vertex,
    visitor: &mut Vis,
    colors: &mut C,
) where
    G: Forward,
    Vis: BfsVisitor<G::Vertex> + ?Sized,
    C: ColorStore<G::Vertex> + ?Sized,
{
    if colors.color(&source) != Color::Unvisited {
        return;
    }
    visit(graph, source, None, visitor, colors);
}

/// Breadth-first visit that stops as soon as `target` is discovered.
///
/// The target's `tree_edge` and `discover_vertex` events are still emitted;
/// the vertex being examined at that point is not finished. Returns `true` if
/// the target was found.
///
/// Only newly discovered vertices are compared with `target`. When `source`
/// itself is the target, check that before calling.
pub fn breadth_first_visit_to<G, Vis>(
    graph: &G,
    source: G::Vertex,
    target: &G::Vertex,
    visitor: &mut Vis,
) -> bool
where
    G: Forward,
    Vis: BfsVisitor<G::Vertex> + ?Sized,
{
    let mut colors = ColorMap::new();
    visit(graph, source, Some(target), visitor, &mut colors)
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
fn visit<G, Vis, C>(
    graph: &G,
    source: G::Vertex,
    target: Option<&G::Vertex>,
    visitor: &mut Vis,
    colors: &mut C,
) -> bool
where
    G: Forward,
    Vis: BfsVisitor<G::Vertex> + ?Sized,
    C: ColorStore<G::Vertex> + ?Sized,
{
    #[cfg(feature = "tracing")]
    let mut examined = 0usize;

    let mut queue = VecDeque::new();
    visitor.discover_vertex(&source);
    colors.set_color(&source, Color::Frontier);
    queue.push_back(source);

    while let Some(vertex) = queue.pop_front() {
        visitor.examine_vertex(&vertex);
        #[cfg(feature = "tracing")]
        {
            examined += 1;
        }

        for next in graph.next_vertices(&vertex) {
            visitor.examine_edge(&vertex, &next);
            match colors.color(&next) {
                Color::Unvisited => {
                    visitor.tree_edge(&vertex, &next);
                    visitor.discover_vertex(&next);
                    colors.set_color(&next, Color::Frontier);
                    if target == Some(&next) {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(examined, "breadth-first visit reached target");
                        return true;
                    }
                    queue.push_back(next);
                }
                Color::Frontier => {
                    visitor.non_tree_edge(&vertex, &next);
                    visitor.gray_target(&vertex, &next);
                }
                Color::Done => {
                    visitor.non_tree_edge(&vertex, &next);
                    visitor.black_target(&vertex, &next);
                }
            }
        }

        visitor.finish_vertex(&vertex);
        colors.set_color(&vertex, Color::Done);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(examined, "breadth-first visit complete");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::access::DenseColorMap;
    use crate::graph::visitor::{Event, EventLog, HopDistance};
    use std::collections::HashMap;

    fn digraph() -> HashMap<&'static str, Vec<&'static str>> {
        // A -> B -> D
        //   \-> C -- \-> E
        let mut g = HashMap::new();
        g.insert("A", vec!["B", "C"]);
        g.insert("B", vec!["D"]);
        g.insert("C", vec!["E"]);
        g.insert("D", vec!["E"]);
        g
    }

    #[test]
    fn test_hop_distances() {
        let mut hops = HopDistance::new();
        breadth_first_visit(&digraph(), "A", &mut hops);
        for (v, d) in [("A", 0), ("B", 1), ("C", 1), ("D", 2), ("E", 2)] {
            assert_eq!(hops.get(&v), Some(d), "hop distance of {v}");
        }
    }

    #[test]
    fn test_event_sequence() {
        let mut g = HashMap::new();
        g.insert(0, vec![1, 2]);
        g.insert(1, vec![2, 0]);
        g.insert(2, vec![]);

        let mut log = EventLog::new();
        breadth_first_visit(&g, 0, &mut log);

        use Event::*;
        assert_eq!(
            log.into_events(),
            vec![
                DiscoverVertex(0),
                ExamineVertex(0),
                ExamineEdge(0, 1),
                TreeEdge(0, 1),
                DiscoverVertex(1),
                ExamineEdge(0, 2),
                TreeEdge(0, 2),
                DiscoverVertex(2),
                FinishVertex(0),
                ExamineVertex(1),
                ExamineEdge(1, 2),
                NonTreeEdge(1, 2),
                GrayTarget(1, 2),
                ExamineEdge(1, 0),
                NonTreeEdge(1, 0),
                BlackTarget(1, 0),
                FinishVertex(1),
                ExamineVertex(2),
                FinishVertex(2),
            ]
        );
    }

    #[test]
    fn test_singleton_source() {
        let g: HashMap<u8, Vec<u8>> = HashMap::new();
        let mut log = EventLog::new();
        breadth_first_visit(&g, 7, &mut log);
        assert_eq!(
            log.events(),
            &[
                Event::DiscoverVertex(7),
                Event::ExamineVertex(7),
                Event::FinishVertex(7)
            ]
        );
    }

    #[test]
    fn test_done_vertices_are_excluded() {
        let g: Vec<Vec<usize>> = vec![vec![1, 2], vec![3], vec![3], vec![]];
        let mut colors = DenseColorMap::new(4);
        colors.exclude(&1);

        let mut hops = HopDistance::new();
        breadth_first_visit_with(&g, 0, &mut hops, &mut colors);
        assert_eq!(hops.get(&1), None);
        assert_eq!(hops.get(&3), Some(2));
        assert!(colors.as_slice().iter().all(|c| *c == Color::Done));
    }

    #[test]
    fn test_stops_at_target() {
        let mut log = EventLog::new();
        let found = breadth_first_visit_to(&digraph(), "A", &"C", &mut log);
        assert!(found);

        let events = log.into_events();
        assert_eq!(events.last(), Some(&Event::DiscoverVertex("C")));
        assert!(!events.contains(&Event::FinishVertex("A")));
        assert!(!events.contains(&Event::ExamineVertex("B")));
    }

    #[test]
    fn test_unreachable_target() {
        let mut hops = HopDistance::new();
        assert!(!breadth_first_visit_to(&digraph(), "B", &"A", &mut hops));
        assert_eq!(hops.get(&"E"), Some(2));
    }

    #[test]
    fn test_excluded_source_emits_nothing() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![]];
        for start in [Color::Frontier, Color::Done] {
            let mut colors = DenseColorMap::new(2);
            colors.set_color(&0, start);

            let mut log = EventLog::new();
            breadth_first_visit_with(&g, 0, &mut log, &mut colors);
            assert!(log.events().is_empty(), "{start:?}: {:?}", log.events());
            assert_eq!(colors.as_slice(), &[start, Color::Unvisited]);
        }
    }
}
