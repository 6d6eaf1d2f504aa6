//! Event visitors driven by the traversal engines.
//!
//! Each engine calls its visitor synchronously at fixed points of the
//! algorithm. Every trait method has an empty default body, so a visitor
//! implements only the events it cares about:
//!
//! ```rust
//! use graphwalk::graph::visitor::BfsVisitor;
//!
//! struct CountTreeEdges(usize);
//!
//! impl<V> BfsVisitor<V> for CountTreeEdges {
//!     fn tree_edge(&mut self, _from: &V, _to: &V) {
//!         self.0 += 1;
//!     }
//! }
//! ```
//!
//! Visitors compose without wrapper types:
//! - `&mut T` forwards to `T`, so a visitor can be lent to an engine and
//!   inspected afterwards
//! - a pair `(A, B)` forwards every event to `A`, then to `B`
//! - [`NoOp`] ignores everything

mod recorders;

pub use recorders::{CycleDetector, Event, EventLog, FinishOrder, HopDistance, Predecessors};

/// Events of a breadth-first visit.
pub trait BfsVisitor<V> {
    /// A vertex is found for the first time and enqueued.
    fn discover_vertex(&mut self, _vertex: &V) {}

    /// A vertex is dequeued; its outgoing edges are processed next.
    fn examine_vertex(&mut self, _vertex: &V) {}

    /// The edge `from -> to` is about to be classified.
    fn examine_edge(&mut self, _from: &V, _to: &V) {}

    /// `to` was unvisited: the edge joins the breadth-first tree.
    fn tree_edge(&mut self, _from: &V, _to: &V) {}

    /// `to` was already discovered.
    fn non_tree_edge(&mut self, _from: &V, _to: &V) {}

    /// `to` is discovered but still queued. Follows [`non_tree_edge`](Self::non_tree_edge).
    fn gray_target(&mut self, _from: &V, _to: &V) {}

    /// `to` is already finished. Follows [`non_tree_edge`](Self::non_tree_edge).
    fn black_target(&mut self, _from: &V, _to: &V) {}

    /// All outgoing edges of `vertex` have been processed.
    fn finish_vertex(&mut self, _vertex: &V) {}
}

/// Events of a depth-first visit.
pub trait DfsVisitor<V> {
    /// Called for every listed vertex before a whole-graph visit starts.
    /// Never called by single-source visits.
    fn initialize_vertex(&mut self, _vertex: &V) {}

    /// A vertex is found for the first time and pushed on the stack.
    fn discover_vertex(&mut self, _vertex: &V) {}

    /// The edge `from -> to` is about to be classified.
    fn examine_edge(&mut self, _from: &V, _to: &V) {}

    /// `to` was unvisited: the edge joins the depth-first tree.
    fn tree_edge(&mut self, _from: &V, _to: &V) {}

    /// `to` is an unfinished ancestor, so the edge closes a cycle.
    ///
    /// On an undirected graph every tree edge is also seen as a back edge
    /// from the child's side.
    fn back_edge(&mut self, _from: &V, _to: &V) {}

    /// `to` is already finished. Never happens on an undirected graph.
    fn forward_cross_edge(&mut self, _from: &V, _to: &V) {}

    /// All outgoing edges of `vertex` are processed and every vertex reached
    /// through them is finished.
    fn finish_vertex(&mut self, _vertex: &V) {}
}

/// Events of a Dijkstra visit.
///
/// Shortest-path trees and paths are derived here, typically by recording a
/// predecessor on every [`edge_relaxed`](Self::edge_relaxed).
pub trait DijkstraVisitor<V> {
    /// A vertex is reached for the first time and queued.
    fn discover_vertex(&mut self, _vertex: &V) {}

    /// The closest queued vertex is popped; its distance is final.
    fn examine_vertex(&mut self, _vertex: &V) {}

    /// The edge `from -> to` is about to be relaxed.
    fn examine_edge(&mut self, _from: &V, _to: &V) {}

    /// The edge gave a strictly shorter path to `to`.
    fn edge_relaxed(&mut self, _from: &V, _to: &V) {}

    /// The edge gave no improvement.
    fn edge_not_relaxed(&mut self, _from: &V, _to: &V) {}

    /// All outgoing edges of `vertex` have been relaxed.
    fn finish_vertex(&mut self, _vertex: &V) {}
}

/// A visitor that ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOp;

impl<V> BfsVisitor<V> for NoOp {}
impl<V> DfsVisitor<V> for NoOp {}
impl<V> DijkstraVisitor<V> for NoOp {}

// Generates the `&mut T` and `(A, B)` forwarding impls for a visitor trait.
macro_rules! forward_events {
    ($visitor:ident { $($event:ident($($arg:ident),+);)+ }) => {
        impl<V, T: $visitor<V> + ?Sized> $visitor<V> for &mut T {
            $(
                #[inline]
                fn $event(&mut self, $($arg: &V),+) {
                    (**self).$event($($arg),+);
                }
            )+
        }

        impl<V, A: $visitor<V>, B: $visitor<V>> $visitor<V> for (A, B) {
            $(
                #[inline]
                fn $event(&mut self, $($arg: &V),+) {
                    self.0.$event($($arg),+);
                    self.1.$event($($arg),+);
                }
            )+
        }
    };
}

forward_events!(BfsVisitor {
    discover_vertex(vertex);
    examine_vertex(vertex);
    examine_edge(from, to);
    tree_edge(from, to);
    non_tree_edge(from, to);
    gray_target(from, to);
    black_target(from, to);
    finish_vertex(vertex);
});

forward_events!(DfsVisitor {
    initialize_vertex(vertex);
    discover_vertex(vertex);
    examine_edge(from, to);
    tree_edge(from, to);
    back_edge(from, to);
    forward_cross_edge(from, to);
    finish_vertex(vertex);
});

forward_events!(DijkstraVisitor {
    discover_vertex(vertex);
    examine_vertex(vertex);
    examine_edge(from, to);
    edge_relaxed(from, to);
    edge_not_relaxed(from, to);
    finish_vertex(vertex);
});

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Discovered(Vec<u32>);

    impl BfsVisitor<u32> for Discovered {
        fn discover_vertex(&mut self, vertex: &u32) {
            self.0.push(*vertex);
        }
    }

    #[test]
    fn test_pair_forwards_to_both_in_order() {
        let mut log: EventLog<u32> = EventLog::new();
        let mut seen = Discovered::default();
        {
            let mut pair = (&mut log, &mut seen);
            BfsVisitor::discover_vertex(&mut pair, &1);
            BfsVisitor::tree_edge(&mut pair, &1, &2);
        }
        assert_eq!(seen.0, vec![1]);
        assert_eq!(
            log.events(),
            &[Event::DiscoverVertex(1), Event::TreeEdge(1, 2)]
        );
    }

    #[test]
    fn test_noop_accepts_every_event() {
        let mut vis = NoOp;
        DfsVisitor::initialize_vertex(&mut vis, &"a");
        DfsVisitor::back_edge(&mut vis, &"a", &"b");
        DijkstraVisitor::edge_relaxed(&mut vis, &"a", &"b");
        BfsVisitor::black_target(&mut vis, &"a", &"b");
    }
}
