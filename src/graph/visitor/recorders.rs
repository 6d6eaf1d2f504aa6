//! Ready-made visitors that derive results from traversal events.

use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{BfsVisitor, DfsVisitor, DijkstraVisitor};

/// Hop count from the source of a breadth-first visit.
///
/// The source is at zero and every tree edge target is one hop further than
/// its parent. Vertices never discovered have no entry.
#[derive(Debug, Clone)]
pub struct HopDistance<V> {
    hops: HashMap<V, usize>,
}

impl<V: Eq + Hash> PartialEq for HopDistance<V> {
    fn eq(&self, other: &Self) -> bool {
        self.hops == other.hops
    }
}

impl<V: Eq + Hash> Eq for HopDistance<V> {}

impl<V: Eq + Hash> HopDistance<V> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            hops: HashMap::new(),
        }
    }

    /// Returns the hop count of `vertex` if it was discovered.
    pub fn get(&self, vertex: &V) -> Option<usize> {
        self.hops.get(vertex).copied()
    }

    /// Consumes the recorder and returns the hop counts.
    pub fn into_inner(self) -> HashMap<V, usize> {
        self.hops
    }
}

impl<V: Eq + Hash> Default for HopDistance<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> BfsVisitor<V> for HopDistance<V> {
    // Tree edges fire before the target's discovery, so only sources fall
    // through to the zero default here.
    fn discover_vertex(&mut self, vertex: &V) {
        if !self.hops.contains_key(vertex) {
            self.hops.insert(vertex.clone(), 0);
        }
    }

    fn tree_edge(&mut self, from: &V, to: &V) {
        let parent = self.hops.get(from).copied().unwrap_or(0);
        self.hops.insert(to.clone(), parent + 1);
    }
}

/// Predecessor of every reached vertex in the traversal tree.
///
/// Records tree edges (BFS, DFS) or relaxed edges (Dijkstra, where a later
/// relaxation overwrites an earlier one). Vertices discovered without a
/// predecessor are roots of the tree.
#[derive(Debug, Clone)]
pub struct Predecessors<V> {
    parent: HashMap<V, V>,
    roots: HashSet<V>,
}

impl<V: Eq + Hash> PartialEq for Predecessors<V> {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.roots == other.roots
    }
}

impl<V: Eq + Hash> Eq for Predecessors<V> {}

impl<V: Clone + Eq + Hash> Predecessors<V> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            roots: HashSet::new(),
        }
    }

    /// Returns the recorded predecessor of `vertex`.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.parent.get(vertex)
    }

    /// Returns `true` if `vertex` was discovered without a predecessor.
    pub fn is_root(&self, vertex: &V) -> bool {
        self.roots.contains(vertex)
    }

    /// Walks predecessors back from `target` and returns the path from its
    /// root to `target`, both included.
    ///
    /// Returns `None` if `target` was never reached.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        let mut path = vec![target.clone()];
        let mut current = target;
        while !self.roots.contains(current) {
            // A predecessor chain longer than the table means a broken tree.
            if path.len() > self.parent.len() + 1 {
                return None;
            }
            current = self.parent.get(current)?;
            path.push(current.clone());
        }
        path.reverse();
        Some(path)
    }

    fn record(&mut self, from: &V, to: &V) {
        self.parent.insert(to.clone(), from.clone());
    }

    fn discover(&mut self, vertex: &V) {
        if !self.parent.contains_key(vertex) {
            self.roots.insert(vertex.clone());
        }
    }
}

impl<V: Clone + Eq + Hash> Default for Predecessors<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash> BfsVisitor<V> for Predecessors<V> {
    fn discover_vertex(&mut self, vertex: &V) {
        self.discover(vertex);
    }

    fn tree_edge(&mut self, from: &V, to: &V) {
        self.record(from, to);
    }
}

impl<V: Clone + Eq + Hash> DfsVisitor<V> for Predecessors<V> {
    fn discover_vertex(&mut self, vertex: &V) {
        self.discover(vertex);
    }

    fn tree_edge(&mut self, from: &V, to: &V) {
        self.record(from, to);
    }
}

impl<V: Clone + Eq + Hash> DijkstraVisitor<V> for Predecessors<V> {
    fn discover_vertex(&mut self, vertex: &V) {
        self.discover(vertex);
    }

    fn edge_relaxed(&mut self, from: &V, to: &V) {
        self.record(from, to);
    }
}

/// Order in which a depth-first visit finishes vertices.
///
/// On a DAG the reversed finish order is a topological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishOrder<V> {
    order: Vec<V>,
}

impl<V: Clone> FinishOrder<V> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Vertices in the order they finished.
    pub fn as_slice(&self) -> &[V] {
        &self.order
    }

    /// Reverse finish order.
    pub fn topological(&self) -> Vec<V> {
        self.order.iter().rev().cloned().collect()
    }

    /// Consumes the recorder and returns the reverse finish order.
    pub fn into_topological(mut self) -> Vec<V> {
        self.order.reverse();
        self.order
    }
}

impl<V: Clone> Default for FinishOrder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> DfsVisitor<V> for FinishOrder<V> {
    fn finish_vertex(&mut self, vertex: &V) {
        self.order.push(vertex.clone());
    }
}

/// Flags the first back edge of a depth-first visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleDetector<V> {
    back_edge: Option<(V, V)>,
}

impl<V> CycleDetector<V> {
    /// Creates a detector that has seen no cycle.
    pub fn new() -> Self {
        Self { back_edge: None }
    }

    /// Returns `true` once a back edge was observed.
    pub fn has_cycle(&self) -> bool {
        self.back_edge.is_some()
    }

    /// The first back edge observed, as `(from, to)`.
    pub fn first_back_edge(&self) -> Option<(&V, &V)> {
        self.back_edge.as_ref().map(|(from, to)| (from, to))
    }
}

impl<V> Default for CycleDetector<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> DfsVisitor<V> for CycleDetector<V> {
    fn back_edge(&mut self, from: &V, to: &V) {
        if self.back_edge.is_none() {
            self.back_edge = Some((from.clone(), to.clone()));
        }
    }
}

/// A single traversal event, as recorded by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Event<V> {
    InitializeVertex(V),
    DiscoverVertex(V),
    ExamineVertex(V),
    ExamineEdge(V, V),
    TreeEdge(V, V),
    NonTreeEdge(V, V),
    GrayTarget(V, V),
    BlackTarget(V, V),
    BackEdge(V, V),
    ForwardCrossEdge(V, V),
    EdgeRelaxed(V, V),
    EdgeNotRelaxed(V, V),
    FinishVertex(V),
}

/// Records every event it receives, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog<V> {
    events: Vec<Event<V>>,
}

impl<V: Clone> EventLog<V> {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events received so far.
    pub fn events(&self) -> &[Event<V>] {
        &self.events
    }

    /// Consumes the log and returns its events.
    pub fn into_events(self) -> Vec<Event<V>> {
        self.events
    }

    /// Forgets every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn vertex(&mut self, event: fn(V) -> Event<V>, vertex: &V) {
        self.events.push(event(vertex.clone()));
    }

    fn edge(&mut self, event: fn(V, V) -> Event<V>, from: &V, to: &V) {
        self.events.push(event(from.clone(), to.clone()));
    }
}

impl<V: Clone> Default for EventLog<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> BfsVisitor<V> for EventLog<V> {
    fn discover_vertex(&mut self, vertex: &V) {
        self.vertex(Event::DiscoverVertex, vertex);
    }
    fn examine_vertex(&mut self, vertex: &V) {
        self.vertex(Event::ExamineVertex, vertex);
    }
    fn examine_edge(&mut self, from: &V, to: &V) {
        self.edge(Event::ExamineEdge, from, to);
    }
    fn tree_edge(&mut self, from: &V, to: &V) {
        self.edge(Event::TreeEdge, from, to);
    }
    fn non_tree_edge(&mut self, from: &V, to: &V) {
        self.edge(Event::NonTreeEdge, from, to);
    }
    fn gray_target(&mut self, from: &V, to: &V) {
        self.edge(Event::GrayTarget, from, to);
    }
    fn black_target(&mut self, from: &V, to: &V) {
        self.edge(Event::BlackTarget, from, to);
    }
    fn finish_vertex(&mut self, vertex: &V) {
        self.vertex(Event::FinishVertex, vertex);
    }
}

impl<V: Clone> DfsVisitor<V> for EventLog<V> {
    fn initialize_vertex(&mut self, vertex: &V) {
        self.vertex(Event::InitializeVertex, vertex);
    }
    fn discover_vertex(&mut self, vertex: &V) {
        self.vertex(Event::DiscoverVertex, vertex);
    }
    fn examine_edge(&mut self, from: &V, to: &V) {
        self.edge(Event::ExamineEdge, from, to);
    }
    fn tree_edge(&mut self, from: &V, to: &V) {
        self.edge(Event::TreeEdge, from, to);
    }
    fn back_edge(&mut self, from: &V, to: &V) {
        self.edge(Event::BackEdge, from, to);
    }
    fn forward_cross_edge(&mut self, from: &V, to: &V) {
        self.edge(Event::ForwardCrossEdge, from, to);
    }
    fn finish_vertex(&mut self, vertex: &V) {
        self.vertex(Event::FinishVertex, vertex);
    }
}

impl<V: Clone> DijkstraVisitor<V> for EventLog<V> {
    fn discover_vertex(&mut self, vertex: &V) {
        self.vertex(Event::DiscoverVertex, vertex);
    }
    fn examine_vertex(&mut self, vertex: &V) {
        self.vertex(Event::ExamineVertex, vertex);
    }
    fn examine_edge(&mut self, from: &V, to: &V) {
        self.edge(Event::ExamineEdge, from, to);
    }
    fn edge_relaxed(&mut self, from: &V, to: &V) {
        self.edge(Event::EdgeRelaxed, from, to);
    }
    fn edge_not_relaxed(&mut self, from: &V, to: &V) {
        self.edge(Event::EdgeNotRelaxed, from, to);
    }
    fn finish_vertex(&mut self, vertex: &V) {
        self.vertex(Event::FinishVertex, vertex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_distance_from_tree_edges() {
        let mut hops = HopDistance::new();
        BfsVisitor::discover_vertex(&mut hops, &"A");
        hops.tree_edge(&"A", &"B");
        BfsVisitor::discover_vertex(&mut hops, &"B");
        hops.tree_edge(&"B", &"C");
        assert_eq!(hops.get(&"A"), Some(0));
        assert_eq!(hops.get(&"B"), Some(1));
        assert_eq!(hops.get(&"C"), Some(2));
        assert_eq!(hops.get(&"Z"), None);
    }

    #[test]
    fn test_predecessors_walk_back_to_root() {
        let mut preds = Predecessors::new();
        DijkstraVisitor::discover_vertex(&mut preds, &'a');
        preds.edge_relaxed(&'a', &'c');
        preds.edge_relaxed(&'a', &'b');
        preds.edge_relaxed(&'b', &'c');
        assert!(preds.is_root(&'a'));
        assert_eq!(preds.predecessor(&'c'), Some(&'b'));
        assert_eq!(preds.path_to(&'c'), Some(vec!['a', 'b', 'c']));
        assert_eq!(preds.path_to(&'a'), Some(vec!['a']));
        assert_eq!(preds.path_to(&'z'), None);
    }

    #[test]
    fn test_finish_order_reverses() {
        let mut order = FinishOrder::new();
        for v in [3, 2, 1] {
            DfsVisitor::finish_vertex(&mut order, &v);
        }
        assert_eq!(order.as_slice(), &[3, 2, 1]);
        assert_eq!(order.topological(), vec![1, 2, 3]);
        assert_eq!(order.into_topological(), vec![1, 2, 3]);
    }

    #[test]
    fn test_cycle_detector_keeps_first_back_edge() {
        let mut detector = CycleDetector::new();
        assert!(!detector.has_cycle());
        detector.back_edge(&1, &0);
        detector.back_edge(&2, &0);
        assert!(detector.has_cycle());
        assert_eq!(detector.first_back_edge(), Some((&1, &0)));
    }

    #[test]
    fn test_event_log_serializes() {
        let mut log = EventLog::new();
        DfsVisitor::tree_edge(&mut log, &"A", &"B");
        let json = serde_json::to_string(log.events()).unwrap();
        assert_eq!(json, r#"[{"TreeEdge":["A","B"]}]"#);
    }

    #[test]
    fn test_recorders_compare_by_content() {
        let record = |edges: &[(u8, u8)]| {
            let mut hops = HopDistance::new();
            let mut preds = Predecessors::new();
            BfsVisitor::discover_vertex(&mut hops, &0);
            BfsVisitor::discover_vertex(&mut preds, &0);
            for (from, to) in edges {
                BfsVisitor::tree_edge(&mut hops, from, to);
                BfsVisitor::tree_edge(&mut preds, from, to);
            }
            (hops, preds)
        };

        assert_eq!(record(&[(0, 1), (0, 2)]), record(&[(0, 2), (0, 1)]));
        let (hops, preds) = record(&[(0, 1), (1, 2)]);
        let (other_hops, other_preds) = record(&[(0, 1), (0, 2)]);
        assert_ne!(hops, other_hops);
        assert_ne!(preds, other_preds);
    }
}
