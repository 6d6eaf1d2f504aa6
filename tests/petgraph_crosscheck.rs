use std::collections::BTreeMap;

use graphwalk::graph::basic::DiGraph;
use graphwalk::graph::visitor::NoOp;
use petgraph::graph::{DiGraph as PetGraph, NodeIndex};
use proptest::prelude::*;

/// Edges keyed by endpoints so both graphs hold one weight per pair.
fn arb_edges() -> impl Strategy<Value = (usize, BTreeMap<(usize, usize), u8>)> {
    (1usize..40).prop_flat_map(|n| {
        let edges = proptest::collection::btree_map((0..n, 0..n), 0u8..20, 0..n * 4);
        (Just(n), edges)
    })
}

proptest! {
    #[test]
    fn test_distances_match_petgraph((n, edges) in arb_edges(), source in 0usize..40) {
        let source = source % n;

        let mut ours: DiGraph<usize> = DiGraph::new();
        let mut theirs = PetGraph::<(), f64>::new();
        let nodes: Vec<NodeIndex> = (0..n).map(|_| theirs.add_node(())).collect();
        for v in 0..n {
            ours.add_vertex(v);
        }
        for (&(u, v), &w) in &edges {
            ours.add_weighted_edge(u, v, f64::from(w));
            theirs.add_edge(nodes[u], nodes[v], f64::from(w));
        }

        let expected = petgraph::algo::dijkstra(&theirs, nodes[source], None, |e| *e.weight());
        let actual = graphwalk::dijkstra(&ours, source, &mut NoOp);

        prop_assert_eq!(actual.len(), expected.len());
        for (node, d) in &expected {
            prop_assert_eq!(actual.get(&node.index()), Some(*d), "vertex {}", node.index());
        }
    }
}

#[test]
fn scenario_matches_petgraph() {
    let edges = [(0, 1, 0.1), (1, 3, 0.2), (3, 4, 0.1), (0, 2, 0.6), (2, 4, 0.3)];

    let ours: DiGraph<usize> = DiGraph::from_weighted_edges(edges);
    let theirs = PetGraph::<(), f64, u32>::from_edges(edges.map(|(u, v, w)| (u as u32, v as u32, w)));

    let expected = petgraph::algo::dijkstra(&theirs, NodeIndex::new(0), None, |e| *e.weight());
    let actual = graphwalk::dijkstra(&ours, 0, &mut NoOp);
    for v in 0..5 {
        let d = expected[&NodeIndex::new(v)];
        assert!((actual.distance(&v) - d).abs() < 1e-12, "vertex {v}");
    }
}
