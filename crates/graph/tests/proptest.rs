//! Property-based tests for classics-graph using proptest.

use classics_core::Error;
use classics_graph::{bellman_ford, minimum_spanning_tree, DisjointSet, Edge};
use proptest::prelude::*;

fn graph(max_vertices: usize, weights: std::ops::Range<i64>) -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (1..max_vertices).prop_flat_map(move |n| {
        let edge = (0..n, 0..n, weights.clone()).prop_map(Edge::from);
        (Just(n), prop::collection::vec(edge, 0..(n * 3)))
    })
}

proptest! {
    /// Test that with non-negative weights every edge is relaxed in the result.
    #[test]
    fn bellman_ford_distances_are_tight((n, edges) in graph(12, 0..50)) {
        let paths = bellman_ford(n, &edges, 0).unwrap();

        prop_assert_eq!(paths.distance(0), Some(0));
        for edge in &edges {
            if let Some(from) = paths.distance(edge.from) {
                let to = paths.distance(edge.to);
                prop_assert!(to.is_some());
                prop_assert!(to.unwrap() <= from + edge.weight);
            }
        }
    }

    /// Test that negative weights either produce consistent distances or a cycle.
    #[test]
    fn bellman_ford_negative_weights((n, edges) in graph(8, -10..20)) {
        match bellman_ford(n, &edges, 0) {
            Ok(paths) => {
                for edge in &edges {
                    if let Some(from) = paths.distance(edge.from) {
                        prop_assert!(paths.distance(edge.to).unwrap() <= from + edge.weight);
                    }
                }
            }
            Err(err) => prop_assert_eq!(err, Error::NegativeCycle),
        }
    }

    /// Test that the spanning forest is acyclic and covers every component.
    #[test]
    fn kruskal_forest_shape((n, edges) in graph(15, -20..20)) {
        let mst = minimum_spanning_tree(n, &edges).unwrap();

        let mut chosen = DisjointSet::new(n);
        for edge in mst.edges() {
            prop_assert!(chosen.union(edge.from, edge.to).unwrap(), "cycle through {:?}", edge);
        }

        let mut all = DisjointSet::new(n);
        for edge in &edges {
            all.union(edge.from, edge.to).unwrap();
        }
        prop_assert_eq!(chosen.set_count(), all.set_count());
        prop_assert_eq!(mst.component_count(), all.set_count());
        prop_assert_eq!(mst.total_weight(), mst.edges().iter().map(|e| e.weight).sum::<i64>());
    }
}
