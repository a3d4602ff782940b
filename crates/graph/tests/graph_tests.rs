use classics_core::Error;
use classics_graph::{bellman_ford, minimum_spanning_tree, DisjointSet, Edge};
use log::{debug, info};
mod test_util;

fn sample_edges() -> Vec<Edge> {
    vec![
        Edge::new(0, 1, 10),
        Edge::new(0, 2, 5),
        Edge::new(2, 3, 9),
        Edge::new(0, 3, 3),
        Edge::new(1, 2, 6),
    ]
}

#[test]
fn test_kruskal_sample() {
    info!("[TEST] minimum_spanning_tree sample graph");

    let mst = minimum_spanning_tree(4, &sample_edges()).unwrap();
    for edge in mst.edges() {
        debug!("{}-{}  Weight: {}", edge.from, edge.to, edge.weight);
    }

    assert_eq!(mst.total_weight(), 14);
    assert_eq!(mst.edges().len(), 3);
}

#[test]
fn test_bellman_ford_sample_directed() {
    let paths = bellman_ford(4, &sample_edges(), 0).unwrap();
    for (vertex, distance) in paths.iter() {
        debug!("{}\t{:?}", vertex, distance);
    }

    // 0 -> 2 -> 3 costs 14, the direct edge 3.
    assert_eq!(paths.as_slice(), &[Some(0), Some(10), Some(5), Some(3)]);

    let from_three = bellman_ford(4, &sample_edges(), 3).unwrap();
    assert_eq!(from_three.as_slice(), &[None, None, None, Some(0)]);
}

#[test]
fn test_bellman_ford_negative_cycle() {
    let mut edges = sample_edges();
    edges.push(Edge::new(3, 0, -4));

    assert_eq!(bellman_ford(4, &edges, 0), Err(Error::NegativeCycle));
    // The same cycle is reachable from every vertex that reaches 0 or 3.
    assert_eq!(bellman_ford(4, &edges, 2), Err(Error::NegativeCycle));
}

#[test]
fn test_mst_weight_matches_brute_force() {
    // Complete graph on five vertices with distinct weights.
    let mut edges = Vec::new();
    for u in 0..5 {
        for v in (u + 1)..5 {
            edges.push(Edge::new(u, v, ((u * 7 + v * 13) % 17) as i64 + 1));
        }
    }
    let mst = minimum_spanning_tree(5, &edges).unwrap();

    let mut best = i64::MAX;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() != 4 {
            continue;
        }
        let mut sets = DisjointSet::new(5);
        let mut weight = 0;
        for (i, edge) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 && sets.union(edge.from, edge.to).unwrap() {
                weight += edge.weight;
            }
        }
        if sets.set_count() == 1 {
            best = best.min(weight);
        }
    }

    info!("brute force best = {}, kruskal = {}", best, mst.total_weight());
    assert_eq!(mst.total_weight(), best);
}
