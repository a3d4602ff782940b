//! Bellman-Ford single-source shortest paths.
//!
//! Relaxes every edge up to `V - 1` times, stopping early once a pass
//! changes nothing. One extra pass that still improves a distance proves a
//! negative-weight cycle reachable from the source. O(V · E).
//!
//! Distances are accumulated as `i128`: a simple path has fewer than `V`
//! edges, so sums cannot overflow and a cycle is never hidden behind a
//! saturated value. Results are clamped back to [`Weight`] at the end.

use crate::edge::{Edge, Weight};
use alloc::vec;
use alloc::vec::Vec;
use classics_core::{Error, Result};
use log::{debug, trace};

/// Shortest distances from one source vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    /// `None` marks a vertex the source cannot reach.
    distances: Vec<Option<Weight>>,
}

impl ShortestPaths {
    /// Returns the source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns the shortest distance to `vertex`, or None if it is unreachable.
    pub fn distance(&self, vertex: usize) -> Option<Weight> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns true if `vertex` is reachable from the source.
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Iterates over `(vertex, distance)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<Weight>)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// Returns the distances indexed by vertex.
    pub fn as_slice(&self) -> &[Option<Weight>] {
        &self.distances
    }
}

/// Computes shortest distances from `source` over the directed `edges`.
///
/// Returns [`Error::VertexOutOfRange`] if `source` or any edge endpoint is not
/// below `vertex_count`, and [`Error::NegativeCycle`] if a negative-weight
/// cycle is reachable from `source`. Reported distances saturate at the
/// bounds of [`Weight`].
pub fn bellman_ford(vertex_count: usize, edges: &[Edge], source: usize) -> Result<ShortestPaths> {
    if source >= vertex_count {
        return Err(Error::vertex_out_of_range(source, vertex_count));
    }
    for edge in edges {
        edge.check_bounds(vertex_count)?;
    }

    let mut distances: Vec<Option<i128>> = vec![None; vertex_count];
    distances[source] = Some(0);

    for pass in 1..vertex_count {
        let mut updated = false;
        for edge in edges {
            if let Some(candidate) = improvement(&distances, edge) {
                distances[edge.to] = Some(candidate);
                updated = true;
            }
        }
        if !updated {
            trace!("converged after {} of {} passes", pass, vertex_count - 1);
            break;
        }
    }

    if let Some(edge) = edges.iter().find(|edge| improvement(&distances, edge).is_some()) {
        debug!(
            "edge {} -> {} still relaxes: negative cycle reachable from {}",
            edge.from, edge.to, source
        );
        return Err(Error::NegativeCycle);
    }

    let distances = distances
        .into_iter()
        .map(|distance| distance.map(clamp))
        .collect();
    Ok(ShortestPaths { source, distances })
}

fn clamp(distance: i128) -> Weight {
    distance.clamp(i128::from(Weight::MIN), i128::from(Weight::MAX)) as Weight
}

/// Returns the shorter distance `edge` offers to its target, if any.
fn improvement(distances: &[Option<i128>], edge: &Edge) -> Option<i128> {
    let candidate = distances[edge.from]? + i128::from(edge.weight);
    match distances[edge.to] {
        Some(current) if current <= candidate => None,
        _ => Some(candidate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(list: &[(usize, usize, Weight)]) -> Vec<Edge> {
        list.iter().copied().map(Edge::from).collect()
    }

    #[test]
    fn test_simple_paths() {
        let graph = edges(&[(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)]);
        let paths = bellman_ford(4, &graph, 0).unwrap();

        assert_eq!(paths.source(), 0);
        assert_eq!(paths.as_slice(), &[Some(0), Some(3), Some(1), Some(4)]);
    }

    #[test]
    fn test_negative_edges_without_cycle() {
        let graph = edges(&[
            (0, 1, -1),
            (0, 2, 4),
            (1, 2, 3),
            (1, 3, 2),
            (1, 4, 2),
            (3, 2, 5),
            (3, 1, 1),
            (4, 3, -3),
        ]);
        let paths = bellman_ford(5, &graph, 0).unwrap();

        assert_eq!(paths.as_slice(), &[Some(0), Some(-1), Some(2), Some(-2), Some(1)]);
    }

    #[test]
    fn test_unreachable_vertices() {
        let graph = edges(&[(0, 1, 2), (2, 3, 1)]);
        let paths = bellman_ford(4, &graph, 0).unwrap();

        assert_eq!(paths.distance(1), Some(2));
        assert!(!paths.is_reachable(2));
        assert!(!paths.is_reachable(3));
        assert_eq!(paths.distance(99), None);
    }

    #[test]
    fn test_negative_cycle() {
        let graph = edges(&[(0, 1, 1), (1, 2, -1), (2, 1, -1)]);
        assert_eq!(bellman_ford(3, &graph, 0), Err(Error::NegativeCycle));
    }

    #[test]
    fn test_unreachable_negative_cycle_ignored() {
        let graph = edges(&[(0, 1, 1), (2, 3, -1), (3, 2, -1)]);
        let paths = bellman_ford(4, &graph, 0).unwrap();

        assert_eq!(paths.distance(1), Some(1));
        assert!(!paths.is_reachable(2));
    }

    #[test]
    fn test_negative_self_loop() {
        let graph = edges(&[(0, 0, -1)]);
        assert_eq!(bellman_ford(1, &graph, 0), Err(Error::NegativeCycle));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            bellman_ford(0, &[], 0),
            Err(Error::vertex_out_of_range(0, 0))
        );
        assert_eq!(
            bellman_ford(3, &edges(&[(0, 3, 1)]), 0),
            Err(Error::vertex_out_of_range(3, 3))
        );
    }

    #[test]
    fn test_single_vertex() {
        let paths = bellman_ford(1, &[], 0).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths.iter().collect::<Vec<_>>(), vec![(0, Some(0))]);
    }

    #[test]
    fn test_saturating_weights() {
        let graph = edges(&[(0, 1, Weight::MAX), (1, 2, Weight::MAX)]);
        let paths = bellman_ford(3, &graph, 0).unwrap();
        assert_eq!(paths.distance(2), Some(Weight::MAX));

        let graph = edges(&[(0, 1, Weight::MIN), (1, 2, Weight::MIN)]);
        let paths = bellman_ford(3, &graph, 0).unwrap();
        assert_eq!(paths.distance(1), Some(Weight::MIN));
        assert_eq!(paths.distance(2), Some(Weight::MIN));
    }

    #[test]
    fn test_negative_cycle_below_weight_min() {
        // The cycle 1 -> 2 -> 1 is entered at the lowest representable distance.
        let graph = edges(&[(0, 1, Weight::MIN), (1, 2, -1), (2, 1, -1)]);
        assert_eq!(bellman_ford(3, &graph, 0), Err(Error::NegativeCycle));
    }
}
