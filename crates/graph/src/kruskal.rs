//! Kruskal's minimum spanning tree.
//!
//! Edges are taken in ascending weight order and kept whenever they join two
//! different components of a [`DisjointSet`]. O(E log E).

use crate::dsu::DisjointSet;
use crate::edge::{Edge, Weight};
use alloc::vec::Vec;
use classics_core::Result;
use log::{debug, trace};

/// The edges chosen by Kruskal's algorithm.
///
/// When the graph is disconnected this is a minimum spanning forest with one
/// tree per component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    vertex_count: usize,
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningTree {
    /// Returns the chosen edges in the order they were accepted.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the chosen edge weights.
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns the number of connected components.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Returns true if the edges connect every vertex.
    pub fn is_spanning(&self) -> bool {
        self.component_count() <= 1
    }
}

/// Computes a minimum spanning tree of the undirected graph `edges`.
///
/// Equal weights keep their input order. Returns
/// [`Error::VertexOutOfRange`](classics_core::Error::VertexOutOfRange) if an
/// endpoint is not below `vertex_count`.
pub fn minimum_spanning_tree(vertex_count: usize, edges: &[Edge]) -> Result<SpanningTree> {
    for edge in edges {
        edge.check_bounds(vertex_count)?;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|edge| edge.weight);

    let mut sets = DisjointSet::new(vertex_count);
    let mut chosen = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_weight: Weight = 0;

    for edge in sorted {
        if sets.set_count() <= 1 {
            break;
        }
        if sets.union(edge.from, edge.to)? {
            trace!("accept {}-{} weight {}", edge.from, edge.to, edge.weight);
            total_weight = total_weight.saturating_add(edge.weight);
            chosen.push(edge);
        }
    }

    debug!(
        "spanning forest of {} vertices: {} edges, {} components, weight {}",
        vertex_count,
        chosen.len(),
        sets.set_count(),
        total_weight
    );

    Ok(SpanningTree {
        vertex_count,
        edges: chosen,
        total_weight,
    })
}
