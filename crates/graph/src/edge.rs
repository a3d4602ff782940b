//! Weighted edges.

use classics_core::{Error, Result};

/// Edge weight type.
pub type Weight = i64;

/// A weighted edge between two vertices.
///
/// Bellman-Ford reads it as directed `from -> to`; Kruskal ignores direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: usize, to: usize, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Checks that both endpoints are below `vertex_count`.
    pub(crate) fn check_bounds(&self, vertex_count: usize) -> Result<()> {
        for vertex in [self.from, self.to] {
            if vertex >= vertex_count {
                return Err(Error::vertex_out_of_range(vertex, vertex_count));
            }
        }
        Ok(())
    }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((from, to, weight): (usize, usize, Weight)) -> Self {
        Self::new(from, to, weight)
    }
}
