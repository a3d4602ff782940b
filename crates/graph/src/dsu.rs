//! Disjoint-set union.

use alloc::vec::Vec;
use classics_core::{Error, Result};

/// A partition of `0..n` into disjoint sets.
///
/// `find` compresses the path it walks, so repeated queries approach
/// constant time.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sets: n,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `x >= len()`.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        if x >= self.parent.len() {
            return Err(Error::index_out_of_range(x, self.parent.len()));
        }

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        Ok(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The representative of `x` becomes the representative of the merged
    /// set. Returns false if both were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }
        self.parent[root_y] = root_x;
        self.sets -= 1;
        Ok(true)
    }

    /// Returns true if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut sets = DisjointSet::new(4);
        assert_eq!(sets.len(), 4);
        assert_eq!(sets.set_count(), 4);
        for i in 0..4 {
            assert_eq!(sets.find(i), Ok(i));
        }
    }

    #[test]
    fn test_union_find() {
        let mut sets = DisjointSet::new(6);
        assert_eq!(sets.union(0, 1), Ok(true));
        assert_eq!(sets.union(2, 3), Ok(true));
        assert_eq!(sets.union(1, 3), Ok(true));
        assert_eq!(sets.union(0, 2), Ok(false));

        assert_eq!(sets.set_count(), 3);
        assert_eq!(sets.connected(0, 3), Ok(true));
        assert_eq!(sets.connected(0, 4), Ok(false));
        assert_eq!(sets.find(3), Ok(0));
    }

    #[test]
    fn test_path_compression() {
        let mut sets = DisjointSet::new(5);
        // Build the chain 0 <- 1 <- 2 <- 3 <- 4.
        for i in (0..4).rev() {
            sets.union(i, i + 1).unwrap();
        }

        assert_eq!(sets.find(4), Ok(0));
        assert!(sets.parent.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_empty() {
        let sets = DisjointSet::new(0);
        assert!(sets.is_empty());
        assert_eq!(sets.set_count(), 0);
    }

    #[test]
    fn test_out_of_range() {
        let mut sets = DisjointSet::new(3);
        assert_eq!(sets.find(3), Err(Error::index_out_of_range(3, 3)));
        assert_eq!(sets.union(0, 7), Err(Error::index_out_of_range(7, 3)));
        assert_eq!(sets.connected(5, 0), Err(Error::index_out_of_range(5, 3)));
        assert_eq!(sets.set_count(), 3);

        let mut empty = DisjointSet::new(0);
        assert_eq!(empty.find(0), Err(Error::index_out_of_range(0, 0)));
    }
}
