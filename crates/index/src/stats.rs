//! Tree statistics.
//!
//! Counters describing how a tree was built: how many keys and nodes it
//! holds and how many splits it took to get there.

/// Statistics for an [`OrderedTree`](crate::OrderedTree).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of keys in the tree.
    total_keys: usize,
    /// Number of allocated nodes.
    node_count: usize,
    /// Number of node splits, root splits included.
    splits: usize,
    /// Number of splits of the root, i.e. times the tree grew taller.
    root_splits: usize,
}

impl TreeStats {
    /// Creates a new empty stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of keys.
    pub fn total_keys(&self) -> usize {
        self.total_keys
    }

    /// Returns the number of allocated nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of node splits.
    pub fn splits(&self) -> usize {
        self.splits
    }

    /// Returns the number of root splits.
    pub fn root_splits(&self) -> usize {
        self.root_splits
    }

    pub(crate) fn add_keys(&mut self, count: usize) {
        self.total_keys += count;
    }

    pub(crate) fn add_node(&mut self) {
        self.node_count += 1;
    }

    pub(crate) fn record_split(&mut self) {
        self.splits += 1;
    }

    pub(crate) fn record_root_split(&mut self) {
        self.root_splits += 1;
    }

    /// Resets every counter to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counters() {
        let mut stats = TreeStats::new();
        stats.add_keys(3);
        stats.add_node();
        stats.add_node();
        stats.record_split();
        stats.record_root_split();

        assert_eq!(stats.total_keys(), 3);
        assert_eq!(stats.node_count(), 2);
        assert_eq!(stats.splits(), 1);
        assert_eq!(stats.root_splits(), 1);

        stats.clear();
        assert_eq!(stats, TreeStats::default());
    }
}
