//! B-tree node definitions.

use alloc::vec::Vec;

/// Node identifier in the B-tree arena.
pub type NodeId = usize;

/// A node in the B-tree.
///
/// Keys are kept sorted. An internal node with `n` keys owns exactly `n + 1`
/// children; a leaf owns none. Children are referenced by their arena id and
/// belong to exactly one parent.
#[derive(Clone, Debug)]
pub struct Node<K> {
    /// Keys stored in this node, ascending.
    pub keys: Vec<K>,
    /// For internal nodes: child node IDs.
    /// For leaf nodes: empty.
    pub children: Vec<NodeId>,
    /// Whether this is a leaf node.
    pub is_leaf: bool,
}

impl<K: Ord> Node<K> {
    /// Creates a new leaf node.
    pub fn new_leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Creates a new internal node.
    pub fn new_internal() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            is_leaf: false,
        }
    }

    /// Creates an empty node with the given leaf-ness.
    pub fn with_leaf(is_leaf: bool) -> Self {
        if is_leaf {
            Self::new_leaf()
        } else {
            Self::new_internal()
        }
    }

    /// Returns the number of keys in this node.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the index of the first key that is not less than `key`.
    pub fn find_key_position(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// Returns the index just past every key that is less than or equal to `key`.
    ///
    /// This is both the insertion point in a leaf (equal keys stay in
    /// arrival order) and the child to descend into from an internal node.
    pub fn find_insert_position(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }

    /// Inserts a key at the given position in a leaf node.
    pub fn insert_at(&mut self, pos: usize, key: K) {
        debug_assert!(self.is_leaf);
        self.keys.insert(pos, key);
    }

    /// Inserts a separator key and its right child at the given position in an internal node.
    pub fn insert_child_at(&mut self, pos: usize, key: K, child: NodeId) {
        debug_assert!(!self.is_leaf);
        self.keys.insert(pos, key);
        self.children.insert(pos + 1, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_find_positions() {
        let mut node = Node::new_leaf();
        node.keys = vec![10, 20, 20, 30];

        assert_eq!(node.find_key_position(&5), 0);
        assert_eq!(node.find_key_position(&20), 1);
        assert_eq!(node.find_insert_position(&20), 3);
        assert_eq!(node.find_key_position(&35), 4);
    }

    #[test]
    fn test_insert_child_at() {
        let mut node: Node<i32> = Node::new_internal();
        node.keys = vec![10, 30];
        node.children = vec![0, 1, 2];

        node.insert_child_at(1, 20, 7);

        assert_eq!(node.keys, vec![10, 20, 30]);
        assert_eq!(node.children, vec![0, 1, 7, 2]);
    }

    #[test]
    fn test_with_leaf() {
        assert!(Node::<u8>::with_leaf(true).is_leaf);
        assert!(!Node::<u8>::with_leaf(false).is_leaf);
        assert!(Node::<u8>::new_leaf().is_empty());
    }
}
