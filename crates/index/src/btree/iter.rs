//! In-order B-tree iterator.

use super::node::{Node, NodeId};
use alloc::vec::Vec;

/// Lazy ascending iterator over the keys of an [`OrderedTree`](super::OrderedTree).
///
/// Holds one `(node, next key index)` frame per level of the current path,
/// so memory use is bounded by the tree height.
pub struct Iter<'a, K> {
    /// Reference to the arena of nodes.
    arena: &'a [Node<K>],
    /// Path from the root to the node currently being visited.
    stack: Vec<(NodeId, usize)>,
    /// Keys not yet yielded.
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    /// Creates an iterator over the subtree rooted at `root`, which holds `len` keys.
    pub(crate) fn new(arena: &'a [Node<K>], root: Option<NodeId>, len: usize) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
            remaining: len,
        };
        if let Some(root) = root {
            iter.descend(root);
        }
        iter
    }

    /// Pushes the leftmost path starting at `node_id`.
    fn descend(&mut self, mut node_id: NodeId) {
        loop {
            self.stack.push((node_id, 0));
            let node = &self.arena[node_id];
            if node.is_leaf {
                return;
            }
            node_id = node.children[0];
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        loop {
            let (node_id, pos) = self.stack.pop()?;
            let node = &arena[node_id];

            if pos < node.keys.len() {
                self.stack.push((node_id, pos + 1));
                if !node.is_leaf {
                    self.descend(node.children[pos + 1]);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some(&node.keys[pos]);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> core::iter::FusedIterator for Iter<'_, K> {}
