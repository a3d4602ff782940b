//! B-tree implementation.

use super::iter::Iter;
use super::node::{Node, NodeId};
use crate::stats::TreeStats;
use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use classics_core::{Error, Result};
use log::{debug, trace};

/// Smallest minimum degree a tree can be built with.
pub const MIN_DEGREE: usize = 2;

/// What `insert` does with a key that is already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Store every inserted key, equal keys included.
    #[default]
    Allow,
    /// Refuse keys that are already present with [`Error::DuplicateKey`].
    Reject,
}

/// Location of a key inside the tree: a node and the key index within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Node holding the key.
    pub node: NodeId,
    /// Index of the key within the node.
    pub index: usize,
}

/// An in-memory B-tree of minimum degree `t`.
///
/// Every node except the root holds between `t - 1` and `2t - 1` keys, and
/// all leaves sit at the same depth. Full nodes are split on the way down
/// during insertion, so the tree only grows taller when the root splits.
#[derive(Clone, Debug)]
pub struct OrderedTree<K> {
    /// Arena of all nodes.
    arena: Vec<Node<K>>,
    /// Root node ID, None while the tree is empty.
    root: Option<NodeId>,
    /// Minimum degree `t`.
    min_degree: usize,
    /// Handling of equal keys.
    policy: DuplicatePolicy,
    /// Statistics for this tree.
    stats: TreeStats,
}

impl<K: Ord> OrderedTree<K> {
    /// Creates an empty tree with minimum degree `t` that stores duplicate keys.
    ///
    /// Fails with [`Error::InvalidParameter`] if `t < 2`.
    pub fn new(min_degree: usize) -> Result<Self> {
        Self::with_policy(min_degree, DuplicatePolicy::Allow)
    }

    /// Creates an empty tree with minimum degree `t` and the given duplicate policy.
    pub fn with_policy(min_degree: usize, policy: DuplicatePolicy) -> Result<Self> {
        if min_degree < MIN_DEGREE {
            return Err(Error::invalid_parameter(
                "min_degree",
                format!("must be at least {}, got {}", MIN_DEGREE, min_degree),
            ));
        }

        Ok(Self {
            arena: Vec::new(),
            root: None,
            min_degree,
            policy,
            stats: TreeStats::new(),
        })
    }

    /// Returns the minimum degree `t`.
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Returns the largest number of keys a node may hold, `2t - 1`.
    pub fn max_keys(&self) -> usize {
        2 * self.min_degree - 1
    }

    /// Returns the duplicate policy.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Returns the statistics for this tree.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.stats.total_keys()
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root node ID.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the node with the given ID.
    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.arena.get(id)
    }

    /// Returns the number of levels: 0 when empty, 1 for a lone leaf root.
    pub fn height(&self) -> usize {
        let mut current = match self.root {
            Some(root) => root,
            None => return 0,
        };
        let mut height = 1;
        while !self.arena[current].is_leaf {
            current = self.arena[current].children[0];
            height += 1;
        }
        height
    }

    /// Allocates a new node in the arena and returns its ID.
    fn alloc_node(arena: &mut Vec<Node<K>>, stats: &mut TreeStats, node: Node<K>) -> NodeId {
        let id = arena.len();
        arena.push(node);
        stats.add_node();
        id
    }

    /// Finds a key, returning the node and index that hold it.
    ///
    /// Each level costs one binary search over at most `2t - 1` keys.
    pub fn search(&self, key: &K) -> Option<Position> {
        let mut current = self.root?;

        loop {
            let node = &self.arena[current];
            let pos = node.find_key_position(key);
            if pos < node.key_count() && &node.keys[pos] == key {
                return Some(Position {
                    node: current,
                    index: pos,
                });
            }
            if node.is_leaf {
                return None;
            }
            current = node.children[pos];
        }
    }

    /// Returns true if the tree contains `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Returns the key at a position obtained from [`search`](Self::search).
    pub fn get(&self, position: Position) -> Option<&K> {
        self.arena.get(position.node)?.keys.get(position.index)
    }

    /// Inserts a key.
    ///
    /// Only fails under [`DuplicatePolicy::Reject`] when the key is already
    /// present, in which case the tree is left untouched.
    pub fn insert(&mut self, key: K) -> Result<()> {
        if self.policy == DuplicatePolicy::Reject && self.contains(&key) {
            return Err(Error::DuplicateKey);
        }

        let root = match self.root {
            Some(root) => root,
            None => {
                let mut leaf = Node::new_leaf();
                leaf.keys.push(key);
                let root = Self::alloc_node(&mut self.arena, &mut self.stats, leaf);
                self.root = Some(root);
                self.stats.add_keys(1);
                return Ok(());
            }
        };

        let root = if self.arena[root].key_count() == self.max_keys() {
            self.grow_root(root)
        } else {
            root
        };

        self.insert_non_full(root, key);
        self.stats.add_keys(1);
        Ok(())
    }

    /// Puts a new root above the full `old_root` and splits it.
    fn grow_root(&mut self, old_root: NodeId) -> NodeId {
        let mut new_root = Node::new_internal();
        new_root.children.push(old_root);
        let new_root_id = Self::alloc_node(&mut self.arena, &mut self.stats, new_root);

        self.split_child(new_root_id, 0);
        self.root = Some(new_root_id);
        self.stats.record_root_split();

        debug!(
            "root split: new root {} above {}, height now {}",
            new_root_id,
            old_root,
            self.height()
        );
        new_root_id
    }

    /// Inserts a key below `node_id`, which must not be full.
    ///
    /// Any full child on the path is split before it is entered, so the
    /// leaf that finally receives the key always has room for it.
    fn insert_non_full(&mut self, mut node_id: NodeId, key: K) {
        loop {
            let node = &self.arena[node_id];
            let mut pos = node.find_insert_position(&key);

            if node.is_leaf {
                self.arena[node_id].insert_at(pos, key);
                return;
            }

            let child_id = node.children[pos];
            if self.arena[child_id].key_count() == self.max_keys() {
                self.split_child(node_id, pos);
                if key > self.arena[node_id].keys[pos] {
                    pos += 1;
                }
            }
            node_id = self.arena[node_id].children[pos];
        }
    }

    /// Splits the full child at `index` of `parent_id`.
    ///
    /// The child keeps its lower `t - 1` keys (and `t` children), a new right
    /// sibling takes the upper `t - 1` keys (and `t` children), and the median
    /// moves up into the parent at `index`.
    fn split_child(&mut self, parent_id: NodeId, index: usize) {
        let t = self.min_degree;
        let child_id = self.arena[parent_id].children[index];

        let child = &mut self.arena[child_id];
        debug_assert_eq!(child.key_count(), 2 * t - 1);

        let mut sibling = Node::with_leaf(child.is_leaf);
        sibling.keys = child.keys.split_off(t);
        if !child.is_leaf {
            sibling.children = child.children.split_off(t);
        }
        let median = child.keys.remove(t - 1);

        let sibling_id = Self::alloc_node(&mut self.arena, &mut self.stats, sibling);
        self.arena[parent_id].insert_child_at(index, median, sibling_id);
        self.stats.record_split();

        trace!(
            "split node {} under {} at {}: new sibling {}",
            child_id,
            parent_id,
            index,
            sibling_id
        );
    }

    /// Returns a lazy iterator over all keys in ascending order.
    pub fn traverse(&self) -> Iter<'_, K> {
        Iter::new(&self.arena, self.root, self.len())
    }

    /// Returns the smallest key.
    pub fn min(&self) -> Option<&K> {
        let mut current = self.root?;
        while !self.arena[current].is_leaf {
            current = self.arena[current].children[0];
        }
        self.arena[current].keys.first()
    }

    /// Returns the largest key.
    pub fn max(&self) -> Option<&K> {
        let mut current = self.root?;
        while !self.arena[current].is_leaf {
            let children = &self.arena[current].children;
            current = children[children.len() - 1];
        }
        self.arena[current].keys.last()
    }

    /// Removes every key and node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.stats.clear();
    }

    /// Checks every structural invariant of the tree.
    ///
    /// Returns [`Error::InvalidStructure`] describing the first violation:
    /// key counts outside `t - 1 ..= 2t - 1` (the root only needs one key),
    /// a child count other than keys + 1, keys out of order within a node or
    /// relative to the separators above it, leaves at different depths, or
    /// nodes that are allocated but unreachable.
    pub fn validate(&self) -> Result<()> {
        let root = match self.root {
            Some(root) => root,
            None if self.len() == 0 => return Ok(()),
            None => {
                return Err(Error::invalid_structure(format!(
                    "empty tree reports {} keys",
                    self.len()
                )))
            }
        };

        let max_keys = self.max_keys();
        let min_keys = self.min_degree - 1;
        let mut leaf_depth: Option<usize> = None;
        let mut total_keys = 0;
        let mut visited = 0;
        let mut stack: Vec<(NodeId, usize, Option<&K>, Option<&K>)> = vec![(root, 1, None, None)];

        while let Some((node_id, depth, lower, upper)) = stack.pop() {
            visited += 1;
            if visited > self.arena.len() {
                return Err(Error::invalid_structure("node reachable along more than one path"));
            }
            let node = self.arena.get(node_id).ok_or_else(|| {
                Error::invalid_structure(format!("node {} is not allocated", node_id))
            })?;

            let count = node.key_count();
            if count > max_keys {
                return Err(Error::invalid_structure(format!(
                    "node {} holds {} keys, more than {}",
                    node_id, count, max_keys
                )));
            }
            if node_id == root {
                if count == 0 {
                    return Err(Error::invalid_structure("root holds no keys"));
                }
            } else if count < min_keys {
                return Err(Error::invalid_structure(format!(
                    "node {} holds {} keys, fewer than {}",
                    node_id, count, min_keys
                )));
            }

            if node.keys.windows(2).any(|pair| !self.in_order(&pair[0], &pair[1])) {
                return Err(Error::invalid_structure(format!(
                    "keys of node {} are out of order",
                    node_id
                )));
            }
            if let (Some(lower), Some(first)) = (lower, node.keys.first()) {
                if !self.in_order(lower, first) {
                    return Err(Error::invalid_structure(format!(
                        "node {} holds a key below its left separator",
                        node_id
                    )));
                }
            }
            if let (Some(upper), Some(last)) = (upper, node.keys.last()) {
                if !self.in_order(last, upper) {
                    return Err(Error::invalid_structure(format!(
                        "node {} holds a key above its right separator",
                        node_id
                    )));
                }
            }
            total_keys += count;

            if node.is_leaf {
                if !node.children.is_empty() {
                    return Err(Error::invalid_structure(format!(
                        "leaf {} has children",
                        node_id
                    )));
                }
                match leaf_depth {
                    None => leaf_depth = Some(depth),
                    Some(expected) if expected != depth => {
                        return Err(Error::invalid_structure(format!(
                            "leaf {} at depth {}, expected {}",
                            node_id, depth, expected
                        )));
                    }
                    Some(_) => {}
                }
            } else {
                if node.children.len() != count + 1 {
                    return Err(Error::invalid_structure(format!(
                        "node {} has {} keys but {} children",
                        node_id,
                        count,
                        node.children.len()
                    )));
                }
                for (i, &child) in node.children.iter().enumerate() {
                    let child_lower = if i == 0 { lower } else { Some(&node.keys[i - 1]) };
                    let child_upper = if i == count { upper } else { Some(&node.keys[i]) };
                    stack.push((child, depth + 1, child_lower, child_upper));
                }
            }
        }

        if total_keys != self.len() {
            return Err(Error::invalid_structure(format!(
                "found {} keys, expected {}",
                total_keys,
                self.len()
            )));
        }
        if visited != self.arena.len() {
            return Err(Error::invalid_structure(format!(
                "{} of {} nodes reachable from the root",
                visited,
                self.arena.len()
            )));
        }
        Ok(())
    }

    /// Ordering required between neighbouring keys under the duplicate policy.
    fn in_order(&self, left: &K, right: &K) -> bool {
        match self.policy {
            DuplicatePolicy::Allow => left <= right,
            DuplicatePolicy::Reject => left < right,
        }
    }
}

impl<'a, K: Ord> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}
