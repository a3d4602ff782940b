//! Classics Index - An in-memory B-tree keyed by any ordered type.
//!
//! This crate provides:
//!
//! - `OrderedTree`: a B-tree of minimum degree `t` supporting search, insert
//!   and ascending traversal with logarithmic depth
//! - `DuplicatePolicy`: whether equal keys are stored or rejected
//! - `TreeStats`: counters describing the tree's shape and growth
//!
//! # Example
//!
//! ```rust
//! use classics_index::OrderedTree;
//!
//! let mut tree = OrderedTree::new(3).unwrap();
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key).unwrap();
//! }
//!
//! let keys: Vec<_> = tree.traverse().copied().collect();
//! assert_eq!(keys, vec![5, 6, 7, 10, 12, 17, 20, 30]);
//!
//! assert!(tree.contains(&12));
//! assert!(tree.search(&11).is_none());
//! assert_eq!(tree.height(), 2);
//! ```

#![no_std]

extern crate alloc;

pub mod btree;
pub mod stats;

pub use btree::{DuplicatePolicy, Iter, Node, NodeId, OrderedTree, Position};
pub use stats::TreeStats;
