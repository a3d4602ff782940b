//! B-tree implementation for the classics index crate.
//!
//! This module provides an arena-backed B-tree of configurable minimum degree.

mod iter;
mod node;
mod tree;

pub use iter::Iter;
pub use node::{Node, NodeId};
pub use tree::{DuplicatePolicy, OrderedTree, Position, MIN_DEGREE};
