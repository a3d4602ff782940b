//! Classics Graph - Edge-list graph algorithms.
//!
//! This crate provides:
//!
//! - `bellman_ford`: single-source shortest paths with negative edge weights
//!   and negative-cycle detection
//! - `minimum_spanning_tree`: Kruskal's algorithm over a disjoint-set union
//! - `DisjointSet`: union-find with path compression
//!
//! Vertices are the integers `0..vertex_count`; graphs are plain slices of
//! weighted [`Edge`]s.
//!
//! # Example
//!
//! ```rust
//! use classics_graph::{bellman_ford, minimum_spanning_tree, Edge};
//!
//! let edges = [
//!     Edge::new(0, 1, 10),
//!     Edge::new(0, 2, 5),
//!     Edge::new(2, 3, 9),
//!     Edge::new(0, 3, 3),
//!     Edge::new(1, 2, 6),
//! ];
//!
//! let mst = minimum_spanning_tree(4, &edges).unwrap();
//! assert_eq!(mst.total_weight(), 14);
//!
//! let paths = bellman_ford(4, &edges, 0).unwrap();
//! assert_eq!(paths.distance(3), Some(3));
//! ```

#![no_std]

extern crate alloc;

pub mod bellman_ford;
pub mod dsu;
mod edge;
pub mod kruskal;

pub use bellman_ford::{bellman_ford, ShortestPaths};
pub use dsu::DisjointSet;
pub use edge::{Edge, Weight};
pub use kruskal::{minimum_spanning_tree, SpanningTree};
