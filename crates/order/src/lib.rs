//! Classics Order - Randomized sorting and selection.
//!
//! This crate provides:
//!
//! - `lomuto_partition`: in-place partition around a chosen pivot
//! - `randomized_quicksort`: in-place sort with uniformly random pivots,
//!   reporting the number of element comparisons
//! - `randomized_select`: the k-th smallest element in expected linear time
//!
//! Randomness comes from any [`rand::Rng`]; the `*_seeded` variants build a
//! reproducible [`rand::rngs::StdRng`] from a `u64` seed.
//!
//! # Example
//!
//! ```rust
//! use classics_order::{quicksort_seeded, select_seeded};
//!
//! let mut values = vec![9, 3, 7, 1, 8, 2, 5, 4, 6, 0];
//! let report = quicksort_seeded(&mut values, 42);
//! assert_eq!(values, (0..10).collect::<Vec<_>>());
//! assert!(report.comparisons >= 9);
//!
//! let mut values = vec![7, 1, 5, 3, 9, 2, 8, 6, 4, 0];
//! assert_eq!(select_seeded(&mut values, 4, 42), Ok(&4));
//! ```

#![no_std]

pub mod partition;
pub mod quicksort;
pub mod select;

pub use partition::lomuto_partition;
pub use quicksort::{quicksort_seeded, randomized_quicksort, SortReport};
pub use select::{randomized_select, select_seeded};
