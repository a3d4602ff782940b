//! Classics Core - Shared types for the classics algorithm crates.
//!
//! Every algorithm crate in the workspace reports failures through the
//! single [`Error`] enum defined here:
//!
//! - `InvalidParameter`: a constructor argument outside its domain
//! - `DuplicateKey`: insert into a tree that rejects duplicates
//! - `InvalidStructure`: a structural invariant check failed
//! - `VertexOutOfRange`, `NegativeCycle`: graph inputs and results
//! - `IndexOutOfRange`: an order-statistic rank past the end of the input
//!
//! # Example
//!
//! ```rust
//! use classics_core::{Error, Result};
//!
//! fn degree(t: usize) -> Result<usize> {
//!     if t < 2 {
//!         return Err(Error::invalid_parameter("min_degree", "must be at least 2"));
//!     }
//!     Ok(t)
//! }
//!
//! assert!(degree(1).is_err());
//! assert_eq!(degree(3).unwrap(), 3);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;

pub use error::{Error, Result};
