//! Randomized quicksort.

use crate::partition::partition_at;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Work done by one sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortReport {
    /// Number of element-to-pivot comparisons.
    pub comparisons: u64,
}

/// Sorts `slice` in place, choosing every pivot uniformly at random.
///
/// Recurses into the smaller side of each partition and loops on the larger
/// one, so the stack depth stays O(log n) whatever pivots are drawn.
pub fn randomized_quicksort<T: Ord, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) -> SortReport {
    let len = slice.len();
    let mut report = SortReport::default();
    sort_range(slice, rng, &mut report);
    trace!("sorted {} elements with {} comparisons", len, report.comparisons);
    report
}

/// Sorts `slice` with an RNG seeded from `seed`.
pub fn quicksort_seeded<T: Ord>(slice: &mut [T], seed: u64) -> SortReport {
    let mut rng = StdRng::seed_from_u64(seed);
    randomized_quicksort(slice, &mut rng)
}

fn sort_range<T: Ord, R: Rng + ?Sized>(mut slice: &mut [T], rng: &mut R, report: &mut SortReport) {
    while slice.len() > 1 {
        let pivot = rng.gen_range(0..slice.len());
        let mid = partition_at(slice, pivot, &mut report.comparisons);

        let (left, right) = core::mem::take(&mut slice).split_at_mut(mid);
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort_range(left, rng, report);
            slice = right;
        } else {
            sort_range(right, rng, report);
            slice = left;
        }
    }
}
