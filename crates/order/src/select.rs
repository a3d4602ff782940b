//! Randomized selection of order statistics.

use crate::partition::partition_at;
use classics_core::{Error, Result};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns the `k`-th smallest element of `slice` (0-based).
///
/// Partitions around random pivots, keeping only the side that contains
/// rank `k`; expected O(n). The slice is permuted in place and the returned
/// reference points into it. Returns [`Error::IndexOutOfRange`] if
/// `k >= slice.len()`.
pub fn randomized_select<'a, T: Ord, R: Rng + ?Sized>(
    slice: &'a mut [T],
    k: usize,
    rng: &mut R,
) -> Result<&'a T> {
    if k >= slice.len() {
        return Err(Error::index_out_of_range(k, slice.len()));
    }

    let mut comparisons = 0;
    let (mut lo, mut hi) = (0, slice.len());
    while hi - lo > 1 {
        let pivot = rng.gen_range(0..hi - lo);
        let mid = lo + partition_at(&mut slice[lo..hi], pivot, &mut comparisons);
        match k.cmp(&mid) {
            core::cmp::Ordering::Equal => break,
            core::cmp::Ordering::Less => hi = mid,
            core::cmp::Ordering::Greater => lo = mid + 1,
        }
    }

    trace!("selected rank {} of {} with {} comparisons", k, slice.len(), comparisons);
    Ok(&slice[k])
}

/// Selects the `k`-th smallest element with an RNG seeded from `seed`.
pub fn select_seeded<T: Ord>(slice: &mut [T], k: usize, seed: u64) -> Result<&T> {
    let mut rng = StdRng::seed_from_u64(seed);
    randomized_select(slice, k, &mut rng)
}
