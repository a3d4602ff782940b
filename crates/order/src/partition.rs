//! Lomuto partition.

use classics_core::{Error, Result};

/// Partitions `slice` around the element at `pivot_index`.
///
/// The pivot is swapped to the end, every element `<=` it is moved to the
/// front, and the pivot is placed right after them. Returns the pivot's final
/// index. Adds one to `comparisons` per element compared against the pivot.
///
/// Returns [`Error::IndexOutOfRange`] if `pivot_index >= slice.len()`, which
/// includes every call on an empty slice.
pub fn lomuto_partition<T: Ord>(
    slice: &mut [T],
    pivot_index: usize,
    comparisons: &mut u64,
) -> Result<usize> {
    if pivot_index >= slice.len() {
        return Err(Error::index_out_of_range(pivot_index, slice.len()));
    }
    Ok(partition_at(slice, pivot_index, comparisons))
}

/// Unchecked core of [`lomuto_partition`]; `pivot_index` must be in bounds.
pub(crate) fn partition_at<T: Ord>(slice: &mut [T], pivot_index: usize, comparisons: &mut u64) -> usize {
    let last = slice.len() - 1;
    slice.swap(pivot_index, last);

    let mut store = 0;
    for j in 0..last {
        *comparisons += 1;
        if slice[j] <= slice[last] {
            if store != j {
                slice.swap(store, j);
            }
            store += 1;
        }
    }
    slice.swap(store, last);
    store
}
