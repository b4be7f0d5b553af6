//! Generic algorithms over random-access logical sequences.
//!
//! Containers whose storage is not a single contiguous slice (ring buffers
//! wrapped at a modulus, for instance) can still be sorted, reversed and
//! searched in place by implementing [`RandomAccess`]. Every algorithm takes a
//! half-open range of logical positions, so a caller can operate on a
//! sub-sequence the same way it would on a sub-slice.

mod search;
mod seq;
mod sort;

pub use search::{
    equal, equal_range, equal_range_by, lower_bound, lower_bound_by, upper_bound, upper_bound_by,
};
pub use seq::RandomAccess;
pub use sort::{
    is_sorted, is_sorted_by, reverse, sort_unstable, sort_unstable_by, sort_unstable_by_key,
};

use std::ops::Range;

/// Panics unless `range` lies within a sequence of `len` elements.
///
/// Mirrors the bounds contract of slice indexing.
#[track_caller]
pub(crate) fn check_range(range: &Range<usize>, len: usize) {
    assert!(
        range.start <= range.end,
        "range start {} is greater than range end {}",
        range.start,
        range.end
    );
    assert!(
        range.end <= len,
        "range end {} out of bounds for sequence of length {len}",
        range.end
    );
}
