use std::cmp::Ordering;
use std::ops::Range;

use crate::{RandomAccess, check_range};

/// Sorts `range` of `seq` in ascending order.
///
/// In-place heap sort: `O(n log n)` comparisons, no allocation, not stable.
///
/// # Panics
///
/// Panics if `range` is not within `seq`.
pub fn sort_unstable<S>(seq: &mut S, range: Range<usize>)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    sort_unstable_by(seq, range, Ord::cmp);
}

/// Sorts `range` of `seq` by the key extracted with `key`.
pub fn sort_unstable_by_key<S, K, F>(seq: &mut S, range: Range<usize>, mut key: F)
where
    S: RandomAccess + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    sort_unstable_by(seq, range, |a, b| key(a).cmp(&key(b)));
}

/// Sorts `range` of `seq` with the comparator `compare`.
pub fn sort_unstable_by<S, F>(seq: &mut S, range: Range<usize>, mut compare: F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    check_range(&range, seq.len());
    let base = range.start;
    let n = range.len();
    if n < 2 {
        return;
    }

    for root in (0..n / 2).rev() {
        sift_down(seq, base, root, n, &mut compare);
    }
    for end in (1..n).rev() {
        seq.swap_at(base, base + end);
        sift_down(seq, base, 0, end, &mut compare);
    }
}

/// Restores the max-heap property for the subtree at `root`, considering
/// only the first `end` elements after `base`.
fn sift_down<S, F>(seq: &mut S, base: usize, mut root: usize, end: usize, compare: &mut F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end
            && compare(seq.at(base + child), seq.at(base + child + 1)) == Ordering::Less
        {
            child += 1;
        }
        if compare(seq.at(base + root), seq.at(base + child)) != Ordering::Less {
            return;
        }
        seq.swap_at(base + root, base + child);
        root = child;
    }
}

/// Reverses the order of the elements in `range`.
pub fn reverse<S>(seq: &mut S, range: Range<usize>)
where
    S: RandomAccess + ?Sized,
{
    check_range(&range, seq.len());
    let (mut lo, mut hi) = (range.start, range.end);
    while lo + 1 < hi {
        hi -= 1;
        seq.swap_at(lo, hi);
        lo += 1;
    }
}

/// Whether `range` of `seq` is in non-descending order.
pub fn is_sorted<S>(seq: &S, range: Range<usize>) -> bool
where
    S: RandomAccess + ?Sized,
    S::Item: PartialOrd,
{
    is_sorted_by(seq, range, |a, b| a <= b)
}

/// Whether every adjacent pair in `range` satisfies `in_order`.
pub fn is_sorted_by<S, F>(seq: &S, range: Range<usize>, mut in_order: F) -> bool
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    check_range(&range, seq.len());
    (range.start..range.end.saturating_sub(1)).all(|i| in_order(seq.at(i), seq.at(i + 1)))
}
