use std::cmp::Ordering;
use std::ops::Range;

use crate::{RandomAccess, check_range};

/// Whether two sequences hold equal elements in the same order.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: RandomAccess + ?Sized,
    B: RandomAccess + ?Sized,
    A::Item: PartialEq<B::Item>,
{
    a.len() == b.len() && (0..a.len()).all(|i| a.at(i) == b.at(i))
}

/// First position in the sorted `range` whose element is not less than `value`.
pub fn lower_bound<S>(seq: &S, range: Range<usize>, value: &S::Item) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    lower_bound_by(seq, range, |probe| probe.cmp(value))
}

/// First position in the sorted `range` whose element is greater than `value`.
pub fn upper_bound<S>(seq: &S, range: Range<usize>, value: &S::Item) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    upper_bound_by(seq, range, |probe| probe.cmp(value))
}

/// The sub-range of the sorted `range` whose elements equal `value`.
///
/// Empty (but positioned at the insertion point) when `value` is absent.
pub fn equal_range<S>(seq: &S, range: Range<usize>, value: &S::Item) -> Range<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    equal_range_by(seq, range, |probe| probe.cmp(value))
}

/// [`lower_bound`] driven by a probe comparator returning the ordering of
/// an element relative to the target.
pub fn lower_bound_by<S, F>(seq: &S, range: Range<usize>, mut probe: F) -> usize
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    partition_point(seq, range, |item| probe(item) == Ordering::Less)
}

/// [`upper_bound`] driven by a probe comparator.
pub fn upper_bound_by<S, F>(seq: &S, range: Range<usize>, mut probe: F) -> usize
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    partition_point(seq, range, |item| probe(item) != Ordering::Greater)
}

/// [`equal_range`] driven by a probe comparator.
pub fn equal_range_by<S, F>(seq: &S, range: Range<usize>, mut probe: F) -> Range<usize>
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    let start = lower_bound_by(seq, range.clone(), &mut probe);
    let end = upper_bound_by(seq, start..range.end, &mut probe);
    start..end
}

/// First position in `range` for which `pred` is false, assuming every
/// element satisfying `pred` precedes every element that does not.
fn partition_point<S, P>(seq: &S, range: Range<usize>, mut pred: P) -> usize
where
    S: RandomAccess + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    check_range(&range, seq.len());
    let (mut lo, mut hi) = (range.start, range.end);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(seq.at(mid)) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_compares_length_and_content() {
        let a = vec![1, 2, 3];
        let b = [1, 2, 3];
        assert!(equal(&a, &b[..]));
        assert!(!equal(&a, &b[..2]));
        assert!(!equal(&a, &vec![1, 2, 4]));
    }

    #[test]
    fn bounds_on_sorted_values() {
        let v = vec![1, 2, 2, 2, 5, 7];
        assert_eq!(lower_bound(&v, 0..6, &2), 1);
        assert_eq!(upper_bound(&v, 0..6, &2), 4);
        assert_eq!(lower_bound(&v, 0..6, &0), 0);
        assert_eq!(upper_bound(&v, 0..6, &9), 6);
    }

    #[test]
    fn equal_range_finds_run() {
        let v = vec![1, 2, 2, 2, 5, 7];
        assert_eq!(equal_range(&v, 0..6, &2), 1..4);
        assert_eq!(equal_range(&v, 0..6, &7), 5..6);
    }

    #[test]
    fn equal_range_absent_value_is_empty_at_insertion_point() {
        let v = vec![1, 3, 5];
        let r = equal_range(&v, 0..3, &4);
        assert!(r.is_empty());
        assert_eq!(r.start, 2);
    }

    #[test]
    fn equal_range_within_sub_range() {
        let v = vec![9, 1, 2, 2, 0];
        assert_eq!(equal_range(&v, 1..4, &2), 2..4);
    }
}
