//! Deterministic linear-time selection via median-of-medians pivoting.

use std::cmp::Ordering;

use crate::elementary::insertion_range;
use crate::partition::lomuto_range;
use crate::seq::RandomAccessRange;

/// Elements per median group. Five is the classic trade-off: smaller groups
/// leave more medians to recurse on, larger groups weaken the percentile
/// bound on the chosen pivot.
const GROUP_SIZE: usize = 5;

/// Places the element that belongs at sorted-order position `k` there,
/// without fully sorting, and returns a reference to it.
///
/// Deterministic median-of-medians pivoting guarantees Θ(n) worst-case time:
/// the range is cut into groups of five, each group is insertion-sorted and
/// its lower-middle element taken as the group median, the median of those
/// medians (found by recursing on them) is the partition pivot, and the
/// search continues in the side containing `k`.
///
/// Afterwards the range is partitioned around position `k`: everything
/// before it is `<=` the returned element and everything after it is `>=`.
///
/// ```
/// let mut v = vec![7, 2, 9, 4, 1, 8];
/// assert_eq!(*rangesort::quick_select(&mut v, 2), 4);
/// ```
///
/// # Panics
///
/// Panics if `k >= seq.len()`.
#[inline]
pub fn quick_select<S>(seq: &mut S, k: usize) -> &S::Item
where
    S: ?Sized + RandomAccessRange,
    S::Item: Ord,
{
    quick_select_by(seq, k, |a, b| a.cmp(b))
}

/// Like [`quick_select`], with a comparator function.
///
/// # Panics
///
/// Panics if `k >= seq.len()`.
#[inline]
pub fn quick_select_by<S, F>(seq: &mut S, k: usize, mut compare: F) -> &S::Item
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    assert!(
        k < len,
        "quick_select: k = {k} out of range for length {len}"
    );

    select_slice(seq.as_mut_slice(), k, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });

    seq.get(k)
}

/// Iterative descent: partition around the median-of-medians pivot, keep the
/// side holding `k`, stop once `k` is the pivot's resting index.
pub(crate) fn select_slice<T, F>(mut v: &mut [T], mut k: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(k < v.len());

    loop {
        let len = v.len();
        if len <= GROUP_SIZE {
            insertion_range(v, 0, len, is_less);
            return;
        }

        let pivot = median_of_medians(v, is_less);
        let p = lomuto_range(v, 0, len, pivot, is_less);

        if k == p {
            return;
        }
        if k < p {
            v = &mut v[..p];
        } else {
            v = &mut v[p + 1..];
            k -= p + 1;
        }
    }
}

/// Gathers the group medians into the range prefix, recursively selects
/// their median to the middle of that prefix, and returns its index.
///
/// Position `g` always lies in a group that was already processed (group 0
/// for `g < GROUP_SIZE`, strictly earlier groups after that), so swapping a
/// median into the prefix never disturbs a group still waiting for its median
/// to be taken.
fn median_of_medians<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let num_groups = (len + GROUP_SIZE - 1) / GROUP_SIZE;

    for g in 0..num_groups {
        let start = g * GROUP_SIZE;
        let end = usize::min(start + GROUP_SIZE, len);

        insertion_range(v, start, end, is_less);

        // Lower-middle element of a sorted group of 1..=GROUP_SIZE.
        let median = start + (end - start - 1) / 2;
        v.swap(g, median);
    }

    let mid = (num_groups - 1) / 2;
    select_slice(&mut v[..num_groups], mid, is_less);

    mid
}
