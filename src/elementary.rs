//! Elementary in-place sorts: bubble, insertion, selection.

use std::cmp::Ordering;

use crate::seq::{BidirectionalRange, ForwardRange};

/// Sorts the range with bubble sort.
///
/// Adjacent out-of-order neighbors are swapped in repeated forward passes.
/// Each pass records where its last swap happened and the next pass stops
/// there, so an already-sorted suffix is never rescanned and fully sorted
/// input terminates after one pass.
///
/// Stable, in-place, O(n²) comparisons worst case, O(n) on sorted input.
#[inline]
pub fn bubble_sort<S>(seq: &mut S)
where
    S: ?Sized + ForwardRange,
    S::Item: Ord,
{
    bubble(seq, &mut |a, b| a.lt(b));
}

/// Sorts the range with bubble sort and a comparator function.
///
/// See [`bubble_sort`].
#[inline]
pub fn bubble_sort_by<S, F>(seq: &mut S, mut compare: F)
where
    S: ?Sized + ForwardRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    bubble(seq, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble<S, F>(seq: &mut S, is_less: &mut F)
where
    S: ?Sized + ForwardRange,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    // `limit` is one past the unsorted prefix. Everything at or beyond the
    // last swap of a pass is already in final position.
    let mut limit = seq.len();

    while limit > 1 {
        let mut last_swap = 0;

        for i in 1..limit {
            if is_less(seq.get(i), seq.get(i - 1)) {
                seq.swap(i - 1, i);
                last_swap = i;
            }
        }

        limit = last_swap;
    }
}

/// Sorts the range with insertion sort.
///
/// Each element is scanned backward through the sorted prefix and swapped
/// left while it is strictly less than its neighbor, so equal elements never
/// trade places.
///
/// Stable, in-place, O(n²) worst case, O(n) on sorted input. Also the
/// small-range fallback of [`merge_sort`](crate::merge_sort) and
/// [`quick_sort`](crate::quick_sort).
#[inline]
pub fn insertion_sort<S>(seq: &mut S)
where
    S: ?Sized + BidirectionalRange,
    S::Item: Ord,
{
    let len = seq.len();
    insertion_range(seq, 0, len, &mut |a, b| a.lt(b));
}

/// Sorts the range with insertion sort and a comparator function.
///
/// See [`insertion_sort`].
#[inline]
pub fn insertion_sort_by<S, F>(seq: &mut S, mut compare: F)
where
    S: ?Sized + BidirectionalRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    insertion_range(seq, 0, len, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Insertion sort over the index range `lo..hi` of `seq`.
///
/// Shared with the partition-based algorithms, which narrow onto subranges
/// of a sequence they cannot reslice.
pub(crate) fn insertion_range<S, F>(seq: &mut S, lo: usize, hi: usize, is_less: &mut F)
where
    S: ?Sized + ForwardRange,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    debug_assert!(lo <= hi && hi <= seq.len());

    for i in (lo + 1)..hi {
        let mut j = i;
        while j > lo && is_less(seq.get(j), seq.get(j - 1)) {
            seq.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts the range with selection sort.
///
/// For each position the minimum of the remaining suffix is swapped into
/// place: exactly n−1 swaps, always O(n²) comparisons.
///
/// Unstable: the long-distance swap may reorder equal elements.
#[inline]
pub fn selection_sort<S>(seq: &mut S)
where
    S: ?Sized + ForwardRange,
    S::Item: Ord,
{
    selection(seq, &mut |a, b| a.lt(b));
}

/// Sorts the range with selection sort and a comparator function.
///
/// See [`selection_sort`].
#[inline]
pub fn selection_sort_by<S, F>(seq: &mut S, mut compare: F)
where
    S: ?Sized + ForwardRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    selection(seq, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection<S, F>(seq: &mut S, is_less: &mut F)
where
    S: ?Sized + ForwardRange,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;

        for j in (i + 1)..len {
            if is_less(seq.get(j), seq.get(min)) {
                min = j;
            }
        }

        seq.swap(i, min);
    }
}
