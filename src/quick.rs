//! Adaptive quick sort.
//!
//! Random-access ranges get the introsort treatment: randomized Lomuto
//! partitioning with a recursion budget, insertion sort on small ranges, and
//! a heap sort escape once the budget runs out, which caps the worst case at
//! O(n log n) even when an adversary defeats the pivot heuristic.
//!
//! Bidirectional-only ranges have no O(1) offset to pick a random pivot, so
//! they always partition around the last element and keep no heap escape:
//! the caller accepts the O(n²) worst case (e.g. already-sorted input).

use std::cmp::Ordering;

use crate::elementary::insertion_range;
use crate::heap;
use crate::partition::{lomuto_range, BoundedRng};
use crate::seq::{BidirectionalRange, RandomAccessRange};

/// Partitions at or below this length finish with insertion sort, which
/// amortizes the recursion overhead. Shared with merge sort.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 16;

/// Sorts the range with introsort, drawing pivot randomness from the calling
/// thread's generator.
///
/// Unstable, in-place apart from O(log n) recursion, O(n log n) worst case.
///
/// For reproducible pivot choices use [`quick_sort_rng`] with a seeded
/// generator.
#[inline]
pub fn quick_sort<S>(seq: &mut S)
where
    S: ?Sized + RandomAccessRange,
    S::Item: Ord,
{
    quick_sort_rng(seq, &mut rand::thread_rng());
}

/// Like [`quick_sort`], with a comparator function.
#[inline]
pub fn quick_sort_by<S, F>(seq: &mut S, compare: F)
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    quick_sort_by_rng(seq, &mut rand::thread_rng(), compare);
}

/// Like [`quick_sort`], drawing pivot randomness from `rng`.
#[inline]
pub fn quick_sort_rng<S, R>(seq: &mut S, rng: &mut R)
where
    S: ?Sized + RandomAccessRange,
    S::Item: Ord,
    R: ?Sized + BoundedRng,
{
    quick_sort_by_rng(seq, rng, |a, b| a.cmp(b));
}

/// Like [`quick_sort_by`], drawing pivot randomness from `rng`.
pub fn quick_sort_by_rng<S, R, F>(seq: &mut S, rng: &mut R, mut compare: F)
where
    S: ?Sized + RandomAccessRange,
    R: ?Sized + BoundedRng,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let v = seq.as_mut_slice();
    let len = v.len();
    if len < 2 {
        return;
    }

    let budget = 2 * len.ilog2();
    introsort(v, &mut |a, b| compare(a, b) == Ordering::Less, rng, budget);
}

/// Sorts a bidirectional-only range with last-element-pivot quick sort.
///
/// Unstable, in-place apart from O(log n) recursion (the recursion always
/// descends into the smaller partition and iterates on the larger, so stack
/// depth stays logarithmic even in the quadratic case). O(n²) worst case on
/// adversarial input such as already-sorted data.
#[inline]
pub fn quick_sort_bidirectional<S>(seq: &mut S)
where
    S: ?Sized + BidirectionalRange,
    S::Item: Ord,
{
    quick_sort_bidirectional_by(seq, |a, b| a.cmp(b));
}

/// Like [`quick_sort_bidirectional`], with a comparator function.
pub fn quick_sort_bidirectional_by<S, F>(seq: &mut S, mut compare: F)
where
    S: ?Sized + BidirectionalRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    quick_bidirectional(seq, 0, len, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn introsort<T, F, R>(mut v: &mut [T], is_less: &mut F, rng: &mut R, mut budget: u32)
where
    F: FnMut(&T, &T) -> bool,
    R: ?Sized + BoundedRng,
{
    loop {
        let len = v.len();

        if len <= SMALL_SORT_THRESHOLD {
            insertion_range(v, 0, len, is_less);
            return;
        }

        if budget == 0 {
            // Pivot picks went badly enough that the partition tree is twice
            // as deep as the balanced one. Fall back to a guaranteed
            // O(n log n) finish.
            heap::heapsort(v, is_less);
            return;
        }
        budget -= 1;

        let pivot = rng.next_below(len);
        let p = lomuto_range(v, 0, len, pivot, is_less);

        // Recurse into the smaller side, continue with the larger.
        if p < len - p - 1 {
            introsort(&mut v[..p], is_less, rng, budget);
            v = &mut v[p + 1..];
        } else {
            introsort(&mut v[p + 1..], is_less, rng, budget);
            v = &mut v[..p];
        }
    }
}

fn quick_bidirectional<S, F>(seq: &mut S, mut lo: usize, mut hi: usize, is_less: &mut F)
where
    S: ?Sized + BidirectionalRange,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        if hi - lo <= SMALL_SORT_THRESHOLD {
            insertion_range(seq, lo, hi, is_less);
            return;
        }

        let p = lomuto_range(seq, lo, hi, hi - 1, is_less);

        // Recurse into the smaller side, continue with the larger.
        if p - lo < hi - (p + 1) {
            quick_bidirectional(seq, lo, p, is_less);
            lo = p + 1;
        } else {
            quick_bidirectional(seq, p + 1, hi, is_less);
            hi = p;
        }
    }
}
