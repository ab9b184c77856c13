//! Lomuto partitioning and the pivot-selection strategies built on it.

use std::cmp::Ordering;

use crate::seq::{BidirectionalRange, ForwardRange, RandomAccessRange};

/// A source of uniformly distributed bounded integers.
///
/// The partition and quick sort entry points that need randomness take it as
/// an explicit argument instead of hiding a generator in library state, so a
/// seeded generator makes every run reproducible. Every [`rand::Rng`]
/// implements this trait.
pub trait BoundedRng {
    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// `bound` must be non-zero.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng> BoundedRng for R {
    fn next_below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Partitions the range around the element at `pivot`.
///
/// Lomuto scheme: the pivot is parked at the back, a boundary sweeps the
/// range left to right collecting elements strictly less than the pivot, and
/// the pivot is finally swapped onto the boundary. Returns the pivot's final
/// index. Afterwards every element before it is `< pivot` and every element
/// after it is `>= pivot` per the ordering.
///
/// Not stable. O(n) comparisons, at most n swaps.
///
/// # Panics
///
/// Panics if `pivot >= seq.len()`.
#[inline]
pub fn partition<S>(seq: &mut S, pivot: usize) -> usize
where
    S: ?Sized + BidirectionalRange,
    S::Item: Ord,
{
    partition_by(seq, pivot, |a, b| a.cmp(b))
}

/// Partitions the range around the element at `pivot` with a comparator
/// function. See [`partition`].
///
/// # Panics
///
/// Panics if `pivot >= seq.len()`.
#[inline]
pub fn partition_by<S, F>(seq: &mut S, pivot: usize, mut compare: F) -> usize
where
    S: ?Sized + BidirectionalRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    assert!(
        pivot < len,
        "partition: pivot index {pivot} out of range for length {len}"
    );

    lomuto_range(seq, 0, len, pivot, &mut |a, b| {
        compare(a, b) == Ordering::Less
    })
}

/// Partitions the range around its last element.
///
/// The strategy of choice when no O(1) random offset is available to pick an
/// arbitrary pivot. See [`partition`] for the postcondition.
///
/// # Panics
///
/// Panics if the range is empty (there is no pivot to pick).
#[inline]
pub fn partition_pivot_last<S>(seq: &mut S) -> usize
where
    S: ?Sized + BidirectionalRange,
    S::Item: Ord,
{
    partition_pivot_last_by(seq, |a, b| a.cmp(b))
}

/// Partitions the range around its last element with a comparator function.
/// See [`partition_pivot_last`].
///
/// # Panics
///
/// Panics if the range is empty.
#[inline]
pub fn partition_pivot_last_by<S, F>(seq: &mut S, compare: F) -> usize
where
    S: ?Sized + BidirectionalRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    assert!(len != 0, "partition_pivot_last: empty range has no pivot");

    partition_by(seq, len - 1, compare)
}

/// Partitions the range around a uniformly random element.
///
/// Defeats adversarial inputs (already sorted, reverse sorted) that degrade
/// fixed-pivot partitioning to quadratic behavior. See [`partition`] for the
/// postcondition.
///
/// # Panics
///
/// Panics if the range is empty.
#[inline]
pub fn partition_random<S, R>(seq: &mut S, rng: &mut R) -> usize
where
    S: ?Sized + RandomAccessRange,
    S::Item: Ord,
    R: ?Sized + BoundedRng,
{
    partition_random_by(seq, rng, |a, b| a.cmp(b))
}

/// Partitions the range around a uniformly random element with a comparator
/// function. See [`partition_random`].
///
/// # Panics
///
/// Panics if the range is empty.
#[inline]
pub fn partition_random_by<S, R, F>(seq: &mut S, rng: &mut R, compare: F) -> usize
where
    S: ?Sized + RandomAccessRange,
    R: ?Sized + BoundedRng,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    assert!(len != 0, "partition_random: empty range has no pivot");

    let pivot = rng.next_below(len);
    partition_by(seq, pivot, compare)
}

/// Partitions the range around its true median.
///
/// The median is located with deterministic
/// [`quick_select`](crate::quick_select), which already leaves the range
/// partitioned around it, so this guarantees balanced halves at the price of
/// an extra O(n) selection pass. Returns the median's index, `len / 2`.
///
/// # Panics
///
/// Panics if the range is empty.
#[inline]
pub fn partition_median<S>(seq: &mut S) -> usize
where
    S: ?Sized + RandomAccessRange,
    S::Item: Ord,
{
    partition_median_by(seq, |a, b| a.cmp(b))
}

/// Partitions the range around its true median with a comparator function.
/// See [`partition_median`].
///
/// # Panics
///
/// Panics if the range is empty.
#[inline]
pub fn partition_median_by<S, F>(seq: &mut S, mut compare: F) -> usize
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    assert!(len != 0, "partition_median: empty range has no pivot");

    let mid = len / 2;
    crate::select::select_slice(seq.as_mut_slice(), mid, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });

    mid
}

/// Lomuto partition of the index range `lo..hi` around the element at
/// `pivot` (absolute index). Returns the pivot's final absolute index.
pub(crate) fn lomuto_range<S, F>(
    seq: &mut S,
    lo: usize,
    hi: usize,
    pivot: usize,
    is_less: &mut F,
) -> usize
where
    S: ?Sized + ForwardRange,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    debug_assert!(lo < hi && hi <= seq.len());
    debug_assert!((lo..hi).contains(&pivot));

    let last = hi - 1;
    seq.swap(pivot, last);

    let mut boundary = lo;
    for i in lo..last {
        if is_less(seq.get(i), seq.get(last)) {
            seq.swap(i, boundary);
            boundary += 1;
        }
    }

    seq.swap(boundary, last);
    boundary
}
