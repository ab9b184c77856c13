//! Implicit binary max-heap algorithms over random-access ranges.
//!
//! The heap lives in the range itself: node `i` has children `2i + 1` and
//! `2i + 2`, and every parent compares greater-or-equal to its children.

use std::cmp::Ordering;

use crate::seq::RandomAccessRange;

/// Sifts the element at `index` down until the max-heap invariant holds at
/// its final position: it is repeatedly swapped with its greater child until
/// neither child compares greater, or it reaches a leaf. O(log n).
///
/// A no-op on an empty range.
///
/// # Panics
///
/// Panics if the range is non-empty and `index >= seq.len()`.
#[inline]
pub fn heapify_down<S>(seq: &mut S, index: usize)
where
    S: ?Sized + RandomAccessRange,
    S::Item: Ord,
{
    heapify_down_by(seq, index, |a, b| a.cmp(b));
}

/// Like [`heapify_down`], with a comparator function.
#[inline]
pub fn heapify_down_by<S, F>(seq: &mut S, index: usize, mut compare: F)
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    if len == 0 {
        return;
    }
    assert!(
        index < len,
        "heapify_down: index {index} out of range for length {len}"
    );

    sift_down(seq, index, len, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Rearranges the range into a max-heap, bottom-up from the last internal
/// node. O(n) total: most nodes sit near the leaves and sift only a few
/// levels.
#[inline]
pub fn make_heap<S>(seq: &mut S)
where
    S: ?Sized + RandomAccessRange,
    S::Item: Ord,
{
    make_heap_by(seq, |a, b| a.cmp(b));
}

/// Like [`make_heap`], with a comparator function.
#[inline]
pub fn make_heap_by<S, F>(seq: &mut S, mut compare: F)
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    build_heap(seq, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the range with heap sort: build a max-heap, then repeatedly swap
/// the root behind the shrinking heap and sift the new root down.
///
/// Unstable, in-place, O(n log n) with no best/worst-case variance.
#[inline]
pub fn heap_sort<S>(seq: &mut S)
where
    S: ?Sized + RandomAccessRange,
    S::Item: Ord,
{
    heap_sort_by(seq, |a, b| a.cmp(b));
}

/// Like [`heap_sort`], with a comparator function.
#[inline]
pub fn heap_sort_by<S, F>(seq: &mut S, mut compare: F)
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    heapsort(seq, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub(crate) fn heapsort<S, F>(seq: &mut S, is_less: &mut F)
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    build_heap(seq, is_less);

    // Pop maximal elements from the heap.
    for end in (1..seq.len()).rev() {
        seq.swap(0, end);
        sift_down(seq, 0, end, is_less);
    }
}

fn build_heap<S, F>(seq: &mut S, is_less: &mut F)
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    for node in (0..len / 2).rev() {
        sift_down(seq, node, len, is_less);
    }
}

/// Iterative sift-down within the heap prefix `..end`.
fn sift_down<S, F>(seq: &mut S, mut node: usize, end: usize, is_less: &mut F)
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= end {
            break;
        }

        // Choose the greater child.
        if child + 1 < end && is_less(seq.get(child), seq.get(child + 1)) {
            child += 1;
        }

        // Stop once the invariant holds at `node`.
        if !is_less(seq.get(node), seq.get(child)) {
            break;
        }

        seq.swap(node, child);
        node = child;
    }
}
