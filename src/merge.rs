//! Stable two-way merge and top-down merge sort.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::elementary::insertion_range;
use crate::quick::SMALL_SORT_THRESHOLD;
use crate::seq::RandomAccessRange;

/// Merges two sorted inputs into `out`, preserving stability: when the front
/// elements compare equal, the one from `left` is taken first.
///
/// Both inputs are consumed completely; elements are moved, never cloned.
/// `out` grows by the sum of the input lengths.
///
/// ```
/// let mut out = Vec::new();
/// rangesort::merge(vec![1, 3, 5], vec![2, 3, 4], &mut out);
/// assert_eq!(out, [1, 2, 3, 3, 4, 5]);
/// ```
#[inline]
pub fn merge<T, L, R>(left: L, right: R, out: &mut Vec<T>)
where
    T: Ord,
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
{
    merge_by(left, right, out, |a, b| a.cmp(b));
}

/// Like [`merge`], with a comparator function.
pub fn merge_by<T, L, R, F>(left: L, right: R, out: &mut Vec<T>, mut compare: F)
where
    L: IntoIterator<Item = T>,
    R: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            // Ties go to the left input; that is what makes the merge stable.
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => return,
        };

        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }
}

/// Sorts the range with top-down merge sort.
///
/// The range is split at the midpoint, both halves are sorted recursively
/// (ranges of ≤ 16 elements fall back to insertion sort) and merged. One
/// scratch buffer the size of the whole range is allocated per call and
/// reused by every recursive merge: each recursion level reports whether its
/// sorted output currently resides in the source range or in its slot of the
/// scratch buffer, and the merge above it writes into whichever of the two
/// the runs do not occupy. A final move-back pass runs only if the top-level
/// result rests in the scratch buffer.
///
/// Stable, O(n log n) comparisons and moves, O(n) extra space. Allocation
/// failure for the scratch buffer propagates through the global allocator's
/// failure path; the range may already be permuted at that point but remains
/// valid. If the comparator panics, any half-finished merge is completed
/// before unwinding, so the range still holds every element exactly once,
/// in a valid but unspecified order.
///
/// ```
/// let mut v = vec![(1, "a"), (1, "b"), (0, "c")];
/// rangesort::merge_sort_by(&mut v, |x, y| x.0.cmp(&y.0));
/// assert_eq!(v, [(0, "c"), (1, "a"), (1, "b")]);
/// ```
#[inline]
pub fn merge_sort<S>(seq: &mut S)
where
    S: ?Sized + RandomAccessRange,
    S::Item: Ord,
{
    merge_sort_by(seq, |a, b| a.cmp(b));
}

/// Like [`merge_sort`], with a comparator function.
pub fn merge_sort_by<S, F>(seq: &mut S, mut compare: F)
where
    S: ?Sized + RandomAccessRange,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    stable_sort(seq.as_mut_slice(), &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Where a recursion level's sorted output currently lives.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Residence {
    Source,
    Scratch,
}

fn stable_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();
    if len <= SMALL_SORT_THRESHOLD {
        insertion_range(v, 0, len, is_less);
        return;
    }

    // The scratch buffer stays at length zero for its whole life: elements
    // only ever exist in it as bitwise copies, so unwinding out of `is_less`
    // can leak moved elements but never drop one twice.
    let mut scratch: Vec<T> = Vec::with_capacity(len);
    let scratch_ptr = scratch.as_mut_ptr();

    // SAFETY: `scratch_ptr` points at `len` writable, properly aligned
    // elements of capacity that outlives the call; `v` and the scratch
    // allocation are disjoint.
    unsafe {
        if sort_rec(v.as_mut_ptr(), len, scratch_ptr, is_less) == Residence::Scratch {
            ptr::copy_nonoverlapping(scratch_ptr, v.as_mut_ptr(), len);
        }
    }
}

/// Recursively sorts `v[..len]`, using `scratch[..len]` (same offsets in the
/// top-level scratch allocation) as the merge destination or source.
/// Returns where the sorted run ended up.
///
/// SAFETY: `v` and `scratch` must each be valid for reads and writes of
/// `len` elements and must not overlap. On entry `v[..len]` holds the run;
/// the scratch slot holds garbage and is owned by this call alone.
unsafe fn sort_rec<T, F>(v: *mut T, len: usize, scratch: *mut T, is_less: &mut F) -> Residence
where
    F: FnMut(&T, &T) -> bool,
{
    if len <= SMALL_SORT_THRESHOLD {
        // SAFETY: exclusive access to `v[..len]` per the contract above; the
        // slice is dropped before any pointer-based access resumes.
        let run = unsafe { std::slice::from_raw_parts_mut(v, len) };
        insertion_range(run, 0, len, is_less);
        return Residence::Source;
    }

    let mid = len / 2;

    // SAFETY: the halves and their scratch slots are disjoint sub-regions.
    let (left_loc, right_loc) = unsafe {
        (
            sort_rec(v, mid, scratch, is_less),
            sort_rec(v.add(mid), len - mid, scratch.add(mid), is_less),
        )
    };

    // Merge out of wherever the two runs live into the other storage. If the
    // halves disagree, the source-resident one is copied across first; its
    // scratch slot is dead at this point.
    unsafe {
        match (left_loc, right_loc) {
            (Residence::Source, Residence::Source) => {
                merge_runs(v, mid, v.add(mid), len - mid, scratch, is_less);
                Residence::Scratch
            }
            (Residence::Scratch, Residence::Scratch) => {
                merge_runs(scratch, mid, scratch.add(mid), len - mid, v, is_less);
                Residence::Source
            }
            (Residence::Source, Residence::Scratch) => {
                ptr::copy_nonoverlapping(v as *const T, scratch, mid);
                merge_runs(scratch, mid, scratch.add(mid), len - mid, v, is_less);
                Residence::Source
            }
            (Residence::Scratch, Residence::Source) => {
                ptr::copy_nonoverlapping(v.add(mid) as *const T, scratch.add(mid), len - mid);
                merge_runs(scratch, mid, scratch.add(mid), len - mid, v, is_less);
                Residence::Source
            }
        }
    }
}

/// Merges the sorted runs `left[..left_len]` and `right[..right_len]` into
/// `dst`. Ties take from `left`, preserving stability.
///
/// SAFETY: both runs must be valid for reads, `dst` for writes of
/// `left_len + right_len` elements, and `dst` must not overlap either run.
unsafe fn merge_runs<T, F>(
    left: *const T,
    left_len: usize,
    right: *const T,
    right_len: usize,
    dst: *mut T,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    // The guard tracks the unconsumed tails of both runs and flushes them to
    // the destination when dropped. That finishes a normal merge, and if the
    // comparator panics it leaves `dst` holding every element exactly once,
    // so the caller's unwind path never drops an element twice.
    let mut guard = TailFlush {
        left,
        left_end: unsafe { left.add(left_len) },
        right,
        right_end: unsafe { right.add(right_len) },
        dst,
    };

    // SAFETY: the cursors only advance while strictly before their run ends
    // and `dst` advances exactly once per consumed element.
    unsafe {
        while guard.left < guard.left_end && guard.right < guard.right_end {
            let src = if is_less(&*guard.right, &*guard.left) {
                &mut guard.right
            } else {
                &mut guard.left
            };

            ptr::copy_nonoverlapping(*src, guard.dst, 1);
            *src = src.add(1);
            guard.dst = guard.dst.add(1);
        }
    }
}

struct TailFlush<T> {
    left: *const T,
    left_end: *const T,
    right: *const T,
    right_end: *const T,
    dst: *mut T,
}

impl<T> Drop for TailFlush<T> {
    fn drop(&mut self) {
        // SAFETY: the remaining tails are exactly the elements not yet
        // written past `dst`, per the cursor invariant in `merge_runs`.
        unsafe {
            let left_rest = self.left_end.offset_from(self.left) as usize;
            let right_rest = self.right_end.offset_from(self.right) as usize;

            ptr::copy_nonoverlapping(self.left, self.dst, left_rest);
            ptr::copy_nonoverlapping(self.right, self.dst.add(left_rest), right_rest);
        }
    }
}
