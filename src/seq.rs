//! Traversal capability model.
//!
//! Every algorithm in this crate is generic over a range abstraction with one
//! of three capability levels, each a superset of the previous:
//!
//! - [`ForwardRange`]: a single forward pass over the elements.
//! - [`BidirectionalRange`]: forward passes plus backward scans.
//! - [`RandomAccessRange`]: O(1) arbitrary offsets, witnessed by a contiguous
//!   mutable view.
//!
//! Positions are expressed as indices because that is how safe Rust names a
//! location inside owned storage. The levels are the applicability contract:
//! an algorithm bounded on [`ForwardRange`] only ever touches indices in
//! single-pass patterns, one bounded on [`BidirectionalRange`] may also scan
//! backward, and only [`RandomAccessRange`] algorithms compute arbitrary
//! offsets. Calling e.g. [`merge_sort`](crate::merge_sort) on a type that
//! stops at [`BidirectionalRange`] is a compile error, not a runtime check.
//!
//! `[T]` and `Vec<T>` implement all three levels. `VecDeque<T>` implements
//! the first two: its two-slab layout has no contiguous view to hand out.
//! The [`ForwardOnly`] and [`BidirectionalOnly`] adapters deliberately
//! restrict a richer range to a weaker level, which is how a caller selects
//! e.g. the bidirectional quick sort variant for data that happens to live
//! in a `Vec`.

use std::collections::VecDeque;

/// A finite mutable range of elements traversed front to back.
///
/// `len` must stay constant while an algorithm runs; algorithms rearrange
/// elements, they never add or remove them.
pub trait ForwardRange {
    type Item;

    /// Number of elements in the range.
    fn len(&self) -> usize;

    /// Returns `true` if the range contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Overwrites the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if `a >= self.len()` or `b >= self.len()`.
    fn swap(&mut self, a: usize, b: usize);
}

/// A [`ForwardRange`] whose positions can also be retreated, permitting
/// backward scans such as the inner loop of insertion sort.
pub trait BidirectionalRange: ForwardRange {}

/// A [`BidirectionalRange`] with O(1) arbitrary offset and distance
/// computation, witnessed by a contiguous mutable view of the elements.
pub trait RandomAccessRange: BidirectionalRange {
    /// The whole range as one contiguous mutable slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

impl<T> ForwardRange for [T] {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        // Inherent `<[T]>::swap`, not a recursive trait call.
        self.swap(a, b);
    }
}

impl<T> BidirectionalRange for [T] {}

impl<T> RandomAccessRange for [T] {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice() at every
// call site).
impl<T> ForwardRange for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> BidirectionalRange for Vec<T> {}

impl<T> RandomAccessRange for Vec<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

// VecDeque has O(1) indexing but no contiguous view without shuffling the
// ring buffer, so it stops at the bidirectional level. Callers that need the
// random-access algorithms can use `make_contiguous` and sort the slice.
impl<T> ForwardRange for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

impl<T> BidirectionalRange for VecDeque<T> {}

/// Restricts any range to the forward-only capability level.
///
/// ```
/// use rangesort::{bubble_sort, ForwardOnly};
///
/// let mut v = vec![3, 1, 2];
/// bubble_sort(&mut ForwardOnly::new(&mut v));
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub struct ForwardOnly<'a, S: ?Sized>(&'a mut S);

impl<'a, S: ?Sized + ForwardRange> ForwardOnly<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Self(inner)
    }
}

impl<S: ?Sized + ForwardRange> ForwardRange for ForwardOnly<'_, S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> &S::Item {
        self.0.get(index)
    }

    fn set(&mut self, index: usize, value: S::Item) {
        self.0.set(index, value);
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

/// Restricts any bidirectional-or-richer range to the bidirectional level.
///
/// Useful to opt into the bidirectional algorithm variants, e.g.
/// [`quick_sort_bidirectional`](crate::quick_sort_bidirectional) behaves
/// identically whether the data is capability-restricted or not, while
/// [`quick_sort`](crate::quick_sort) would not accept the restricted view.
pub struct BidirectionalOnly<'a, S: ?Sized>(&'a mut S);

impl<'a, S: ?Sized + BidirectionalRange> BidirectionalOnly<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Self(inner)
    }
}

impl<S: ?Sized + BidirectionalRange> ForwardRange for BidirectionalOnly<'_, S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> &S::Item {
        self.0.get(index)
    }

    fn set(&mut self, index: usize, value: S::Item) {
        self.0.set(index, value);
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

impl<S: ?Sized + BidirectionalRange> BidirectionalRange for BidirectionalOnly<'_, S> {}
