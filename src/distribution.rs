//! Non-comparison sorts for plain-data keys: counting, radix, and bucket
//! sort.
//!
//! Keys are `Copy` scalars behind small sealed traits, so placement and
//! write-back are plain indexed copies. [`CountingKey`] covers the unsigned
//! integers (counting and radix sort), [`UnitKey`] the floating-point types
//! (bucket sort over `[0, 1)`).

use crate::elementary::insertion_range;
use crate::seq::{BidirectionalRange, ForwardRange};

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A non-negative integer key for [`counting_sort`] and [`radix_sort`].
///
/// Implemented for the unsigned integer types. Keys must fit in `usize` on
/// the target platform.
pub trait CountingKey: Copy + sealed::Sealed {
    fn index(self) -> usize;
}

macro_rules! impl_counting_key {
    ($($t:ty),*) => {
        $(
            impl CountingKey for $t {
                #[inline]
                fn index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_counting_key!(u8, u16, u32, u64, usize);

/// A floating-point key in the unit interval `[0, 1)` for [`bucket_sort`].
pub trait UnitKey: Copy + sealed::Sealed {
    fn unit(self) -> f64;
}

impl UnitKey for f32 {
    #[inline]
    fn unit(self) -> f64 {
        self as f64
    }
}

impl UnitKey for f64 {
    #[inline]
    fn unit(self) -> f64 {
        self
    }
}

/// Sorts a range of integers no greater than `max` in O(n + max) time and
/// space.
///
/// A histogram over `0..=max` is turned into inclusive prefix sums; walking
/// the input back to front and decrementing a key's slot before placing it
/// keeps equal keys in their original relative order. Stable.
///
/// Choose this only when `max` is small relative to the range length; the
/// histogram alone costs O(max) regardless of input size.
///
/// # Preconditions
///
/// Every element must satisfy `element <= max`. Checked by `debug_assert!`;
/// in release builds a violating element makes the result undefined (but
/// memory-safe).
///
/// ```
/// let mut v: Vec<u32> = vec![5, 3, 1, 4, 2, 0];
/// rangesort::counting_sort(&mut v, 5);
/// assert_eq!(v, [0, 1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn counting_sort<S>(seq: &mut S, max: S::Item)
where
    S: ?Sized + BidirectionalRange,
    S::Item: CountingKey,
{
    counting_sort_by_key(seq, max, |item| *item);
}

/// Like [`counting_sort`], with the key extracted from each element by
/// `key`. The elements themselves can be any `Copy` type, e.g. key-payload
/// pairs.
pub fn counting_sort_by_key<S, K, F>(seq: &mut S, max: K, key: F)
where
    S: ?Sized + BidirectionalRange,
    S::Item: Copy,
    K: CountingKey,
    F: Fn(&S::Item) -> K,
{
    counting_pass(seq, max.index(), &|item| key(item).index());
}

/// One stable counting pass over `seq`, keyed into `0..=max_index`.
fn counting_pass<S, F>(seq: &mut S, max_index: usize, key: &F)
where
    S: ?Sized + BidirectionalRange,
    S::Item: Copy,
    F: Fn(&S::Item) -> usize,
{
    let n = seq.len();
    if n < 2 {
        return;
    }

    let mut counts = vec![0usize; max_index + 1];
    for i in 0..n {
        let k = key(seq.get(i));
        debug_assert!(k <= max_index, "counting sort key {k} exceeds max {max_index}");
        counts[k] += 1;
    }

    // Inclusive prefix sums: counts[k] = number of elements with key <= k.
    for k in 1..counts.len() {
        counts[k] += counts[k - 1];
    }

    // Reverse-order placement preserves the relative order of equal keys.
    // Every slot of `out` is overwritten exactly once.
    let mut out = vec![*seq.get(0); n];
    for i in (0..n).rev() {
        let k = key(seq.get(i));
        counts[k] -= 1;
        out[counts[k]] = *seq.get(i);
    }

    for (i, val) in out.into_iter().enumerate() {
        seq.set(i, val);
    }
}

/// Sorts a range of integers no greater than `max` with least-significant
/// -digit radix sort, base 10.
///
/// Runs `floor(log10(max)) + 1` counting passes, one per decimal digit; each
/// pass is stable, and stability across passes composes to a stable overall
/// sort. O((n + 10) · digits) time.
///
/// # Preconditions
///
/// As for [`counting_sort`]: every element must satisfy `element <= max`.
///
/// ```
/// let mut v: Vec<u32> = vec![170, 45, 75, 90, 802, 24, 2, 66];
/// rangesort::radix_sort(&mut v, 802);
/// assert_eq!(v, [2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
#[inline]
pub fn radix_sort<S>(seq: &mut S, max: S::Item)
where
    S: ?Sized + BidirectionalRange,
    S::Item: CountingKey,
{
    radix_sort_by_key(seq, max, |item| *item);
}

/// Like [`radix_sort`], with the key extracted from each element by `key`.
pub fn radix_sort_by_key<S, K, F>(seq: &mut S, max: K, key: F)
where
    S: ?Sized + BidirectionalRange,
    S::Item: Copy,
    K: CountingKey,
    F: Fn(&S::Item) -> K,
{
    if seq.len() < 2 {
        return;
    }

    let max = max.index();
    let mut divisor = 1usize;

    loop {
        counting_pass(seq, 9, &|item| (key(item).index() / divisor) % 10);

        // Stop after the pass that covered the most significant digit.
        if max / divisor < 10 {
            break;
        }
        divisor *= 10;
    }
}

/// Sorts a range of floats in `[0, 1)` with one bucket per element.
/// See [`bucket_sort_with`].
///
/// ```
/// let mut v = vec![0.78, 0.17, 0.39, 0.26, 0.72, 0.94, 0.21, 0.12, 0.23, 0.68];
/// rangesort::bucket_sort(&mut v);
/// assert_eq!(v, [0.12, 0.17, 0.21, 0.23, 0.26, 0.39, 0.68, 0.72, 0.78, 0.94]);
/// ```
#[inline]
pub fn bucket_sort<S>(seq: &mut S)
where
    S: ?Sized + ForwardRange,
    S::Item: UnitKey,
{
    let n = seq.len();
    bucket_sort_with(seq, n.max(1));
}

/// Sorts a range of floats in `[0, 1)` into `bucket_count` buckets.
///
/// Element `x` lands in bucket `floor(x · bucket_count)`; each bucket is
/// insertion-sorted and the buckets are emitted in index order. Elements are
/// appended to their bucket in input order, so equal values keep their
/// relative order: stable. O(n) average time under the uniform-distribution
/// assumption, O(n²) when the input clusters into few buckets.
///
/// # Preconditions
///
/// Every element must lie in `[0, 1)`. Checked by `debug_assert!`; in
/// release builds an out-of-interval value makes the result undefined (but
/// memory-safe).
///
/// # Panics
///
/// Panics if `bucket_count` is zero.
pub fn bucket_sort_with<S>(seq: &mut S, bucket_count: usize)
where
    S: ?Sized + ForwardRange,
    S::Item: UnitKey,
{
    assert!(bucket_count > 0, "bucket_sort: bucket_count must be non-zero");

    let n = seq.len();
    if n < 2 {
        return;
    }

    let mut buckets: Vec<Vec<S::Item>> = (0..bucket_count).map(|_| Vec::new()).collect();

    for i in 0..n {
        let x = *seq.get(i);
        let u = x.unit();
        debug_assert!(
            (0.0..1.0).contains(&u),
            "bucket_sort: value {u} outside [0, 1)"
        );

        // The clamp guards the upper edge against float rounding pushing
        // u * bucket_count up to bucket_count.
        let b = ((u * bucket_count as f64) as usize).min(bucket_count - 1);
        buckets[b].push(x);
    }

    let mut pos = 0;
    for bucket in &mut buckets {
        let len = bucket.len();
        insertion_range(bucket.as_mut_slice(), 0, len, &mut |a: &S::Item, b: &S::Item| {
            a.unit() < b.unit()
        });

        for &val in bucket.iter() {
            seq.set(pos, val);
            pos += 1;
        }
    }
}
