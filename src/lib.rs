//! # rangesort
//!
//! A toolkit of comparison-based and distribution-based sorting and
//! selection algorithms over abstract ordered ranges.
//!
//! Every algorithm is generic over the traversal capability of the range it
//! operates on — forward-only, bidirectional, or random-access — expressed
//! as the trait hierarchy in [`seq`]. The bounds are checked at compile
//! time: an algorithm that needs O(1) offsets simply does not accept a
//! weaker range. `[T]`, `Vec<T>` and `VecDeque<T>` implement the model out
//! of the box.
//!
//! ## Algorithms
//!
//! - Elementary: [`bubble_sort`], [`insertion_sort`], [`selection_sort`].
//! - Divide and conquer: [`merge_sort`] (stable, buffer-reusing) and
//!   [`quick_sort`] (introsort: random pivots, depth-bounded heap sort
//!   escape, insertion sort on small ranges), plus the last-element-pivot
//!   [`quick_sort_bidirectional`] variant.
//! - Heap: [`heapify_down`], [`make_heap`], [`heap_sort`].
//! - Selection: [`quick_select`] (deterministic median-of-medians, Θ(n)
//!   worst case) and the [`partition`] family.
//! - Distribution: [`counting_sort`], [`radix_sort`], [`bucket_sort`].
//!
//! Comparison-based operations come in pairs: `op` for `Item: Ord` and
//! `op_by` taking a comparator function.
//!
//! ```
//! use rangesort::{insertion_sort, quick_sort_by};
//!
//! let mut v = vec![5, 3, 1, 4, 2];
//! insertion_sort(&mut v);
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//!
//! let mut v = vec![5, 3, 1, 4, 2];
//! quick_sort_by(&mut v, |a, b| b.cmp(a));
//! assert_eq!(v, [5, 4, 3, 2, 1]);
//! ```
//!
//! ## Preconditions over error signaling
//!
//! Like the standard library's sorting facilities, this crate states caller
//! contracts instead of returning errors: comparators must be strict weak
//! orderings (a violation yields an unspecified but memory-safe order),
//! out-of-bounds positions panic, and the value-domain preconditions of the
//! distribution sorts are `debug_assert!`ed. Empty and single-element ranges
//! are no-op successes everywhere.
//!
//! ## Randomness
//!
//! The randomized-pivot entry points draw from the calling thread's
//! generator by default; the `_rng` variants accept any
//! [`BoundedRng`](crate::BoundedRng) (every [`rand::Rng`] qualifies), which
//! makes pivot choices reproducible under a seeded generator. The library
//! itself keeps no hidden random state.

pub mod patterns;
pub mod seq;

mod distribution;
mod elementary;
mod heap;
mod merge;
mod partition;
mod quick;
mod select;

pub use distribution::{
    bucket_sort, bucket_sort_with, counting_sort, counting_sort_by_key, radix_sort,
    radix_sort_by_key, CountingKey, UnitKey,
};
pub use elementary::{
    bubble_sort, bubble_sort_by, insertion_sort, insertion_sort_by, selection_sort,
    selection_sort_by,
};
pub use heap::{heap_sort, heap_sort_by, heapify_down, heapify_down_by, make_heap, make_heap_by};
pub use merge::{merge, merge_by, merge_sort, merge_sort_by};
pub use partition::{
    partition, partition_by, partition_median, partition_median_by, partition_pivot_last,
    partition_pivot_last_by, partition_random, partition_random_by, BoundedRng,
};
pub use quick::{
    quick_sort, quick_sort_bidirectional, quick_sort_bidirectional_by, quick_sort_by,
    quick_sort_by_rng, quick_sort_rng,
};
pub use select::{quick_select, quick_select_by};
pub use seq::{BidirectionalOnly, BidirectionalRange, ForwardOnly, ForwardRange, RandomAccessRange};
