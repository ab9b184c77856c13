//! Shared property suite for the comparison-based sorts, instantiated once
//! per algorithm at the bottom of the file.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;

use rangesort::patterns;

#[cfg(miri)]
const TEST_SIZES: [usize; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 15, 16, 17, 24, 50, 100];

#[cfg(not(miri))]
const TEST_SIZES: [usize; 27] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 24, 30, 32, 33, 35, 50, 100, 200, 500,
    1_000, 2_048, 10_000,
];

/// One sorting algorithm under test.
trait Sort {
    /// Preserves the relative order of equal elements.
    const STABLE: bool;

    /// Largest test size worth running (the quadratic algorithms stay small).
    const MAX_LEN: usize;

    fn name() -> String;

    fn sort<T: Ord>(v: &mut [T]);

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], compare: F);
}

fn get_or_init_random_seed<S: Sort>() -> u64 {
    static SEED_WRITTEN: Mutex<bool> = Mutex::new(false);
    let seed = patterns::random_init_seed();

    let mut seed_writer = SEED_WRITTEN.lock().unwrap();
    if !*seed_writer {
        // Always write the seed first, so a crashing run stays reproducible.
        io::stdout()
            .write_all(format!("\nSeed: {seed}\nTesting: {}\n\n", S::name()).as_bytes())
            .unwrap();
        io::stdout().flush().unwrap();

        *seed_writer = true;
    }

    seed
}

/// Sorts `v` with the algorithm under test and with the stdlib, and demands
/// identical results. Covers sortedness and permutation invariance at once:
/// matching a known-good sorted copy means no element was invented, lost or
/// duplicated.
fn sort_comp<T: Ord + Clone + Debug, S: Sort>(v: &mut [T]) {
    let _seed = get_or_init_random_seed::<S>();

    let original = v.to_vec();

    let mut expected = v.to_vec();
    expected.sort();

    S::sort(v);

    if v != expected.as_slice() {
        if v.len() <= 100 {
            eprintln!("Original: {original:?}");
            eprintln!("Expected: {expected:?}");
            eprintln!("Got:      {v:?}");
        }
        panic!("{} produced an incorrectly sorted result", S::name());
    }
}

fn test_pattern<S: Sort>(pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for &size in TEST_SIZES.iter().filter(|&&s| s <= S::MAX_LEN) {
        let mut v = pattern_fn(size);
        sort_comp::<i32, S>(&mut v);
    }
}

// --- Suite ---

fn basic<S: Sort>() {
    sort_comp::<i32, S>(&mut []);
    sort_comp::<(), S>(&mut []);
    sort_comp::<(), S>(&mut [()]);
    sort_comp::<(), S>(&mut [(), ()]);
    sort_comp::<i32, S>(&mut [7]);
    sort_comp::<i32, S>(&mut [2, 3]);
    sort_comp::<i32, S>(&mut [3, 2]);
    sort_comp::<i32, S>(&mut [2, 2]);
    sort_comp::<i32, S>(&mut [2, 3, 6]);
    sort_comp::<i32, S>(&mut [2, 3, 99, 6]);
    sort_comp::<i32, S>(&mut [5, 3, 1, 4, 2]);
    sort_comp::<i32, S>(&mut [15, -1, 3, -1, -3, -1, 7]);
}

fn random<S: Sort>() {
    test_pattern::<S>(patterns::random);
}

fn random_small_domain<S: Sort>() {
    test_pattern::<S>(|size| patterns::random_uniform(size, 0..=9));
}

fn ascending<S: Sort>() {
    test_pattern::<S>(patterns::ascending);
}

fn descending<S: Sort>() {
    test_pattern::<S>(patterns::descending);
}

fn all_equal<S: Sort>() {
    test_pattern::<S>(patterns::all_equal);
}

fn saw_mixed<S: Sort>() {
    test_pattern::<S>(|size| patterns::saw_mixed(size, (size as f64).sqrt() as usize));
}

fn pipe_organ<S: Sort>() {
    test_pattern::<S>(patterns::pipe_organ);
}

fn sort_vs_sort_by<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    for &size in TEST_SIZES.iter().filter(|&&s| s <= S::MAX_LEN) {
        let input = patterns::random(size);

        let mut by_ord = input.clone();
        S::sort(&mut by_ord);

        let mut by_cmp = input;
        S::sort_by(&mut by_cmp, |a, b| a.cmp(b));

        assert_eq!(by_ord, by_cmp);
    }
}

fn descending_comparator<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    // Scenario from the crate docs: a reversed comparator sorts descending.
    let mut v = vec![5, 3, 1, 4, 2];
    S::sort_by(&mut v, |a, b| b.cmp(a));
    assert_eq!(v, [5, 4, 3, 2, 1]);

    for &size in TEST_SIZES.iter().filter(|&&s| s <= S::MAX_LEN) {
        let mut v = patterns::random(size);

        let mut expected = v.clone();
        expected.sort();
        expected.reverse();

        S::sort_by(&mut v, |a, b| b.cmp(a));
        assert_eq!(v, expected);
    }
}

fn idempotent<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    for &size in TEST_SIZES.iter().filter(|&&s| s <= S::MAX_LEN) {
        let mut v = patterns::random(size);
        S::sort(&mut v);

        let once = v.clone();
        S::sort(&mut v);
        assert_eq!(v, once);
    }
}

/// Key-plus-occurrence pairs sorted on the key only; a stable sort must
/// leave the occurrence counters of equal keys ascending.
fn stability<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    if !S::STABLE {
        // It would be great to mark the test as skipped, but that isn't
        // possible as of now.
        return;
    }

    for &size in TEST_SIZES.iter().filter(|&&s| s <= S::MAX_LEN) {
        let keys = patterns::random_uniform(size, 0..=9);

        let mut counts = [0i32; 10];
        let mut v: Vec<(i32, i32)> = keys
            .into_iter()
            .map(|k| {
                counts[k as usize] += 1;
                (k, counts[k as usize])
            })
            .collect();

        let mut expected = v.clone();
        expected.sort_by(|a, b| a.0.cmp(&b.0));

        // Compare only on the key, so an unstable sort could mix up the
        // occurrence counters.
        S::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

        assert_eq!(v, expected);
    }
}

/// A panicking comparator must not lose or duplicate elements.
fn comp_panic_retains_set<S: Sort>() {
    let _seed = get_or_init_random_seed::<S>();

    for &size in TEST_SIZES.iter().filter(|&&s| s <= S::MAX_LEN.min(500)) {
        if size < 2 {
            continue;
        }

        let mut v = patterns::random(size);
        let mut comp_count = 0usize;
        let panic_at = size / 2;

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            S::sort_by(&mut v, |a, b| {
                comp_count += 1;
                if comp_count == panic_at {
                    panic!("intentional comparator panic");
                }
                a.cmp(b)
            });
        }));
        assert!(result.is_err());

        // Still a permutation of the original input.
        let mut remaining = v.clone();
        remaining.sort_unstable();
        let mut expected = patterns::random(size);
        expected.sort_unstable();
        assert_eq!(remaining, expected);
    }
}

// --- Instantiation ---

macro_rules! sort_tests {
    (
        $name:ident,
        $sort:path,
        $sort_by:path,
        stable = $stable:expr,
        max_len = $max_len:expr
    ) => {
        paste::paste! {
            mod [<$name _suite>] {
                use super::*;

                struct SortImpl;

                impl Sort for SortImpl {
                    const STABLE: bool = $stable;
                    const MAX_LEN: usize = $max_len;

                    fn name() -> String {
                        stringify!($name).into()
                    }

                    #[inline]
                    fn sort<T: Ord>(v: &mut [T]) {
                        $sort(v);
                    }

                    #[inline]
                    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], compare: F) {
                        $sort_by(v, compare);
                    }
                }

                #[test]
                fn basic() {
                    super::basic::<SortImpl>();
                }

                #[test]
                fn random() {
                    super::random::<SortImpl>();
                }

                #[test]
                fn random_small_domain() {
                    super::random_small_domain::<SortImpl>();
                }

                #[test]
                fn ascending() {
                    super::ascending::<SortImpl>();
                }

                #[test]
                fn descending() {
                    super::descending::<SortImpl>();
                }

                #[test]
                fn all_equal() {
                    super::all_equal::<SortImpl>();
                }

                #[test]
                fn saw_mixed() {
                    super::saw_mixed::<SortImpl>();
                }

                #[test]
                fn pipe_organ() {
                    super::pipe_organ::<SortImpl>();
                }

                #[test]
                fn sort_vs_sort_by() {
                    super::sort_vs_sort_by::<SortImpl>();
                }

                #[test]
                fn descending_comparator() {
                    super::descending_comparator::<SortImpl>();
                }

                #[test]
                fn idempotent() {
                    super::idempotent::<SortImpl>();
                }

                #[test]
                fn stability() {
                    super::stability::<SortImpl>();
                }

                #[test]
                fn comp_panic_retains_set() {
                    super::comp_panic_retains_set::<SortImpl>();
                }
            }
        }
    };
}

sort_tests!(
    bubble_sort,
    rangesort::bubble_sort,
    rangesort::bubble_sort_by,
    stable = true,
    max_len = 1_000
);

sort_tests!(
    insertion_sort,
    rangesort::insertion_sort,
    rangesort::insertion_sort_by,
    stable = true,
    max_len = 1_000
);

sort_tests!(
    selection_sort,
    rangesort::selection_sort,
    rangesort::selection_sort_by,
    stable = false,
    max_len = 1_000
);

sort_tests!(
    merge_sort,
    rangesort::merge_sort,
    rangesort::merge_sort_by,
    stable = true,
    max_len = 10_000
);

sort_tests!(
    quick_sort,
    rangesort::quick_sort,
    rangesort::quick_sort_by,
    stable = false,
    max_len = 10_000
);

// The bidirectional path degrades to O(n²) on the sorted patterns, so it
// stays at the quadratic algorithms' size cap.
sort_tests!(
    quick_sort_bidirectional,
    rangesort::quick_sort_bidirectional,
    rangesort::quick_sort_bidirectional_by,
    stable = false,
    max_len = 1_000
);

sort_tests!(
    heap_sort,
    rangesort::heap_sort,
    rangesort::heap_sort_by,
    stable = false,
    max_len = 10_000
);

// --- The standalone merge primitive ---

mod merge_primitive {
    use rangesort::{merge, merge_by};

    #[test]
    fn interleaves_sorted_inputs() {
        let mut out = Vec::new();
        merge(vec![1, 3, 5], vec![2, 3, 4], &mut out);
        assert_eq!(out, [1, 2, 3, 3, 4, 5]);
    }

    #[test]
    fn appends_to_existing_output() {
        let mut out = vec![0];
        merge(vec![2], vec![1, 3], &mut out);
        assert_eq!(out, [0, 1, 2, 3]);
    }

    #[test]
    fn empty_inputs() {
        let mut out: Vec<i32> = Vec::new();

        merge(vec![], vec![], &mut out);
        assert!(out.is_empty());

        merge(vec![1, 2], vec![], &mut out);
        merge(vec![], vec![3, 4], &mut out);
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn ties_take_from_left() {
        let left = vec![(1, "l0"), (2, "l1")];
        let right = vec![(1, "r0"), (1, "r1"), (2, "r2")];

        let mut out = Vec::new();
        merge_by(left, right, &mut out, |a, b| a.0.cmp(&b.0));

        assert_eq!(
            out,
            [(1, "l0"), (1, "r0"), (1, "r1"), (2, "l1"), (2, "r2")]
        );
    }

    #[test]
    fn moves_non_clone_values() {
        let mut out = Vec::new();
        merge(
            vec![Box::new(1), Box::new(4)],
            vec![Box::new(2), Box::new(3)],
            &mut out,
        );
        assert_eq!(out, [Box::new(1), Box::new(2), Box::new(3), Box::new(4)]);
    }
}
