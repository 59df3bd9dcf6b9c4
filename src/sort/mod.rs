//! Materializing sorts
//!
//! Both algorithms drain their upstream into a buffer on the first pull,
//! then hand the sorted elements back one `advance` at a time. Comparators
//! follow the `slice::sort_by` convention: `Less` means the first argument
//! comes out first.
//!
//! A comparator that is not a total order never makes either sort panic or
//! lose elements; the output is then a permutation of the input in no
//! particular order.

pub mod heap;
pub mod quick;

pub use heap::HeapSort;
pub use quick::QuickSort;

use crate::cursor::Cursor;
use crate::error::LazyError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Natural ascending order; incomparable values (NaN) compare equal
pub fn natural_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Which algorithm a sort runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Heapify in O(n), then O(log n) per element pulled
    #[default]
    Heap,
    /// Iterative three-way quicksort with median-of-three pivots
    Quick,
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Heap => write!(f, "heap"),
            SortAlgorithm::Quick => write!(f, "quick"),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = LazyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heap" | "heapsort" => Ok(SortAlgorithm::Heap),
            "quick" | "quicksort" => Ok(SortAlgorithm::Quick),
            _ => Err(LazyError::UnknownSortAlgorithm(s.to_string())),
        }
    }
}

/// Sorted cursor whose algorithm is chosen at runtime
pub enum Sorted<C: Cursor, F> {
    Heap(HeapSort<C, F>),
    Quick(QuickSort<C, F>),
}

impl<C, F> Sorted<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    pub fn new(upstream: C, algorithm: SortAlgorithm, compare: F) -> Self {
        match algorithm {
            SortAlgorithm::Heap => Sorted::Heap(HeapSort::new(upstream, compare)),
            SortAlgorithm::Quick => Sorted::Quick(QuickSort::new(upstream, compare)),
        }
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        match self {
            Sorted::Heap(_) => SortAlgorithm::Heap,
            Sorted::Quick(_) => SortAlgorithm::Quick,
        }
    }
}

impl<C, F> Cursor for Sorted<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        match self {
            Sorted::Heap(sort) => sort.advance(),
            Sorted::Quick(sort) => sort.advance(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cmp::Ordering;

    /// Deterministic pseudo-random values (64-bit LCG)
    pub fn scrambled(len: usize, modulus: u64, seed: u64) -> Vec<u64> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 33) % modulus
            })
            .collect()
    }

    /// Check `output` is a permutation of `input` ordered by `compare`
    pub fn assert_sorted_permutation<T, F>(input: &[T], output: &[T], mut compare: F)
    where
        T: Ord + Clone + std::fmt::Debug,
        F: FnMut(&T, &T) -> Ordering,
    {
        for pair in output.windows(2) {
            assert_ne!(
                compare(&pair[0], &pair[1]),
                Ordering::Greater,
                "out of order: {:?}",
                pair
            );
        }
        let mut expected = input.to_vec();
        let mut actual = output.to_vec();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected, "not a permutation of the input");
    }
}
