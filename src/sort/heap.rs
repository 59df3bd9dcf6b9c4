use crate::cursor::{Cursor, materialize};
use std::cmp::Ordering;
use tracing::trace;

/// Lazy heapsort
///
/// On the first pull the upstream is drained and heapified bottom-up in
/// O(n). Each pull then takes the root, moves the last slot into its place
/// and sifts it back down, so the first sorted element is available without
/// sorting the whole buffer and every later one costs O(log n).
///
/// The heap keeps the element that should come out first (per the
/// comparator) at the root.
pub struct HeapSort<C: Cursor, F> {
    upstream: Option<C>,
    heap: Vec<C::Item>,
    compare: F,
}

impl<C, F> HeapSort<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    pub fn new(upstream: C, compare: F) -> Self {
        HeapSort {
            upstream: Some(upstream),
            heap: Vec::new(),
            compare,
        }
    }

    fn load(&mut self, upstream: C) {
        self.heap = materialize(upstream);
        heapify(&mut self.heap, &mut self.compare);
        trace!(len = self.heap.len(), "heapified sort buffer");
    }
}

impl<C, F> Cursor for HeapSort<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if let Some(upstream) = self.upstream.take() {
            self.load(upstream);
        }

        if self.heap.is_empty() {
            return None;
        }

        // last slot moves into the root
        let item = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            sift_down(&mut self.heap, 0, &mut self.compare);
        }
        Some(item)
    }
}

/// Arrange `heap` so every parent comes out no later than its children
pub(crate) fn heapify<T, F>(heap: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for root in (0..heap.len() / 2).rev() {
        sift_down(heap, root, compare);
    }
}

/// Restore the heap below `root`
///
/// Bottom-up variant: walk the root element all the way down along the
/// earlier child, then let it rise back to where it belongs. Cheaper than a
/// plain sift when the element ends up near the leaves, which is the common
/// case after the last slot was moved to the root.
fn sift_down<T, F>(heap: &mut [T], root: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let end = heap.len();
    let mut hole = root;

    loop {
        let mut child = 2 * hole + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && compare(&heap[child + 1], &heap[child]) == Ordering::Less {
            child += 1;
        }
        heap.swap(hole, child);
        hole = child;
    }

    sift_up(heap, root, hole, compare);
}

/// Move the element at `position` towards `root` while it precedes its parent
fn sift_up<T, F>(heap: &mut [T], root: usize, mut position: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while position > root {
        let parent = (position - 1) / 2;
        if compare(&heap[position], &heap[parent]) == Ordering::Less {
            heap.swap(position, parent);
            position = parent;
        } else {
            break;
        }
    }
}

/// Convenience function to create a HeapSort cursor
pub fn heap_sort<C, F>(upstream: C, compare: F) -> HeapSort<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    HeapSort::new(upstream, compare)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::testing::{assert_sorted_permutation, scrambled};
    use crate::source::{empty, from, of};
    use std::cell::Cell;

    fn is_heap<T, F>(heap: &[T], mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        (1..heap.len()).all(|i| compare(&heap[i], &heap[(i - 1) / 2]) != Ordering::Less)
    }

    #[test]
    fn test_heapify_builds_heap() {
        let mut data = scrambled(257, 1000, 3);
        heapify(&mut data, &mut |a: &u64, b: &u64| a.cmp(b));
        assert!(is_heap(&data, |a, b| a.cmp(b)));
        assert_eq!(data[0], *data.iter().min().unwrap());
    }

    #[test]
    fn test_heap_sort_small() {
        let result = heap_sort(of([5, 2, 8, 1, 9, 3]), |a: &i32, b: &i32| a.cmp(b)).to_array();
        assert_eq!(result, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_heap_sort_edge_sizes() {
        assert!(empty::<i32>().heap_sort_by(|a, b| a.cmp(b)).to_array().is_empty());
        assert_eq!(of([4]).heap_sort_by(|a, b| a.cmp(b)).to_array(), vec![4]);
        assert_eq!(of([4, 3]).heap_sort_by(|a, b| a.cmp(b)).to_array(), vec![3, 4]);
    }

    #[test]
    fn test_heap_sort_random_and_duplicates() {
        for (len, modulus) in [(100, 1000), (1000, 3), (513, 1), (64, 64)] {
            let input = scrambled(len, modulus, len as u64);
            let output = from(input.clone()).heap_sort_by(|a, b| a.cmp(b)).to_array();
            assert_sorted_permutation(&input, &output, |a, b| a.cmp(b));
        }
    }

    #[test]
    fn test_heap_sort_descending_comparator() {
        let input = scrambled(200, 40, 11);
        let output = from(input.clone()).heap_sort_by(|a, b| b.cmp(a)).to_array();
        assert_sorted_permutation(&input, &output, |a, b| b.cmp(a));
    }

    #[test]
    fn test_heap_sort_is_lazy() {
        let pulled = Cell::new(0);
        let mut sorted = of([3, 1, 2])
            .for_each(|_| pulled.set(pulled.get() + 1))
            .heap_sort_by(|a, b| a.cmp(b));
        assert_eq!(pulled.get(), 0);
        assert_eq!(sorted.advance(), Some(1));
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_first_element_costs_linear_comparisons() {
        let len = 1024;
        let comparisons = Cell::new(0usize);
        let mut sorted = from(scrambled(len, 1 << 20, 5)).heap_sort_by(|a, b| {
            comparisons.set(comparisons.get() + 1);
            a.cmp(b)
        });

        sorted.advance();
        let first = comparisons.get();
        while sorted.advance().is_some() {}
        let total = comparisons.get();

        assert!(first <= 4 * len, "first pull took {} comparisons", first);
        assert!(total > 2 * first);
    }

    #[test]
    fn test_inconsistent_comparator_keeps_elements() {
        let input = scrambled(300, 10, 9);
        let flip = Cell::new(false);
        let output = from(input.clone())
            .heap_sort_by(|_, _| {
                flip.set(!flip.get());
                if flip.get() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            })
            .to_array();
        let mut expected = input;
        let mut actual = output;
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_stays_done() {
        let mut sorted = of([1]).heap_sort_by(|a, b| a.cmp(b));
        assert_eq!(sorted.advance(), Some(1));
        assert_eq!(sorted.advance(), None);
        assert_eq!(sorted.advance(), None);
    }
}
