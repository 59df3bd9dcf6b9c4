use crate::concat::Concat;
use crate::fill::Fill;
use crate::filter::Filter;
use crate::for_each::ForEach;
use crate::map::Map;
use crate::push::Push;
use crate::reverse::Reverse;
use crate::slice::Slice;
use crate::sort::{HeapSort, QuickSort, SortAlgorithm, Sorted, natural_order};
use crate::splice::Splice;
use crate::unshift::Unshift;
use crate::{reduce, search};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::ops::RangeBounds;

/// Single-consumer, pull-based sequence
///
/// A cursor yields its elements one `advance` at a time and suspends in
/// between. Every combinator wraps its upstream cursor by value, so a chain
/// is a linear list of owned cursors that is evaluated only when the head is
/// pulled.
///
/// Implementations must be fused: once `advance` has returned `None` it must
/// keep returning `None`. All cursors in this crate uphold that.
pub trait Cursor: Sized {
    /// The type of elements this cursor yields
    type Item;

    /// Pull the next element, or `None` once the sequence is exhausted
    fn advance(&mut self) -> Option<Self::Item>;

    /// Bridge into `std::iter::Iterator`
    fn iter(self) -> Iter<Self> {
        Iter::new(self)
    }

    /// Borrow the cursor so a chain can be built without giving it up
    fn by_ref(&mut self) -> &mut Self {
        self
    }

    // Adaptors

    /// Keep only the elements the predicate accepts
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transform every element
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, mapper)
    }

    /// Yield the elements at positions inside `range`
    ///
    /// Elements before the range are pulled and dropped. Nothing is pulled
    /// past the end of the range.
    fn slice<R>(self, range: R) -> Slice<Self>
    where
        R: RangeBounds<usize>,
    {
        Slice::new(self, range)
    }

    /// Drop `delete_count` elements at `start` and yield `items` in their place
    fn splice<I>(self, start: usize, delete_count: usize, items: I) -> Splice<Self, I::IntoIter>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        Splice::new(self, start, delete_count, items)
    }

    /// Replace every element inside `range` with a clone of `value`
    fn fill<R>(self, value: Self::Item, range: R) -> Fill<Self>
    where
        Self::Item: Clone,
        R: RangeBounds<usize>,
    {
        Fill::new(self, value, range)
    }

    /// Append `items` after the last element
    fn push<I>(self, items: I) -> Push<Self, I::IntoIter>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        Push::new(self, items)
    }

    /// Prepend `items` before the first element
    fn unshift<I>(self, items: I) -> Unshift<Self, I::IntoIter>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        Unshift::new(self, items)
    }

    /// Yield all of `self`, then all of `other`
    fn concat<C>(self, other: C) -> Concat<Self, C>
    where
        C: Cursor<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    /// Call `inspector` on each element as it passes through
    ///
    /// Lazy: nothing runs until the chain is pulled.
    fn for_each<F>(self, inspector: F) -> ForEach<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        ForEach::new(self, inspector)
    }

    // Materializing operators

    /// Sort in natural ascending order with the default algorithm
    fn sort(self) -> Sorted<Self, fn(&Self::Item, &Self::Item) -> Ordering>
    where
        Self::Item: PartialOrd,
    {
        self.sort_using(
            SortAlgorithm::default(),
            natural_order::<Self::Item> as fn(&Self::Item, &Self::Item) -> Ordering,
        )
    }

    /// Sort with a comparator using the default algorithm
    fn sort_by<F>(self, compare: F) -> Sorted<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.sort_using(SortAlgorithm::default(), compare)
    }

    /// Sort with a comparator using the given algorithm
    fn sort_using<F>(self, algorithm: SortAlgorithm, compare: F) -> Sorted<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Sorted::new(self, algorithm, compare)
    }

    fn heap_sort_by<F>(self, compare: F) -> HeapSort<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        HeapSort::new(self, compare)
    }

    fn quick_sort_by<F>(self, compare: F) -> QuickSort<Self, F>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        QuickSort::new(self, compare)
    }

    /// Yield the elements last to first
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    // Single item retrieval

    /// Pull exactly one element, leaving the rest pullable
    fn shift(&mut self) -> Option<Self::Item> {
        search::shift(self)
    }

    /// Drain the cursor and return its last element
    fn pop(self) -> Option<Self::Item> {
        search::pop(self)
    }

    // Search

    fn every<F>(&mut self, condition: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        search::every(self, condition)
    }

    fn some<F>(&mut self, condition: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        search::some(self, condition)
    }

    fn find<F>(&mut self, condition: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        search::find(self, condition)
    }

    fn includes(&mut self, target: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        search::includes(self, target)
    }

    // Reduction and conversion

    /// Fold left to right in a single pass
    fn reduce<A, F>(self, initial: A, reducer: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        reduce::reduce(self, initial, reducer)
    }

    /// Fold left to right, stopping at the first error the reducer returns
    fn try_reduce<A, E, F>(self, initial: A, reducer: F) -> Result<A, E>
    where
        F: FnMut(A, Self::Item) -> Result<A, E>,
    {
        reduce::try_reduce(self, initial, reducer)
    }

    /// Fold right to left; materializes the cursor first
    fn reduce_right<A, F>(self, initial: A, reducer: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        reduce::reduce_right(self, initial, reducer)
    }

    fn join(self, separator: &str) -> String
    where
        Self::Item: Display,
    {
        reduce::join(self, separator)
    }

    fn to_array(self) -> Vec<Self::Item> {
        reduce::to_array(self)
    }

    fn to_array_by<F, U>(self, selector: F) -> Vec<U>
    where
        F: FnMut(Self::Item) -> U,
    {
        reduce::to_array(self.map(selector))
    }

    fn to_set(self) -> HashSet<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        reduce::to_set(self)
    }

    fn to_set_by<F, U>(self, selector: F) -> HashSet<U>
    where
        F: FnMut(Self::Item) -> U,
        U: Hash + Eq,
    {
        reduce::to_set(self.map(selector))
    }

    /// Key every element by `key`; the last element wins on duplicate keys
    fn to_map<K, F>(self, key: F) -> HashMap<K, Self::Item>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        reduce::to_map(self, key, |item| item)
    }

    fn to_map_with<K, V, F, G>(self, key: F, value: G) -> HashMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
        G: FnMut(Self::Item) -> V,
    {
        reduce::to_map(self, key, value)
    }

    /// Like `to_map`, with keys rendered to strings
    fn to_object<K, F>(self, key: F) -> BTreeMap<String, Self::Item>
    where
        K: ToString,
        F: FnMut(&Self::Item) -> K,
    {
        reduce::to_object(self, key, |item| item)
    }

    fn to_object_with<K, V, F, G>(self, key: F, value: G) -> BTreeMap<String, V>
    where
        K: ToString,
        F: FnMut(&Self::Item) -> K,
        G: FnMut(Self::Item) -> V,
    {
        reduce::to_object(self, key, value)
    }
}

/// Borrowing a cursor pulls from it in place, so an adaptor can consume a
/// prefix and hand the remainder back to the owner.
impl<C: Cursor> Cursor for &mut C {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }
}

/// Adapter exposing a cursor as a standard iterator
pub struct Iter<C> {
    cursor: C,
}

impl<C> Iter<C> {
    pub fn new(cursor: C) -> Self {
        Iter { cursor }
    }

    /// Give back the underlying cursor
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance()
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}

/// Drain a cursor into a buffer
pub(crate) fn materialize<C: Cursor>(mut cursor: C) -> Vec<C::Item> {
    let mut buffer = Vec::new();
    while let Some(item) = cursor.advance() {
        buffer.push(item);
    }
    buffer
}
