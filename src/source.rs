use crate::cursor::Cursor;
use std::iter::Fuse;

/// Cursor over any standard iterator
///
/// The wrapped iterator is fused, so a source never revives after it has
/// reported exhaustion even if the iterator underneath would.
pub struct Source<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> Source<I> {
    pub fn new(iter: I) -> Self {
        Source { iter: iter.fuse() }
    }
}

impl<I: Iterator> Cursor for Source<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// Wrap any iterable in a cursor
pub fn from<I>(iterable: I) -> Source<I::IntoIter>
where
    I: IntoIterator,
{
    Source::new(iterable.into_iter())
}

/// Wrap a fixed list of items in a cursor
pub fn of<T, const N: usize>(items: [T; N]) -> Source<std::array::IntoIter<T, N>> {
    Source::new(items.into_iter())
}

/// A cursor that is exhausted from the start
pub fn empty<T>() -> Source<std::iter::Empty<T>> {
    Source::new(std::iter::empty())
}
