use crate::cursor::Cursor;
use std::iter::Fuse;

/// Cursor that yields every upstream element, then the pushed items
pub struct Push<C, I> {
    upstream: C,
    items: Fuse<I>,
    upstream_done: bool,
}

impl<C, I> Push<C, I>
where
    I: Iterator,
{
    pub fn new<T>(upstream: C, items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Push {
            upstream,
            items: items.into_iter().fuse(),
            upstream_done: false,
        }
    }
}

impl<C, I> Cursor for Push<C, I>
where
    C: Cursor,
    I: Iterator<Item = C::Item>,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if !self.upstream_done {
            match self.upstream.advance() {
                Some(item) => return Some(item),
                None => self.upstream_done = true,
            }
        }
        self.items.next()
    }
}

/// Convenience function to create a Push cursor
pub fn push<C, T>(upstream: C, items: T) -> Push<C, T::IntoIter>
where
    C: Cursor,
    T: IntoIterator<Item = C::Item>,
{
    Push::new(upstream, items)
}
