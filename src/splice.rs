use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Passing through elements before `start`
    Head,
    /// Discarding `delete_count` elements
    Delete,
    /// Yielding the inserted items
    Insert,
    /// Passing through whatever the upstream has left
    Tail,
}

/// Cursor emulating `splice` over a forward-only stream
///
/// Yields the first `start` upstream elements, discards the next
/// `delete_count`, yields the inserted items and then the rest of the
/// upstream. An upstream shorter than `start` simply ends the head early;
/// the inserted items still follow.
pub struct Splice<C, I> {
    upstream: C,
    start: usize,
    delete_count: usize,
    items: I,
    position: usize,
    phase: Phase,
}

impl<C, I> Splice<C, I>
where
    I: Iterator,
{
    pub fn new<T>(upstream: C, start: usize, delete_count: usize, items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Splice {
            upstream,
            start,
            delete_count,
            items: items.into_iter(),
            position: 0,
            phase: Phase::Head,
        }
    }
}

impl<C, I> Cursor for Splice<C, I>
where
    C: Cursor,
    I: Iterator<Item = C::Item>,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Head => {
                    if self.position < self.start {
                        if let Some(item) = self.upstream.advance() {
                            self.position += 1;
                            return Some(item);
                        }
                    }
                    self.phase = Phase::Delete;
                }
                Phase::Delete => {
                    for _ in 0..self.delete_count {
                        if self.upstream.advance().is_none() {
                            break;
                        }
                    }
                    self.phase = Phase::Insert;
                }
                Phase::Insert => match self.items.next() {
                    Some(item) => return Some(item),
                    None => self.phase = Phase::Tail,
                },
                Phase::Tail => return self.upstream.advance(),
            }
        }
    }
}

/// Convenience function to create a Splice cursor
pub fn splice<C, T>(
    upstream: C,
    start: usize,
    delete_count: usize,
    items: T,
) -> Splice<C, T::IntoIter>
where
    C: Cursor,
    T: IntoIterator<Item = C::Item>,
{
    Splice::new(upstream, start, delete_count, items)
}
