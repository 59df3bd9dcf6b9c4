use crate::cursor::Cursor;

/// Cursor that yields only the upstream elements accepted by a predicate
pub struct Filter<C, F> {
    upstream: C,
    predicate: F,
}

impl<C, F> Filter<C, F> {
    pub fn new(upstream: C, predicate: F) -> Self {
        Filter {
            upstream,
            predicate,
        }
    }
}

impl<C, F> Cursor for Filter<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.upstream.advance() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

/// Convenience function to create a Filter cursor
pub fn filter<C, F>(upstream: C, predicate: F) -> Filter<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    Filter::new(upstream, predicate)
}
