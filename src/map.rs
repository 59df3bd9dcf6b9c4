use crate::cursor::Cursor;

/// Cursor that transforms every upstream element with a mapping function
pub struct Map<C, F> {
    upstream: C,
    mapper: F,
}

impl<C, F> Map<C, F> {
    pub fn new(upstream: C, mapper: F) -> Self {
        Map { upstream, mapper }
    }
}

impl<C, F, U> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Option<Self::Item> {
        self.upstream.advance().map(&mut self.mapper)
    }
}

/// Convenience function to create a Map cursor
pub fn map<C, F, U>(upstream: C, mapper: F) -> Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> U,
{
    Map::new(upstream, mapper)
}
