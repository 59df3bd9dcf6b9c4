use crate::cursor::Cursor;

/// Pass-through cursor that calls an inspector on every element
///
/// The inspector runs when the element is pulled, not when the cursor is
/// built, and sees each element exactly once.
pub struct ForEach<C, F> {
    upstream: C,
    inspector: F,
}

impl<C, F> ForEach<C, F> {
    pub fn new(upstream: C, inspector: F) -> Self {
        ForEach {
            upstream,
            inspector,
        }
    }
}

impl<C, F> Cursor for ForEach<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.upstream.advance()?;
        (self.inspector)(&item);
        Some(item)
    }
}

/// Convenience function to create a ForEach cursor
pub fn for_each<C, F>(upstream: C, inspector: F) -> ForEach<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    ForEach::new(upstream, inspector)
}
