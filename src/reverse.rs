use crate::cursor::{Cursor, materialize};
use tracing::trace;

/// Cursor yielding the upstream elements last to first
///
/// The upstream is drained into a buffer on the first pull. Every element is
/// yielded, down to and including the first one.
pub struct Reverse<C: Cursor> {
    upstream: Option<C>,
    buffer: Vec<C::Item>,
}

impl<C: Cursor> Reverse<C> {
    pub fn new(upstream: C) -> Self {
        Reverse {
            upstream: Some(upstream),
            buffer: Vec::new(),
        }
    }
}

impl<C: Cursor> Cursor for Reverse<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if let Some(upstream) = self.upstream.take() {
            self.buffer = materialize(upstream);
            trace!(len = self.buffer.len(), "loaded reverse buffer");
        }
        self.buffer.pop()
    }
}

/// Convenience function to create a Reverse cursor
pub fn reverse<C: Cursor>(upstream: C) -> Reverse<C> {
    Reverse::new(upstream)
}
