use crate::cursor::Cursor;
use std::ops::{Bound, RangeBounds};

/// Resolve a range into a start position and an optional exclusive end
pub(crate) fn positions<R: RangeBounds<usize>>(range: &R) -> (usize, Option<usize>) {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => Some(end.saturating_add(1)),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => None,
    };
    (start, end)
}

/// Cursor over the upstream elements at positions `start..end`
///
/// The first `start` elements are pulled and discarded on the first
/// `advance`. Once `end` is reached the upstream is never pulled again, so
/// anything it still holds is left untouched.
pub struct Slice<C> {
    upstream: C,
    start: usize,
    end: Option<usize>,
    /// Number of upstream elements pulled so far
    position: usize,
    done: bool,
}

impl<C> Slice<C> {
    pub fn new<R: RangeBounds<usize>>(upstream: C, range: R) -> Self {
        let (start, end) = positions(&range);
        Slice {
            upstream,
            start,
            end,
            position: 0,
            done: false,
        }
    }
}

impl<C: Cursor> Cursor for Slice<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while self.position < self.start {
            if self.upstream.advance().is_none() {
                self.done = true;
                return None;
            }
            self.position += 1;
        }

        if self.end.is_some_and(|end| self.position >= end) {
            self.done = true;
            return None;
        }

        match self.upstream.advance() {
            Some(item) => {
                self.position += 1;
                Some(item)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Convenience function to create a Slice cursor
pub fn slice<C, R>(upstream: C, range: R) -> Slice<C>
where
    C: Cursor,
    R: RangeBounds<usize>,
{
    Slice::new(upstream, range)
}
