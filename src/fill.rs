use crate::cursor::Cursor;
use crate::slice::positions;
use std::ops::RangeBounds;

/// Cursor that replaces the upstream elements inside a range with a value
///
/// Still one upstream pull per yielded element: the replaced element is
/// pulled and dropped, and a clone of the fill value takes its place. An
/// upstream shorter than the range is not padded.
pub struct Fill<C: Cursor> {
    upstream: C,
    value: C::Item,
    start: usize,
    end: Option<usize>,
    position: usize,
}

impl<C: Cursor> Fill<C> {
    pub fn new<R: RangeBounds<usize>>(upstream: C, value: C::Item, range: R) -> Self {
        let (start, end) = positions(&range);
        Fill {
            upstream,
            value,
            start,
            end,
            position: 0,
        }
    }

    fn in_range(&self, position: usize) -> bool {
        position >= self.start && self.end.is_none_or(|end| position < end)
    }
}

impl<C> Cursor for Fill<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.upstream.advance()?;
        let position = self.position;
        self.position += 1;

        if self.in_range(position) {
            Some(self.value.clone())
        } else {
            Some(item)
        }
    }
}

/// Convenience function to create a Fill cursor
pub fn fill<C, R>(upstream: C, value: C::Item, range: R) -> Fill<C>
where
    C: Cursor,
    C::Item: Clone,
    R: RangeBounds<usize>,
{
    Fill::new(upstream, value, range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, of};

    #[test]
    fn test_fill_everything() {
        assert_eq!(of([1, 2, 3]).fill(0, ..).to_array(), vec![0, 0, 0]);
    }

    #[test]
    fn test_fill_range() {
        let result = of([1, 2, 3, 4, 5]).fill(0, 1..3).to_array();
        assert_eq!(result, vec![1, 0, 0, 4, 5]);
    }

    #[test]
    fn test_fill_from_start_index() {
        let result = of(["a", "b", "c"]).fill("x", 2..).to_array();
        assert_eq!(result, vec!["a", "b", "x"]);
    }

    #[test]
    fn test_fill_does_not_pad() {
        assert_eq!(of([1, 2]).fill(9, 5..).to_array(), vec![1, 2]);
        assert_eq!(of([1, 2]).fill(9, 1..10).to_array(), vec![1, 9]);
        assert!(empty().fill(9, ..).to_array().is_empty());
    }

    #[test]
    fn test_fill_clones_value() {
        let result = of([String::from("a"), String::from("b")])
            .fill(String::from("z"), ..)
            .join("");
        assert_eq!(result, "zz");
    }

    #[test]
    fn test_function_syntax() {
        let mut cursor = fill(of([1, 2]), 7, ..1);
        assert_eq!(cursor.advance(), Some(7));
        assert_eq!(cursor.advance(), Some(2));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
    }
}
