use crate::cursor::Cursor;
use std::iter::Fuse;

/// Cursor that yields the unshifted items, then every upstream element
pub struct Unshift<C, I> {
    upstream: C,
    items: Fuse<I>,
}

impl<C, I> Unshift<C, I>
where
    I: Iterator,
{
    pub fn new<T>(upstream: C, items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Unshift {
            upstream,
            items: items.into_iter().fuse(),
        }
    }
}

impl<C, I> Cursor for Unshift<C, I>
where
    C: Cursor,
    I: Iterator<Item = C::Item>,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        self.items.next().or_else(|| self.upstream.advance())
    }
}

/// Convenience function to create an Unshift cursor
pub fn unshift<C, T>(upstream: C, items: T) -> Unshift<C, T::IntoIter>
where
    C: Cursor,
    T: IntoIterator<Item = C::Item>,
{
    Unshift::new(upstream, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, of};
    use std::cell::Cell;

    #[test]
    fn test_unshift_prepends_in_order() {
        assert_eq!(of([3, 4]).unshift([1, 2]).to_array(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unshift_onto_empty() {
        assert_eq!(empty().unshift(["x"]).to_array(), vec!["x"]);
    }

    #[test]
    fn test_unshift_does_not_pull_upstream_early() {
        let pulled = Cell::new(false);
        let mut cursor = of([2]).for_each(|_| pulled.set(true)).unshift([1]);
        assert_eq!(cursor.advance(), Some(1));
        assert!(!pulled.get());
        assert_eq!(cursor.advance(), Some(2));
        assert!(pulled.get());
    }

    #[test]
    fn test_function_syntax() {
        let mut cursor = unshift(empty(), [0]);
        assert_eq!(cursor.advance(), Some(0));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
    }
}
