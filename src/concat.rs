use crate::cursor::Cursor;

/// Cursor that yields all of the first cursor, then all of the second
pub struct Concat<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A, B> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Concat {
            first,
            second,
            first_done: false,
        }
    }
}

impl<A, B> Cursor for Concat<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if !self.first_done {
            match self.first.advance() {
                Some(item) => return Some(item),
                None => self.first_done = true,
            }
        }
        self.second.advance()
    }
}

/// Convenience function to create a Concat cursor
pub fn concat<A, B>(first: A, second: B) -> Concat<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    Concat::new(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, from, of};

    #[test]
    fn test_concat() {
        let result = of([1, 2]).concat(from(vec![3, 4])).to_array();
        assert_eq!(result, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_concat_with_empty() {
        assert_eq!(empty().concat(of([1])).to_array(), vec![1]);
        assert_eq!(of([1]).concat(empty()).to_array(), vec![1]);
    }

    #[test]
    fn test_concat_of_chains() {
        let evens = from(0..10).filter(|n| n % 2 == 0);
        let odds = from(0..10).filter(|n| n % 2 == 1).map(|n| n * 100);
        let result = evens.concat(odds).slice(3..7).to_array();
        assert_eq!(result, vec![6, 8, 100, 300]);
    }

    #[test]
    fn test_function_syntax() {
        let mut cursor = concat(of(['a']), of(['b']));
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
    }
}
