//! Cursors over the keys, values or entries of a record
//!
//! A record is anything that iterates as key/value pairs: `&HashMap`,
//! `BTreeMap`, a `Vec<(K, V)>`. Elements come out in the record's own
//! iteration order.

use crate::map::Map;
use crate::source::{Source, from};

pub type Keys<I, K, V> = Map<Source<I>, fn((K, V)) -> K>;
pub type Values<I, K, V> = Map<Source<I>, fn((K, V)) -> V>;

pub fn keys<R, K, V>(record: R) -> Keys<R::IntoIter, K, V>
where
    R: IntoIterator<Item = (K, V)>,
{
    Map::new(from(record), (|(key, _): (K, V)| key) as fn((K, V)) -> K)
}

pub fn values<R, K, V>(record: R) -> Values<R::IntoIter, K, V>
where
    R: IntoIterator<Item = (K, V)>,
{
    Map::new(from(record), (|(_, value): (K, V)| value) as fn((K, V)) -> V)
}

pub fn entries<R, K, V>(record: R) -> Source<R::IntoIter>
where
    R: IntoIterator<Item = (K, V)>,
{
    from(record)
}
