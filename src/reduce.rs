//! Folds and conversions into containers
//!
//! `reduce` and the `to_*` conversions run in a single pass. `reduce_right`
//! and `join` buffer the whole cursor first.

use crate::cursor::{Cursor, materialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::{Display, Write};
use std::hash::Hash;
use tracing::trace;

pub fn reduce<C, A, F>(mut cursor: C, initial: A, mut reducer: F) -> A
where
    C: Cursor,
    F: FnMut(A, C::Item) -> A,
{
    let mut accumulator = initial;
    while let Some(item) = cursor.advance() {
        accumulator = reducer(accumulator, item);
    }
    accumulator
}

/// Left fold that stops pulling at the first `Err`
pub fn try_reduce<C, A, E, F>(mut cursor: C, initial: A, mut reducer: F) -> Result<A, E>
where
    C: Cursor,
    F: FnMut(A, C::Item) -> Result<A, E>,
{
    let mut accumulator = initial;
    while let Some(item) = cursor.advance() {
        accumulator = reducer(accumulator, item)?;
    }
    Ok(accumulator)
}

pub fn reduce_right<C, A, F>(cursor: C, initial: A, reducer: F) -> A
where
    C: Cursor,
    F: FnMut(A, C::Item) -> A,
{
    let buffer = materialize(cursor);
    trace!(len = buffer.len(), "loaded reduce_right buffer");
    buffer.into_iter().rev().fold(initial, reducer)
}

pub fn join<C>(cursor: C, separator: &str) -> String
where
    C: Cursor,
    C::Item: Display,
{
    let buffer = materialize(cursor);
    let mut joined = String::new();
    for (i, item) in buffer.iter().enumerate() {
        if i > 0 {
            joined.push_str(separator);
        }
        // writing into a String cannot fail
        let _ = write!(joined, "{}", item);
    }
    joined
}

pub fn to_array<C: Cursor>(cursor: C) -> Vec<C::Item> {
    reduce(cursor, Vec::new(), |mut array, item| {
        array.push(item);
        array
    })
}

pub fn to_set<C>(cursor: C) -> HashSet<C::Item>
where
    C: Cursor,
    C::Item: Hash + Eq,
{
    reduce(cursor, HashSet::new(), |mut set, item| {
        set.insert(item);
        set
    })
}

/// Later elements overwrite earlier ones with the same key
pub fn to_map<C, K, V, F, G>(cursor: C, mut key: F, mut value: G) -> HashMap<K, V>
where
    C: Cursor,
    K: Hash + Eq,
    F: FnMut(&C::Item) -> K,
    G: FnMut(C::Item) -> V,
{
    cursor
        .map(|item| (key(&item), value(item)))
        .reduce(HashMap::new(), |mut map, (k, v)| {
            map.insert(k, v);
            map
        })
}

/// Like `to_map` with keys rendered through `ToString`
pub fn to_object<C, K, V, F, G>(cursor: C, mut key: F, mut value: G) -> BTreeMap<String, V>
where
    C: Cursor,
    K: ToString,
    F: FnMut(&C::Item) -> K,
    G: FnMut(C::Item) -> V,
{
    cursor
        .map(|item| (key(&item).to_string(), value(item)))
        .reduce(BTreeMap::new(), |mut object, (k, v)| {
            object.insert(k, v);
            object
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, from, of};

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: u32,
        name: &'static str,
    }

    fn records() -> Vec<Record> {
        vec![
            Record { id: 1, name: "first" },
            Record { id: 2, name: "second" },
            Record { id: 1, name: "third" },
        ]
    }

    #[test]
    fn test_reduce_sum() {
        assert_eq!(of([1, 2, 3]).reduce(0, |acc, n| acc + n), 6);
        assert_eq!(empty::<i32>().reduce(10, |acc, n| acc + n), 10);
    }

    #[test]
    fn test_reduce_left_to_right() {
        let result = of(["a", "b", "c"]).reduce(String::new(), |acc, s| acc + s);
        assert_eq!(result, "abc");
    }

    #[test]
    fn test_reduce_right() {
        let result = of(["a", "b", "c"]).reduce_right(String::new(), |acc, s| acc + s);
        assert_eq!(result, "cba");
        assert_eq!(empty::<i32>().reduce_right(1, |acc, n| acc * n), 1);
    }

    #[test]
    fn test_try_reduce_ok() {
        let result: Result<i32, String> = of([1, 2, 3]).try_reduce(0, |acc, n| Ok(acc + n));
        assert_eq!(result, Ok(6));
    }

    #[test]
    fn test_try_reduce_stops_at_error() {
        let mut source = of([1, 2, -1, 4]);
        let result = try_reduce(&mut source, 0, |acc, n| {
            if n < 0 {
                Err(format!("negative element {}", n))
            } else {
                Ok(acc + n)
            }
        });
        assert_eq!(result, Err("negative element -1".to_string()));
        assert_eq!(source.advance(), Some(4));
    }

    #[test]
    fn test_join() {
        assert_eq!(of([1, 2, 3]).join(", "), "1, 2, 3");
        assert_eq!(of(["solo"]).join("-"), "solo");
        assert_eq!(empty::<i32>().join(","), "");
    }

    #[test]
    fn test_to_array_by() {
        let names = from(records()).to_array_by(|r| r.name);
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_to_set() {
        let set = of([3, 1, 3, 2, 1]).to_set();
        assert_eq!(set, HashSet::from([1, 2, 3]));
        let ids = from(records()).to_set_by(|r| r.id);
        assert_eq!(ids, HashSet::from([1, 2]));
    }

    #[test]
    fn test_to_map_last_write_wins() {
        let map = from(records()).to_map(|r| r.id);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1].name, "third");
        assert_eq!(map[&2].name, "second");
    }

    #[test]
    fn test_to_map_with_value_selector() {
        let map = from(records()).to_map_with(|r| r.id, |r| r.name);
        assert_eq!(map, HashMap::from([(1, "third"), (2, "second")]));
    }

    #[test]
    fn test_to_object() {
        let object = from(records()).to_object(|r| r.id);
        assert_eq!(
            object.keys().cloned().collect::<Vec<_>>(),
            vec!["1".to_string(), "2".to_string()]
        );
        assert_eq!(object["1"].name, "third");

        let names = from(records()).to_object_with(|r| r.name, |r| r.id);
        assert_eq!(names["second"], 2);
    }
}
