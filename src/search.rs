//! Single item retrieval and short-circuiting search
//!
//! Everything except `pop` stops pulling at the decisive element, so the
//! cursor keeps whatever comes after it.

use crate::cursor::Cursor;

/// Pull exactly one element
pub fn shift<C: Cursor>(cursor: &mut C) -> Option<C::Item> {
    cursor.advance()
}

/// Drain the cursor and return its last element
pub fn pop<C: Cursor>(mut cursor: C) -> Option<C::Item> {
    let mut last = None;
    while let Some(item) = cursor.advance() {
        last = Some(item);
    }
    last
}

/// True if no element fails `condition`; stops at the first one that does
pub fn every<C, F>(cursor: &mut C, mut condition: F) -> bool
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    while let Some(item) = cursor.advance() {
        if !condition(&item) {
            return false;
        }
    }
    true
}

/// True if some element satisfies `condition`; stops at the first one that does
pub fn some<C, F>(cursor: &mut C, condition: F) -> bool
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    find(cursor, condition).is_some()
}

pub fn find<C, F>(cursor: &mut C, mut condition: F) -> Option<C::Item>
where
    C: Cursor,
    F: FnMut(&C::Item) -> bool,
{
    while let Some(item) = cursor.advance() {
        if condition(&item) {
            return Some(item);
        }
    }
    None
}

pub fn includes<C>(cursor: &mut C, target: &C::Item) -> bool
where
    C: Cursor,
    C::Item: PartialEq,
{
    some(cursor, |item| item == target)
}
