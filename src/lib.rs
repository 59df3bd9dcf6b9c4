//! # LazySeq - Lazy Sequence Combinators
//!
//! Array-style operations (slice, splice, fill, push, unshift, sort, reverse)
//! over a one-pass, pull-based stream.
//!
//! Every sequence is a [`Cursor`]: it produces one element per `advance` and
//! suspends in between. Combinators wrap their upstream cursor by value, so
//! chains of any length are built without evaluating anything, and each
//! pull on the head of the chain resumes the upstream exactly as far as
//! needed. The library emphasizes:
//!
//! - **Single consumer**: composing a cursor moves it; the type system rules
//!   out two consumers pulling from the same chain
//! - **Laziness**: only `sort`, `reverse`, `pop`, `reduce_right` and `join`
//!   buffer the whole sequence, and only when first pulled
//! - **Explicit absence**: "no value" is `None`, never a sentinel element
//!
//! ```
//! use lazyseq::{Cursor, from};
//!
//! let top: Vec<u32> = from(vec![7, 3, 9, 3, 1, 8])
//!     .filter(|n| n % 2 == 1)
//!     .sort_by(|a, b| b.cmp(a))
//!     .slice(..2)
//!     .to_array();
//! assert_eq!(top, vec![9, 7]);
//! ```
//!
//! Materializing operators never return on an unbounded source.

pub mod concat;
pub mod cursor;
pub mod error;
pub mod fill;
pub mod filter;
pub mod for_each;
pub mod map;
pub mod push;
pub mod record;
pub mod reduce;
pub mod reverse;
pub mod search;
pub mod slice;
pub mod sort;
pub mod source;
pub mod splice;
pub mod unshift;

pub use concat::Concat;
pub use cursor::{Cursor, Iter};
pub use error::LazyError;
pub use fill::Fill;
pub use filter::Filter;
pub use for_each::ForEach;
pub use map::Map;
pub use push::Push;
pub use record::{entries, keys, values};
pub use reverse::Reverse;
pub use slice::Slice;
pub use sort::{HeapSort, QuickSort, SortAlgorithm, Sorted, natural_order};
pub use source::{Source, empty, from, of};
pub use splice::Splice;
pub use unshift::Unshift;
