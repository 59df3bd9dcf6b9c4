use crate::cursor::{Cursor, materialize};
use std::cmp::Ordering;
use std::collections::VecDeque;
use tracing::trace;

/// Pending range of the sort buffer, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    /// Leaves are already in final order and are yielded element by element
    leaf: bool,
    first: usize,
    last: usize,
}

impl Frame {
    fn range(first: usize, last: usize) -> Self {
        Frame {
            leaf: first == last,
            first,
            last,
        }
    }
}

/// Lazy three-way quicksort
///
/// Recursion is replaced by an explicit stack of frames. A non-leaf frame is
/// partitioned around a median-of-three pivot into less / equal / greater
/// ranges, pushed so that the leftmost range is on top. The equal range is a
/// leaf and needs no further work, which keeps duplicate-heavy input from
/// going quadratic. Worst case remains O(n²) for adversarial input since the
/// pivot choice is deterministic.
///
/// Ranges are consumed strictly left to right, so yielded elements are
/// popped off the front of the buffer and frame bounds are offset by the
/// number already yielded.
pub struct QuickSort<C: Cursor, F> {
    upstream: Option<C>,
    buffer: VecDeque<C::Item>,
    stack: Vec<Frame>,
    yielded: usize,
    compare: F,
}

impl<C, F> QuickSort<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    pub fn new(upstream: C, compare: F) -> Self {
        QuickSort {
            upstream: Some(upstream),
            buffer: VecDeque::new(),
            stack: Vec::new(),
            yielded: 0,
            compare,
        }
    }

    fn load(&mut self, upstream: C) {
        self.buffer = VecDeque::from(materialize(upstream));
        trace!(len = self.buffer.len(), "loaded quicksort buffer");
        if !self.buffer.is_empty() {
            self.stack.push(Frame::range(0, self.buffer.len() - 1));
        }
    }

    fn partition(&mut self, frame: Frame) {
        let lo = frame.first - self.yielded;
        let hi = frame.last - self.yielded;
        let (less, greater) =
            partition3(&mut self.buffer.make_contiguous()[lo..=hi], &mut self.compare);
        trace!(
            first = frame.first,
            last = frame.last,
            less,
            greater,
            "partitioned range"
        );

        let len = hi - lo + 1;
        if greater < len {
            self.stack.push(Frame::range(frame.first + greater, frame.last));
        }
        self.stack.push(Frame {
            leaf: true,
            first: frame.first + less,
            last: frame.first + greater - 1,
        });
        if less > 0 {
            self.stack.push(Frame::range(frame.first, frame.first + less - 1));
        }
    }
}

impl<C, F> Cursor for QuickSort<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<Self::Item> {
        if let Some(upstream) = self.upstream.take() {
            self.load(upstream);
        }

        loop {
            let frame = self.stack.pop()?;
            if !frame.leaf {
                self.partition(frame);
                continue;
            }

            if frame.first < frame.last {
                self.stack.push(Frame {
                    first: frame.first + 1,
                    ..frame
                });
            }
            self.yielded += 1;
            return self.buffer.pop_front();
        }
    }
}

/// Order `items[0]` <= `items[mid]` <= `items[last]` and move the median to the front
fn median_to_front<T, F>(items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mid = items.len() / 2;
    let last = items.len() - 1;
    if compare(&items[mid], &items[0]) == Ordering::Less {
        items.swap(mid, 0);
    }
    if compare(&items[last], &items[0]) == Ordering::Less {
        items.swap(last, 0);
    }
    if compare(&items[last], &items[mid]) == Ordering::Less {
        items.swap(last, mid);
    }
    items.swap(0, mid);
}

/// Swap the `len` elements starting at `a` with the `len` starting at `b`
fn swap_blocks<T>(items: &mut [T], a: usize, b: usize, len: usize) {
    for offset in 0..len {
        items.swap(a + offset, b + offset);
    }
}

/// Three-way partition in a single scan
///
/// The pivot (median of three, parked at index 0) splits `items` into
/// less / equal / greater. Equal elements met during the scan are swapped to
/// the two ends of the slice and moved next to the pivot afterwards.
///
/// Returns `(less, greater)`: `items[..less]` precede the pivot,
/// `items[less..greater]` tie with it and `items[greater..]` follow it.
/// The equal range always holds at least the pivot. Requires
/// `items.len() >= 2`.
pub(crate) fn partition3<T, F>(items: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    median_to_front(items, compare);

    // [0, a) equal | [a, b) less | [b, c] unscanned | (c, d] greater | (d, len) equal
    let (mut a, mut b) = (1, 1);
    let (mut c, mut d) = (len - 1, len - 1);

    loop {
        while b <= c {
            match compare(&items[b], &items[0]) {
                Ordering::Greater => break,
                Ordering::Equal => {
                    items.swap(a, b);
                    a += 1;
                }
                Ordering::Less => {}
            }
            b += 1;
        }
        if b > c {
            break;
        }

        // items[b] is greater
        while c > b {
            match compare(&items[c], &items[0]) {
                Ordering::Less => break,
                Ordering::Equal => {
                    items.swap(c, d);
                    d -= 1;
                }
                Ordering::Greater => {}
            }
            c -= 1;
        }
        if c == b {
            c -= 1;
            break;
        }

        items.swap(b, c);
        b += 1;
        c -= 1;
    }

    let less = b - a;
    let greater = d - c;

    let left = a.min(less);
    swap_blocks(items, 0, b - left, left);

    let right = greater.min(len - 1 - d);
    swap_blocks(items, b, len - right, right);

    (less, len - greater)
}

/// Convenience function to create a QuickSort cursor
pub fn quick_sort<C, F>(upstream: C, compare: F) -> QuickSort<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    QuickSort::new(upstream, compare)
}
