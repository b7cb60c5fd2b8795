//! Prefix stages: [`Take`] and [`TakeWhile`].

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;

// ============================================================================
// Take
// ============================================================================

/// Yields at most `count` elements. Created by [`Sequence::take`].
#[derive(Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Take { source, count }
    }
}

/// Cursor for [`Take`].
///
/// At the end once the remaining count reaches zero or the predecessor is
/// exhausted, whichever comes first. The predecessor is not advanced past
/// the last taken element.
#[derive(Clone)]
pub struct TakeCursor<C> {
    pos: C,
    end: C,
    remaining: usize,
}

impl<C: PartialEq> TakeCursor<C> {
    fn is_end(&self) -> bool {
        self.remaining == 0 || self.pos == self.end
    }
}

impl<C: PartialEq> PartialEq for TakeCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => self.pos == other.pos,
            _ => false,
        }
    }
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) {
        self.remaining -= 1;
        if self.remaining > 0 {
            self.pos.advance();
        }
    }

    fn read(&self) -> C::Item {
        self.pos.read()
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn start(&self) -> Self::Cursor {
        TakeCursor {
            pos: self.source.start(),
            end: self.source.end(),
            remaining: self.count,
        }
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        TakeCursor {
            pos: end.clone(),
            end,
            remaining: 0,
        }
    }
}

// ============================================================================
// TakeWhile
// ============================================================================

/// Yields elements until the predicate first fails.
/// Created by [`Sequence::take_while`].
pub struct TakeWhile<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        TakeWhile {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for TakeWhile<S, P> {
    fn clone(&self) -> Self {
        TakeWhile {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

/// Cursor for [`TakeWhile`]. Jumps to the end position as soon as the
/// predicate fails and stays there.
pub struct TakeWhileCursor<C, P> {
    pos: C,
    end: C,
    predicate: Rc<P>,
}

impl<C, P> TakeWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    fn check(&mut self) {
        if self.pos != self.end && !(self.predicate)(&self.pos.read()) {
            self.pos = self.end.clone();
        }
    }
}

impl<C: Clone, P> Clone for TakeWhileCursor<C, P> {
    fn clone(&self) -> Self {
        TakeWhileCursor {
            pos: self.pos.clone(),
            end: self.end.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<C: PartialEq, P> PartialEq for TakeWhileCursor<C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<C, P> Cursor for TakeWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) {
        self.pos.advance();
        self.check();
    }

    fn read(&self) -> C::Item {
        self.pos.read()
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<S::Cursor, P>;

    fn start(&self) -> Self::Cursor {
        let mut cursor = TakeWhileCursor {
            pos: self.source.start(),
            end: self.source.end(),
            predicate: Rc::clone(&self.predicate),
        };
        cursor.check();
        cursor
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        TakeWhileCursor {
            pos: end.clone(),
            end,
            predicate: Rc::clone(&self.predicate),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from, generate, range, Generated, Sequence};

    #[test]
    fn take_prefix() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(from(&items).take(3).cloned().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn take_more_than_available() {
        let items = [1, 2];
        assert_eq!(from(&items).take(3).cloned().to_vec(), vec![1, 2]);
    }

    #[test]
    fn take_zero() {
        let seq = range(1, 5).take(0);
        assert!(seq.start() == seq.end());
    }

    #[test]
    fn take_bounds_unbounded_generator() {
        let naturals = generate(|i| Generated::Value(i));
        assert_eq!(naturals.take(4).to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn take_does_not_pull_past_last_element() {
        // The filter would never find a fourth match.
        let naturals = generate(|i| Generated::Value(i));
        let small = naturals.filter(|n| *n < 3).take(3);
        assert_eq!(small.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn take_while_stops_at_first_failure() {
        let items = [2, 4, 5, 6, 8];
        let evens = from(&items).take_while(|n| **n % 2 == 0).cloned().to_vec();
        assert_eq!(evens, vec![2, 4]);
    }

    #[test]
    fn take_while_first_fails() {
        let seq = range(1, 5).take_while(|n| *n > 10);
        assert!(seq.start() == seq.end());
    }

    #[test]
    fn take_while_all_pass() {
        assert_eq!(range(1, 3).take_while(|_| true).to_vec(), vec![1, 2, 3]);
    }
}
