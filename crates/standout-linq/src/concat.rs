//! Concatenation of two sequences.

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Yields every element of the first sequence, then every element of the
/// second. Created by [`Sequence::concat`].
#[derive(Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Concat { first, second }
    }
}

/// Cursor for [`Concat`].
///
/// Two cursors are equal once both have left the first sequence and sit at
/// the same position of the second.
#[derive(Clone)]
pub struct ConcatCursor<A, B> {
    first: A,
    first_end: A,
    second: B,
}

impl<A: PartialEq, B> ConcatCursor<A, B> {
    fn in_first(&self) -> bool {
        self.first != self.first_end
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for ConcatCursor<A, B> {
    fn eq(&self, other: &Self) -> bool {
        match (self.in_first(), other.in_first()) {
            (false, false) => self.second == other.second,
            (true, true) => self.first == other.first && self.second == other.second,
            _ => false,
        }
    }
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) {
        if self.in_first() {
            self.first.advance();
        } else {
            self.second.advance();
        }
    }

    fn read(&self) -> A::Item {
        if self.in_first() {
            self.first.read()
        } else {
            self.second.read()
        }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = ConcatCursor<A::Cursor, B::Cursor>;

    fn start(&self) -> Self::Cursor {
        ConcatCursor {
            first: self.first.start(),
            first_end: self.first.end(),
            second: self.second.start(),
        }
    }

    fn end(&self) -> Self::Cursor {
        let first_end = self.first.end();
        ConcatCursor {
            first: first_end.clone(),
            first_end,
            second: self.second.end(),
        }
    }
}
