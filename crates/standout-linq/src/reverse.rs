//! Order reversal.

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::trace;

/// Yields the elements of its predecessor last to first.
/// Created by [`Sequence::reverse`].
///
/// Starting a traversal walks the whole predecessor once and records a
/// cursor for every position; elements are read through those cursors.
#[derive(Clone)]
pub struct Reverse<S> {
    source: S,
}

impl<S> Reverse<S> {
    pub(crate) fn new(source: S) -> Self {
        Reverse { source }
    }
}

/// Cursor for [`Reverse`].
///
/// `remaining` counts the positions still to yield; zero is both "before the
/// first element" and the end, so an empty buffer starts at the end.
pub struct ReverseCursor<C> {
    positions: Rc<[C]>,
    remaining: usize,
}

impl<C> Clone for ReverseCursor<C> {
    fn clone(&self) -> Self {
        ReverseCursor {
            positions: Rc::clone(&self.positions),
            remaining: self.remaining,
        }
    }
}

impl<C> PartialEq for ReverseCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
    }
}

impl<C: Cursor> Cursor for ReverseCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) {
        self.remaining -= 1;
    }

    fn read(&self) -> C::Item {
        self.positions[self.remaining - 1].read()
    }
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;
    type Cursor = ReverseCursor<S::Cursor>;

    fn start(&self) -> Self::Cursor {
        let mut positions = Vec::new();
        let mut pos = self.source.start();
        let end = self.source.end();
        while pos != end {
            positions.push(pos.clone());
            pos.advance();
        }
        trace::materialized("reverse", positions.len());

        ReverseCursor {
            remaining: positions.len(),
            positions: positions.into(),
        }
    }

    fn end(&self) -> Self::Cursor {
        ReverseCursor {
            positions: Rc::from(Vec::new()),
            remaining: 0,
        }
    }
}
