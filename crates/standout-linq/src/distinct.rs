//! Duplicate removal.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Drops elements value-equal to an earlier element, keeping first
/// occurrences in order. Created by [`Sequence::distinct`].
///
/// Each traversal keeps the cursors of the elements it has yielded and
/// compares every candidate against all of them, so the cost is quadratic in
/// the number of distinct elements. Only `PartialEq` is required of the
/// elements.
#[derive(Clone)]
pub struct Distinct<S> {
    source: S,
}

impl<S> Distinct<S> {
    pub(crate) fn new(source: S) -> Self {
        Distinct { source }
    }
}

/// Cursor for [`Distinct`].
///
/// The seen-list is an append-only log shared by every clone taken during
/// one traversal. A cursor only consults the first `len` entries, which are
/// the elements it has yielded so far, so cloning costs one `Rc` bump
/// whatever the length of the log.
pub struct DistinctCursor<C> {
    pos: C,
    end: C,
    seen: Rc<RefCell<Vec<C>>>,
    len: usize,
}

impl<C: Clone> Clone for DistinctCursor<C> {
    fn clone(&self) -> Self {
        DistinctCursor {
            pos: self.pos.clone(),
            end: self.end.clone(),
            seen: Rc::clone(&self.seen),
            len: self.len,
        }
    }
}

impl<C> DistinctCursor<C>
where
    C: Cursor,
    C::Item: PartialEq,
{
    fn already_seen(&self) -> bool {
        let candidate = self.pos.read();
        self.seen.borrow()[..self.len]
            .iter()
            .any(|seen| seen.read() == candidate)
    }

    fn record(&mut self) {
        // Traversals are deterministic: a clone further along has already
        // logged this same position.
        let mut seen = self.seen.borrow_mut();
        if seen.len() == self.len {
            seen.push(self.pos.clone());
        }
        self.len += 1;
    }
}

impl<C: PartialEq> PartialEq for DistinctCursor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<C> Cursor for DistinctCursor<C>
where
    C: Cursor,
    C::Item: PartialEq,
{
    type Item = C::Item;

    fn advance(&mut self) {
        loop {
            self.pos.advance();
            if self.pos == self.end || !self.already_seen() {
                break;
            }
        }

        if self.pos != self.end {
            self.record();
        }
    }

    fn read(&self) -> C::Item {
        self.pos.read()
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: PartialEq,
{
    type Item = S::Item;
    type Cursor = DistinctCursor<S::Cursor>;

    fn start(&self) -> Self::Cursor {
        let mut cursor = DistinctCursor {
            pos: self.source.start(),
            end: self.source.end(),
            seen: Rc::default(),
            len: 0,
        };
        if cursor.pos != cursor.end {
            cursor.record();
        }
        cursor
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        DistinctCursor {
            pos: end.clone(),
            end,
            seen: Rc::default(),
            len: 0,
        }
    }
}
