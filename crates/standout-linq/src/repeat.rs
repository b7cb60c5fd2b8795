//! Cyclic repetition.

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::trace;

/// Replays its predecessor `count` additional times after the first pass.
/// Created by [`Sequence::repeat`].
///
/// Each cycle starts a fresh traversal of the predecessor, so buffering
/// predecessors re-materialize per cycle.
pub struct Repeat<S> {
    source: Rc<S>,
    count: usize,
}

impl<S> Repeat<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Repeat {
            source: Rc::new(source),
            count,
        }
    }
}

impl<S> Clone for Repeat<S> {
    fn clone(&self) -> Self {
        Repeat {
            source: Rc::clone(&self.source),
            count: self.count,
        }
    }
}

/// Cursor for [`Repeat`].
pub struct RepeatCursor<S: Sequence> {
    source: Rc<S>,
    pos: S::Cursor,
    end: S::Cursor,
    remaining: usize,
}

impl<S: Sequence> RepeatCursor<S> {
    fn is_end(&self) -> bool {
        self.pos == self.end && self.remaining == 0
    }

    /// Restarts the predecessor while the current cycle is exhausted and
    /// cycles remain. An empty restart ends the traversal.
    fn wrap(&mut self) {
        while self.pos == self.end && self.remaining > 0 {
            self.remaining -= 1;
            trace::restarted("repeat", self.remaining);
            self.pos = self.source.start();
            self.end = self.source.end();
            if self.pos == self.end {
                self.remaining = 0;
            }
        }
    }
}

impl<S: Sequence> Clone for RepeatCursor<S> {
    fn clone(&self) -> Self {
        RepeatCursor {
            source: Rc::clone(&self.source),
            pos: self.pos.clone(),
            end: self.end.clone(),
            remaining: self.remaining,
        }
    }
}

impl<S: Sequence> PartialEq for RepeatCursor<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => self.remaining == other.remaining && self.pos == other.pos,
            _ => false,
        }
    }
}

impl<S: Sequence> Cursor for RepeatCursor<S> {
    type Item = S::Item;

    fn advance(&mut self) {
        self.pos.advance();
        self.wrap();
    }

    fn read(&self) -> S::Item {
        self.pos.read()
    }
}

impl<S: Sequence> Sequence for Repeat<S> {
    type Item = S::Item;
    type Cursor = RepeatCursor<S>;

    fn start(&self) -> Self::Cursor {
        let pos = self.source.start();
        let end = self.source.end();
        // An empty predecessor stays empty however often it is replayed.
        let remaining = if pos == end { 0 } else { self.count };

        RepeatCursor {
            source: Rc::clone(&self.source),
            pos,
            end,
            remaining,
        }
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        RepeatCursor {
            source: Rc::clone(&self.source),
            pos: end.clone(),
            end,
            remaining: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{from, generate, range, Generated, Sequence};

    #[test]
    fn replays_count_additional_times() {
        assert_eq!(range(1, 2).repeat(2).to_vec(), vec![1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn zero_is_identity() {
        assert_eq!(range(1, 3).repeat(0).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_predecessor() {
        let items: [u8; 0] = [];
        let seq = from(&items).repeat(5);
        assert!(seq.start() == seq.end());
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn restarts_predecessor_each_cycle() {
        let starts = Cell::new(0);
        let seq = generate(|i| {
            if i == 0 {
                starts.set(starts.get() + 1);
            }
            if i < 2 {
                Generated::Value(i)
            } else {
                Generated::Finished
            }
        })
        .repeat(2);
        assert_eq!(seq.to_vec(), vec![0, 1, 0, 1, 0, 1]);
        assert_eq!(starts.get(), 3);
    }

    #[test]
    fn repeat_of_buffering_stage() {
        let items = [1, 2, 3];
        let seq = from(&items).reverse().repeat(1).cloned();
        assert_eq!(seq.to_vec(), vec![3, 2, 1, 3, 2, 1]);
    }
}
