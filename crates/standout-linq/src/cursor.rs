//! The cursor protocol every stage is built on.
//!
//! A [`Cursor`] is a cheap, cloneable position inside one traversal of a
//! [`Sequence`](crate::Sequence). Reaching a position equal to the
//! sequence's `end()` cursor terminates the traversal.

/// A position marker over a lazy sequence.
///
/// Advancing is the only mutation; reading never moves the cursor. Two
/// cursors taken from the same sequence compare equal when they denote the
/// same logical position. Stages are free to compare only the state that
/// matters for detecting the end, so equality between two positions that are
/// both short of the end is only as precise as each stage documents.
pub trait Cursor: Clone + PartialEq {
    /// The element type produced by [`Cursor::read`].
    type Item;

    /// Moves to the next position.
    ///
    /// Must not be called on a cursor equal to the end cursor.
    fn advance(&mut self);

    /// Returns the element at the current position.
    ///
    /// Panics (or yields an unspecified element) when called on a cursor
    /// equal to the end cursor.
    fn read(&self) -> Self::Item;
}

/// Drives a traversal between two cursors as a standard [`Iterator`].
///
/// Returned by [`Sequence::iter`](crate::Sequence::iter). Every terminal
/// operation is written on top of it.
#[derive(Clone)]
pub struct Iter<C> {
    pos: C,
    end: C,
}

impl<C: Cursor> Iter<C> {
    /// Creates an iterator yielding every element from `pos` up to `end`.
    pub fn new(pos: C, end: C) -> Self {
        Iter { pos, end }
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }

        let item = self.pos.read();
        self.pos.advance();
        Some(item)
    }
}

impl<C: Cursor> std::iter::FusedIterator for Iter<C> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Counter(u32);

    impl Cursor for Counter {
        type Item = u32;

        fn advance(&mut self) {
            self.0 += 1;
        }

        fn read(&self) -> u32 {
            self.0 * 10
        }
    }

    #[test]
    fn iter_walks_until_end() {
        let values: Vec<u32> = Iter::new(Counter(0), Counter(3)).collect();
        assert_eq!(values, vec![0, 10, 20]);
    }

    #[test]
    fn iter_empty_when_start_equals_end() {
        let mut iter = Iter::new(Counter(4), Counter(4));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
