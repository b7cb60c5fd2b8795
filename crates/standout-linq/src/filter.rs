//! Filtering stage.

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Keeps only the elements satisfying a predicate. Streaming; no buffering.
///
/// Created by [`Sequence::filter`].
pub struct Filter<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Filter {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for Filter<S, P> {
    fn clone(&self) -> Self {
        Filter {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

/// Cursor for [`Filter`]. Always rests on a passing element or the end.
pub struct FilterCursor<C, P> {
    pos: C,
    end: C,
    predicate: Rc<P>,
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    fn seek_match(&mut self) {
        while self.pos != self.end && !(self.predicate)(&self.pos.read()) {
            self.pos.advance();
        }
    }
}

impl<C: Clone, P> Clone for FilterCursor<C, P> {
    fn clone(&self) -> Self {
        FilterCursor {
            pos: self.pos.clone(),
            end: self.end.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<C: PartialEq, P> PartialEq for FilterCursor<C, P> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) {
        self.pos.advance();
        self.seek_match();
    }

    fn read(&self) -> C::Item {
        self.pos.read()
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn start(&self) -> Self::Cursor {
        let mut cursor = FilterCursor {
            pos: self.source.start(),
            end: self.source.end(),
            predicate: Rc::clone(&self.predicate),
        };
        cursor.seek_match();
        cursor
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        FilterCursor {
            pos: end.clone(),
            end,
            predicate: Rc::clone(&self.predicate),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from, range, Sequence};

    #[test]
    fn keeps_matching_in_order() {
        let items = vec![5, 1, 8, 2, 9];
        let result = from(&items).filter(|n| **n > 4).cloned().to_vec();
        assert_eq!(result, vec![5, 8, 9]);
    }

    #[test]
    fn skips_leading_failures_at_start() {
        let seq = range(1, 10).filter(|n| n % 7 == 0);
        assert_eq!(seq.first(0), 7);
        assert_eq!(seq.to_vec(), vec![7]);
    }

    #[test]
    fn nothing_passes() {
        let seq = range(1, 5).filter(|_| false);
        assert!(seq.start() == seq.end());
        assert!(seq.to_vec().is_empty());
    }

    #[test]
    fn stacked_filters() {
        let result = range(1, 30)
            .filter(|n| n % 2 == 0)
            .filter(|n| n % 3 == 0)
            .to_vec();
        assert_eq!(result, vec![6, 12, 18, 24, 30]);
    }
}
