//! Suffix stages: [`Skip`] and [`SkipWhile`].
//!
//! Both perform their skipping once, while building the start cursor, and
//! then hand out the predecessor's own cursor.

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Drops the first `count` elements. Created by [`Sequence::skip`].
#[derive(Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, count: usize) -> Self {
        Skip { source, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn start(&self) -> Self::Cursor {
        let mut pos = self.source.start();
        let end = self.source.end();
        for _ in 0..self.count {
            if pos == end {
                break;
            }
            pos.advance();
        }
        pos
    }

    fn end(&self) -> Self::Cursor {
        self.source.end()
    }
}

/// Drops elements while the predicate holds. Created by
/// [`Sequence::skip_while`].
pub struct SkipWhile<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        SkipWhile {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for SkipWhile<S, P> {
    fn clone(&self) -> Self {
        SkipWhile {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn start(&self) -> Self::Cursor {
        let mut pos = self.source.start();
        let end = self.source.end();
        while pos != end && (self.predicate)(&pos.read()) {
            pos.advance();
        }
        pos
    }

    fn end(&self) -> Self::Cursor {
        self.source.end()
    }
}
