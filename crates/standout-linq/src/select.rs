//! Projection stages: one-to-one ([`Select`], [`Cloned`]) and one-to-many
//! ([`SelectMany`]).

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;

// ============================================================================
// Select
// ============================================================================

/// Applies a transform to every element. Created by [`Sequence::select`].
///
/// The transform runs on each [`Cursor::read`], not on advance.
pub struct Select<S, F> {
    source: S,
    transform: Rc<F>,
}

impl<S, F> Select<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        Select {
            source,
            transform: Rc::new(transform),
        }
    }
}

impl<S: Clone, F> Clone for Select<S, F> {
    fn clone(&self) -> Self {
        Select {
            source: self.source.clone(),
            transform: Rc::clone(&self.transform),
        }
    }
}

/// Cursor for [`Select`].
pub struct SelectCursor<C, F> {
    pos: C,
    transform: Rc<F>,
}

impl<C: Clone, F> Clone for SelectCursor<C, F> {
    fn clone(&self) -> Self {
        SelectCursor {
            pos: self.pos.clone(),
            transform: Rc::clone(&self.transform),
        }
    }
}

impl<C: PartialEq, F> PartialEq for SelectCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<C, F, U> Cursor for SelectCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) {
        self.pos.advance();
    }

    fn read(&self) -> U {
        (self.transform)(self.pos.read())
    }
}

impl<S, F, U> Sequence for Select<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Cursor = SelectCursor<S::Cursor, F>;

    fn start(&self) -> Self::Cursor {
        SelectCursor {
            pos: self.source.start(),
            transform: Rc::clone(&self.transform),
        }
    }

    fn end(&self) -> Self::Cursor {
        SelectCursor {
            pos: self.source.end(),
            transform: Rc::clone(&self.transform),
        }
    }
}

// ============================================================================
// Cloned
// ============================================================================

/// Turns a sequence of `&T` into a sequence of owned `T`.
/// Created by [`Sequence::cloned`].
#[derive(Clone)]
pub struct Cloned<S> {
    source: S,
}

impl<S> Cloned<S> {
    pub(crate) fn new(source: S) -> Self {
        Cloned { source }
    }
}

/// Cursor for [`Cloned`].
#[derive(Clone, PartialEq)]
pub struct ClonedCursor<C> {
    pos: C,
}

impl<'a, C, T> Cursor for ClonedCursor<C>
where
    C: Cursor<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    fn advance(&mut self) {
        self.pos.advance();
    }

    fn read(&self) -> T {
        self.pos.read().clone()
    }
}

impl<'a, S, T> Sequence for Cloned<S>
where
    S: Sequence<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;
    type Cursor = ClonedCursor<S::Cursor>;

    fn start(&self) -> Self::Cursor {
        ClonedCursor {
            pos: self.source.start(),
        }
    }

    fn end(&self) -> Self::Cursor {
        ClonedCursor {
            pos: self.source.end(),
        }
    }
}

// ============================================================================
// SelectMany
// ============================================================================

/// Flattens the sequences returned by a transform into one sequence.
/// Created by [`Sequence::select_many`].
///
/// The transform must return a [`Sequence`]; anything else is rejected at
/// compile time. Outer elements whose inner sequence is empty are skipped.
pub struct SelectMany<S, F> {
    source: S,
    transform: Rc<F>,
}

impl<S, F> SelectMany<S, F> {
    pub(crate) fn new(source: S, transform: F) -> Self {
        SelectMany {
            source,
            transform: Rc::new(transform),
        }
    }
}

impl<S: Clone, F> Clone for SelectMany<S, F> {
    fn clone(&self) -> Self {
        SelectMany {
            source: self.source.clone(),
            transform: Rc::clone(&self.transform),
        }
    }
}

/// Cursor for [`SelectMany`].
///
/// Holds the outer position plus start/end cursors into the currently
/// active inner sequence. The inner sequence value itself is dropped once
/// its cursors are taken.
pub struct SelectManyCursor<C, F, T: Sequence> {
    outer: C,
    outer_end: C,
    transform: Rc<F>,
    inner: Option<(T::Cursor, T::Cursor)>,
}

impl<C, F, T> SelectManyCursor<C, F, T>
where
    C: Cursor,
    F: Fn(C::Item) -> T,
    T: Sequence,
{
    /// Moves the outer cursor forward until an element with a non-empty
    /// inner sequence is found, or the outer end is reached.
    fn settle(&mut self) {
        while self.outer != self.outer_end {
            let inner = (self.transform)(self.outer.read());
            let (pos, end) = (inner.start(), inner.end());
            if pos != end {
                self.inner = Some((pos, end));
                return;
            }
            self.outer.advance();
        }
        self.inner = None;
    }
}

impl<C: Clone, F, T: Sequence> Clone for SelectManyCursor<C, F, T> {
    fn clone(&self) -> Self {
        SelectManyCursor {
            outer: self.outer.clone(),
            outer_end: self.outer_end.clone(),
            transform: Rc::clone(&self.transform),
            inner: self.inner.clone(),
        }
    }
}

impl<C: PartialEq, F, T: Sequence> PartialEq for SelectManyCursor<C, F, T> {
    fn eq(&self, other: &Self) -> bool {
        if self.outer != other.outer {
            return false;
        }
        match (&self.inner, &other.inner) {
            (Some((a, _)), Some((b, _))) => a == b,
            (None, None) => true,
            _ => self.outer == self.outer_end,
        }
    }
}

impl<C, F, T> Cursor for SelectManyCursor<C, F, T>
where
    C: Cursor,
    F: Fn(C::Item) -> T,
    T: Sequence,
{
    type Item = T::Item;

    fn advance(&mut self) {
        let exhausted = match &mut self.inner {
            Some((pos, end)) => {
                pos.advance();
                pos == end
            }
            None => true,
        };

        if exhausted {
            self.outer.advance();
            self.settle();
        }
    }

    fn read(&self) -> T::Item {
        match &self.inner {
            Some((pos, _)) => pos.read(),
            None => panic!("read past the end of a flattened sequence"),
        }
    }
}

impl<S, F, T> Sequence for SelectMany<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> T,
    T: Sequence,
{
    type Item = T::Item;
    type Cursor = SelectManyCursor<S::Cursor, F, T>;

    fn start(&self) -> Self::Cursor {
        let mut cursor = SelectManyCursor {
            outer: self.source.start(),
            outer_end: self.source.end(),
            transform: Rc::clone(&self.transform),
            inner: None,
        };
        cursor.settle();
        cursor
    }

    fn end(&self) -> Self::Cursor {
        let end = self.source.end();
        SelectManyCursor {
            outer: end.clone(),
            outer_end: end,
            transform: Rc::clone(&self.transform),
            inner: None,
        }
    }
}
