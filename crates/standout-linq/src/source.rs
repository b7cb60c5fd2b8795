//! Source generators: the roots of every chain.
//!
//! - [`from`] borrows an existing container without copying it.
//! - [`from_to`] / [`range`] walk a numeric progression toward a bound.
//! - [`generate`] calls a function with increasing indices until it signals
//!   [`Generated::Finished`].

use std::rc::Rc;

use crate::cursor::Cursor;
use crate::error::{QueryError, Result};
use crate::numeric::Progression;
use crate::sequence::Sequence;

// ============================================================================
// Container source
// ============================================================================

/// A lazy view over a caller-owned slice.
///
/// Yields `&T` for each element. The container must outlive the sequence;
/// nothing is copied.
#[derive(Debug)]
pub struct FromSlice<'a, T> {
    items: &'a [T],
}

impl<'a, T> Clone for FromSlice<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for FromSlice<'a, T> {}

/// Creates a sequence over the elements of `items`.
///
/// `&Vec<T>` and arrays coerce to the slice.
///
/// ```
/// use standout_linq::{from, Sequence};
///
/// let numbers = vec![3, 1, 2];
/// let doubled = from(&numbers).select(|n| n * 2).to_vec();
/// assert_eq!(doubled, vec![6, 2, 4]);
/// ```
pub fn from<T>(items: &[T]) -> FromSlice<'_, T> {
    FromSlice { items }
}

/// Cursor over a borrowed slice.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.items, other.items) && self.pos == other.pos
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn read(&self) -> &'a T {
        &self.items[self.pos]
    }
}

impl<'a, T> Sequence for FromSlice<'a, T> {
    type Item = &'a T;
    type Cursor = SliceCursor<'a, T>;

    fn start(&self) -> Self::Cursor {
        SliceCursor {
            items: self.items,
            pos: 0,
        }
    }

    fn end(&self) -> Self::Cursor {
        SliceCursor {
            items: self.items,
            pos: self.items.len(),
        }
    }
}

// ============================================================================
// Numeric progression
// ============================================================================

/// An inclusive numeric progression from `start` toward `end`.
///
/// The step is normalized to a magnitude and always moves toward `end`.
/// Each element is `start + step * index`, clamped so it never overshoots
/// `end`; the progression stops right after producing `end` itself.
#[derive(Debug, Clone, Copy)]
pub struct FromTo<T> {
    start: T,
    end: T,
    step: T,
    empty: bool,
}

/// Creates a progression from `start` to `end` (inclusive) in increments of
/// `step`. The sign of `step` is ignored.
///
/// `start == end`, a zero step, or a NaN bound yields an empty sequence; use
/// [`try_from_to`] to have the latter two reported instead.
///
/// ```
/// use standout_linq::{from_to, Sequence};
///
/// assert_eq!(from_to(0, 10, 2).to_vec(), vec![0, 2, 4, 6, 8, 10]);
/// assert_eq!(from_to(10, 0, 2).to_vec(), vec![10, 8, 6, 4, 2, 0]);
/// assert_eq!(from_to(0, 10, 3).to_vec(), vec![0, 3, 6, 9, 10]);
/// ```
pub fn from_to<T: Progression>(start: T, end: T, step: T) -> FromTo<T> {
    let step = step.magnitude();
    let empty = step == T::zero() || start.partial_cmp(&end).is_none();

    FromTo {
        start,
        end,
        step,
        empty,
    }
}

/// Creates a progression from `start` to `end` (inclusive) with a step of one.
pub fn range<T: Progression>(start: T, end: T) -> FromTo<T> {
    from_to(start, end, T::one())
}

/// Checked form of [`from_to`].
///
/// Fails with [`QueryError::ZeroStep`] for a zero step and
/// [`QueryError::UnorderedBounds`] when the bounds cannot be compared.
pub fn try_from_to<T: Progression>(start: T, end: T, step: T) -> Result<FromTo<T>> {
    if step == T::zero() {
        return Err(QueryError::ZeroStep);
    }
    if start.partial_cmp(&end).is_none() {
        return Err(QueryError::UnorderedBounds);
    }
    Ok(from_to(start, end, step))
}

/// Cursor over a [`FromTo`] progression.
///
/// `previous` holds the element produced before this position (or `start`
/// before the first one). Once it equals the bound the traversal is over.
#[derive(Debug, Clone, Copy)]
pub struct FromToCursor<T> {
    start: T,
    end: T,
    step: T,
    index: usize,
    previous: T,
}

impl<T: Progression> FromToCursor<T> {
    fn is_end(&self) -> bool {
        self.previous == self.end
    }
}

impl<T: Progression> PartialEq for FromToCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => self.index == other.index,
            _ => false,
        }
    }
}

impl<T: Progression> Cursor for FromToCursor<T> {
    type Item = T;

    fn advance(&mut self) {
        self.previous = self.read();
        self.index += 1;
    }

    fn read(&self) -> T {
        self.start.step_toward(self.step, self.index, self.end)
    }
}

impl<T: Progression> Sequence for FromTo<T> {
    type Item = T;
    type Cursor = FromToCursor<T>;

    fn start(&self) -> Self::Cursor {
        if self.empty {
            return self.end();
        }

        FromToCursor {
            start: self.start,
            end: self.end,
            step: self.step,
            index: 0,
            previous: self.start,
        }
    }

    fn end(&self) -> Self::Cursor {
        FromToCursor {
            start: self.start,
            end: self.end,
            step: self.step,
            index: 0,
            previous: self.end,
        }
    }
}

// ============================================================================
// Generator
// ============================================================================

/// The value returned by a generator function for one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generated<T> {
    /// Produce this value and keep going.
    Value(T),
    /// The sequence is over; later indices are never requested.
    Finished,
}

impl<T> Generated<T> {
    /// Returns `true` for [`Generated::Finished`].
    pub fn is_finished(&self) -> bool {
        matches!(self, Generated::Finished)
    }
}

impl<T> From<Option<T>> for Generated<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Generated::Value(v),
            None => Generated::Finished,
        }
    }
}

/// An open-ended sequence produced by calling a function with indices
/// `0, 1, 2, ...` until it returns [`Generated::Finished`].
pub struct Generate<G> {
    generator: Rc<G>,
}

impl<G> Clone for Generate<G> {
    fn clone(&self) -> Self {
        Generate {
            generator: Rc::clone(&self.generator),
        }
    }
}

/// Creates a generated sequence.
///
/// ```
/// use standout_linq::{generate, Generated, Sequence};
///
/// let squares = generate(|i| if i < 4 { Generated::Value(i * i) } else { Generated::Finished });
/// assert_eq!(squares.to_vec(), vec![0, 1, 4, 9]);
/// ```
pub fn generate<G, T>(generator: G) -> Generate<G>
where
    G: Fn(usize) -> Generated<T>,
{
    Generate {
        generator: Rc::new(generator),
    }
}

/// Cursor over a [`Generate`] sequence, caching the last generated value.
pub struct GenerateCursor<G, T> {
    generator: Rc<G>,
    index: usize,
    current: Generated<T>,
}

impl<G, T: Clone> Clone for GenerateCursor<G, T> {
    fn clone(&self) -> Self {
        GenerateCursor {
            generator: Rc::clone(&self.generator),
            index: self.index,
            current: self.current.clone(),
        }
    }
}

impl<G, T> PartialEq for GenerateCursor<G, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current.is_finished(), other.current.is_finished()) {
            (true, true) => true,
            (false, false) => self.index == other.index,
            _ => false,
        }
    }
}

impl<G, T> Cursor for GenerateCursor<G, T>
where
    G: Fn(usize) -> Generated<T>,
    T: Clone,
{
    type Item = T;

    fn advance(&mut self) {
        self.index += 1;
        self.current = (self.generator)(self.index);
    }

    fn read(&self) -> T {
        match &self.current {
            Generated::Value(v) => v.clone(),
            Generated::Finished => panic!("read past the end of a generated sequence"),
        }
    }
}

impl<G, T> Sequence for Generate<G>
where
    G: Fn(usize) -> Generated<T>,
    T: Clone,
{
    type Item = T;
    type Cursor = GenerateCursor<G, T>;

    fn start(&self) -> Self::Cursor {
        GenerateCursor {
            generator: Rc::clone(&self.generator),
            index: 0,
            current: (self.generator)(0),
        }
    }

    fn end(&self) -> Self::Cursor {
        GenerateCursor {
            generator: Rc::clone(&self.generator),
            index: 0,
            current: Generated::Finished,
        }
    }
}
