//! The [`Sequence`] trait: chain construction and terminal evaluation.
//!
//! Implementing [`Sequence::start`] and [`Sequence::end`] is all a stage
//! needs; every adaptor and terminal below is provided on top of them.

use std::ops::Add;

use crate::concat::Concat;
use crate::cursor::{Cursor, Iter};
use crate::distinct::Distinct;
use crate::error::{QueryError, Result};
use crate::filter::Filter;
use crate::join::Join;
use crate::numeric::Average;
use crate::ordering::{Dir, OrderBy};
use crate::repeat::Repeat;
use crate::reverse::Reverse;
use crate::select::{Cloned, Select, SelectMany};
use crate::skip::{Skip, SkipWhile};
use crate::take::{Take, TakeWhile};

/// A lazily evaluated sequence of elements.
///
/// Building a chain never touches the data. Work happens only while a
/// terminal (or an [`Iter`]) walks the cursors from [`start`](Self::start)
/// to [`end`](Self::end), and each call to `start` begins an independent
/// traversal.
///
/// # Example
///
/// ```
/// use standout_linq::{from, Sequence};
///
/// let words = ["pear", "fig", "apple", "kiwi", "fig"];
/// let short = from(&words)
///     .filter(|w| w.len() <= 4)
///     .distinct()
///     .order_by_ascending(|w| **w)
///     .cloned()
///     .to_vec();
///
/// assert_eq!(short, vec!["fig", "kiwi", "pear"]);
/// ```
pub trait Sequence: Sized {
    /// The element type yielded by a traversal.
    type Item;

    /// The cursor type of a traversal.
    type Cursor: Cursor<Item = Self::Item>;

    /// Begins a traversal, positioned on the first element.
    fn start(&self) -> Self::Cursor;

    /// Returns the cursor every traversal of this sequence ends on.
    fn end(&self) -> Self::Cursor;

    /// Walks one traversal as a standard iterator.
    fn iter(&self) -> Iter<Self::Cursor> {
        Iter::new(self.start(), self.end())
    }

    // ========================================================================
    // Adaptors
    // ========================================================================

    /// Keeps the elements for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Drops elements equal to an earlier element.
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: PartialEq,
    {
        Distinct::new(self)
    }

    /// Maps every element through `transform`.
    fn select<F, U>(self, transform: F) -> Select<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Select::new(self, transform)
    }

    /// Clones borrowed elements into owned values.
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sequence<Item = &'a T>,
        T: Clone + 'a,
    {
        Cloned::new(self)
    }

    /// Maps every element to a sequence and flattens the results.
    fn select_many<F, T>(self, transform: F) -> SelectMany<Self, F>
    where
        F: Fn(Self::Item) -> T,
        T: Sequence,
    {
        SelectMany::new(self, transform)
    }

    /// Yields the elements last to first.
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    /// Yields at most `count` elements.
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }

    /// Yields elements until `predicate` first returns `false`.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Skips the first `count` elements.
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }

    /// Skips elements while `predicate` returns `true`.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Appends `other` after this sequence.
    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    /// Replays this sequence `count` more times after the first pass.
    fn repeat(self, count: usize) -> Repeat<Self> {
        Repeat::new(self, count)
    }

    /// Pairs elements of this sequence with elements of `inner` whose keys
    /// match, combining each pair with `combine`.
    ///
    /// The inner sequence is scanned forward from where the previous match
    /// left off and rewound only after a full pass; see [`Join`].
    fn join<B, KA, KB, F, K, R>(
        self,
        inner: B,
        outer_key: KA,
        inner_key: KB,
        combine: F,
    ) -> Join<Self, B, KA, KB, F, K>
    where
        B: Sequence,
        KA: Fn(&Self::Item) -> K,
        KB: Fn(&B::Item) -> K,
        K: PartialEq,
        F: Fn(Self::Item, B::Item) -> R,
    {
        Join::new(self, inner, outer_key, inner_key, combine)
    }

    /// Sorts by `key` in direction `dir`. Ties keep their source order.
    ///
    /// The key is returned by value, so it cannot borrow from the element
    /// passed to `key`. `Copy` fields and `&'static` data work directly;
    /// owned fields such as `String` must be cloned into the key:
    ///
    /// ```rust
    /// use standout_linq::{from, Dir, Sequence};
    ///
    /// struct User {
    ///     name: String,
    /// }
    ///
    /// let users = vec![
    ///     User { name: "mo".to_string() },
    ///     User { name: "al".to_string() },
    /// ];
    ///
    /// let names = from(&users)
    ///     .order_by(|u| u.name.clone(), Dir::Asc)
    ///     .select(|u| u.name.as_str())
    ///     .to_vec();
    /// assert_eq!(names, vec!["al", "mo"]);
    /// ```
    fn order_by<KS, K>(self, key: KS, dir: Dir) -> OrderBy<Self, KS, K>
    where
        Self::Item: Clone,
        KS: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        OrderBy::new(self, key, dir)
    }

    /// Shorthand for `order_by(key, Dir::Asc)`.
    fn order_by_ascending<KS, K>(self, key: KS) -> OrderBy<Self, KS, K>
    where
        Self::Item: Clone,
        KS: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        self.order_by(key, Dir::Asc)
    }

    /// Shorthand for `order_by(key, Dir::Desc)`.
    fn order_by_descending<KS, K>(self, key: KS) -> OrderBy<Self, KS, K>
    where
        Self::Item: Clone,
        KS: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        self.order_by(key, Dir::Desc)
    }

    // ========================================================================
    // Terminals
    // ========================================================================

    /// Adds every element, seeding with the first. Empty yields the default.
    fn sum(&self) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item> + Default,
    {
        self.aggregate(|acc, item| acc + item)
    }

    /// The smallest element; the first wins among equals. Empty yields the
    /// default.
    fn min(&self) -> Self::Item
    where
        Self::Item: PartialOrd + Default,
    {
        self.aggregate(|best, item| if item < best { item } else { best })
    }

    /// The largest element; the first wins among equals. Empty yields the
    /// default.
    fn max(&self) -> Self::Item
    where
        Self::Item: PartialOrd + Default,
    {
        self.aggregate(|best, item| if best < item { item } else { best })
    }

    /// The arithmetic mean, promoted per [`Average`]. Empty yields zero.
    fn average(&self) -> <Self::Item as Average>::Output
    where
        Self::Item: Average,
    {
        <Self::Item as Average>::average(self.iter())
    }

    /// Folds the elements with `f`, using the first element as the initial
    /// accumulator. Empty yields the default.
    fn aggregate<F>(&self, f: F) -> Self::Item
    where
        Self::Item: Default,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut iter = self.iter();
        match iter.next() {
            Some(first) => iter.fold(first, f),
            None => Default::default(),
        }
    }

    /// The first element, or `default` when empty.
    fn first(&self, default: Self::Item) -> Self::Item {
        self.iter().next().unwrap_or(default)
    }

    /// The first element satisfying `predicate`, or `default`.
    fn first_where<P>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().find(predicate).unwrap_or(default)
    }

    /// The last element, or `default` when empty.
    fn last(&self, default: Self::Item) -> Self::Item {
        self.iter().last().unwrap_or(default)
    }

    /// The last element satisfying `predicate`, or `default`.
    fn last_where<P>(&self, predicate: P, default: Self::Item) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().filter(predicate).last().unwrap_or(default)
    }

    /// Returns `true` if any element satisfies `predicate`. Stops at the
    /// first match; empty yields `false`.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    /// Returns `true` if every element satisfies `predicate`. Stops at the
    /// first failure; empty yields `true`.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    /// Number of elements.
    fn count(&self) -> usize {
        self.iter().count()
    }

    /// Number of elements satisfying `predicate`.
    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().filter(predicate).count()
    }

    /// The element at zero-based `index`, or `default` when out of range.
    fn element_at(&self, index: usize, default: Self::Item) -> Self::Item {
        self.iter().nth(index).unwrap_or(default)
    }

    /// Collects every element in traversal order.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }

    // ========================================================================
    // Checked terminals
    // ========================================================================

    /// The first element, or [`QueryError::Empty`].
    fn try_first(&self) -> Result<Self::Item> {
        self.iter().next().ok_or(QueryError::Empty)
    }

    /// The last element, or [`QueryError::Empty`].
    fn try_last(&self) -> Result<Self::Item> {
        self.iter().last().ok_or(QueryError::Empty)
    }

    /// The element at `index`, or [`QueryError::IndexOutOfRange`] carrying
    /// the sequence length.
    fn try_element_at(&self, index: usize) -> Result<Self::Item> {
        let mut len = 0;
        for item in self.iter() {
            if len == index {
                return Ok(item);
            }
            len += 1;
        }
        Err(QueryError::IndexOutOfRange { index, len })
    }
}
