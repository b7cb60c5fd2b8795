//! Ordering stages for sequence sorting.
//!
//! Provides [`Dir`] for sort direction, [`OrderBy`] for the primary sort key
//! and [`ThenBy`] for tie-breaking keys. Both implement [`SortedSequence`],
//! which is the only place `then_by` is available.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::trace;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two keys using only `<`, then applies `dir`.
///
/// Keys that are neither less nor greater than each other (including NaN)
/// compare equal, so they fall through to the next key or keep source order.
pub fn compare_keys<K: PartialOrd>(a: &K, b: &K, dir: Dir) -> Ordering {
    let ordering = if a < b {
        Ordering::Less
    } else if b < a {
        Ordering::Greater
    } else {
        Ordering::Equal
    };
    dir.apply(ordering)
}

mod sealed {
    pub trait Sealed {}

    impl<S, KS, K> Sealed for super::OrderBy<S, KS, K> {}
    impl<P, KS, K> Sealed for super::ThenBy<P, KS, K> {}
}

/// A sequence whose traversal is sorted.
///
/// Sealed: implemented by [`OrderBy`] and [`ThenBy`] only, so `then_by`
/// cannot be applied to an unsorted sequence and [`compare`] always agrees
/// with the order a traversal yields.
///
/// [`compare`]: SortedSequence::compare
pub trait SortedSequence: Sequence + sealed::Sealed {
    /// Compares two elements under every key of the chain, first key first.
    fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering;

    /// Collects the elements of the underlying unsorted sequence.
    fn unsorted(&self) -> Vec<Self::Item>;

    /// Breaks ties left by earlier keys with `key` in direction `dir`.
    ///
    /// As with [`Sequence::order_by`], `key` returns its key by value and
    /// cannot borrow from the element. Clone owned fields such as `String`
    /// into the key.
    fn then_by<KS, K>(self, key: KS, dir: Dir) -> ThenBy<Self, KS, K>
    where
        KS: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        ThenBy {
            source: self,
            key: Rc::new(key),
            dir,
            _key: PhantomData,
        }
    }

    /// Shorthand for `then_by(key, Dir::Asc)`.
    fn then_by_ascending<KS, K>(self, key: KS) -> ThenBy<Self, KS, K>
    where
        KS: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        self.then_by(key, Dir::Asc)
    }

    /// Shorthand for `then_by(key, Dir::Desc)`.
    fn then_by_descending<KS, K>(self, key: KS) -> ThenBy<Self, KS, K>
    where
        KS: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        self.then_by(key, Dir::Desc)
    }
}

fn sorted_start<Q>(seq: &Q, stage: &'static str) -> SortedCursor<Q::Item>
where
    Q: SortedSequence,
{
    let mut items = seq.unsorted();
    items.sort_by(|a, b| seq.compare(a, b));
    trace::materialized(stage, items.len());

    SortedCursor {
        buffer: items.into(),
        pos: 0,
    }
}

/// Cursor over a sorted traversal buffer.
pub struct SortedCursor<T> {
    buffer: Rc<[T]>,
    pos: usize,
}

impl<T> SortedCursor<T> {
    fn exhausted() -> Self {
        SortedCursor {
            buffer: Rc::from(Vec::new()),
            pos: 0,
        }
    }

    fn is_end(&self) -> bool {
        self.pos >= self.buffer.len()
    }
}

impl<T> Clone for SortedCursor<T> {
    fn clone(&self) -> Self {
        SortedCursor {
            buffer: Rc::clone(&self.buffer),
            pos: self.pos,
        }
    }
}

impl<T> PartialEq for SortedCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_end(), other.is_end()) {
            (true, true) => true,
            (false, false) => Rc::ptr_eq(&self.buffer, &other.buffer) && self.pos == other.pos,
            _ => false,
        }
    }
}

impl<T: Clone> Cursor for SortedCursor<T> {
    type Item = T;

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn read(&self) -> T {
        self.buffer[self.pos].clone()
    }
}

// ============================================================================
// OrderBy
// ============================================================================

/// Sorts its predecessor by a key. Created by [`Sequence::order_by`].
///
/// Starting a traversal copies every element into a buffer and stable-sorts
/// it, so elements with equal keys keep their source order.
pub struct OrderBy<S, KS, K> {
    source: S,
    key: Rc<KS>,
    dir: Dir,
    _key: PhantomData<fn() -> K>,
}

impl<S, KS, K> OrderBy<S, KS, K> {
    pub(crate) fn new(source: S, key: KS, dir: Dir) -> Self {
        OrderBy {
            source,
            key: Rc::new(key),
            dir,
            _key: PhantomData,
        }
    }

    /// Returns the direction of this key.
    pub fn dir(&self) -> Dir {
        self.dir
    }
}

impl<S: Clone, KS, K> Clone for OrderBy<S, KS, K> {
    fn clone(&self) -> Self {
        OrderBy {
            source: self.source.clone(),
            key: Rc::clone(&self.key),
            dir: self.dir,
            _key: PhantomData,
        }
    }
}

impl<S, KS, K> Sequence for OrderBy<S, KS, K>
where
    S: Sequence,
    S::Item: Clone,
    KS: Fn(&S::Item) -> K,
    K: PartialOrd,
{
    type Item = S::Item;
    type Cursor = SortedCursor<S::Item>;

    fn start(&self) -> Self::Cursor {
        sorted_start(self, "order_by")
    }

    fn end(&self) -> Self::Cursor {
        SortedCursor::exhausted()
    }
}

impl<S, KS, K> SortedSequence for OrderBy<S, KS, K>
where
    S: Sequence,
    S::Item: Clone,
    KS: Fn(&S::Item) -> K,
    K: PartialOrd,
{
    fn compare(&self, a: &S::Item, b: &S::Item) -> Ordering {
        compare_keys(&(self.key)(a), &(self.key)(b), self.dir)
    }

    fn unsorted(&self) -> Vec<S::Item> {
        self.source.iter().collect()
    }
}

// ============================================================================
// ThenBy
// ============================================================================

/// Adds a tie-breaking key to a sorted sequence.
/// Created by [`SortedSequence::then_by`].
///
/// The whole chain is applied in one sort over the original unsorted
/// elements.
pub struct ThenBy<P, KS, K> {
    source: P,
    key: Rc<KS>,
    dir: Dir,
    _key: PhantomData<fn() -> K>,
}

impl<P, KS, K> ThenBy<P, KS, K> {
    /// Returns the direction of this key.
    pub fn dir(&self) -> Dir {
        self.dir
    }
}

impl<P: Clone, KS, K> Clone for ThenBy<P, KS, K> {
    fn clone(&self) -> Self {
        ThenBy {
            source: self.source.clone(),
            key: Rc::clone(&self.key),
            dir: self.dir,
            _key: PhantomData,
        }
    }
}

impl<P, KS, K> Sequence for ThenBy<P, KS, K>
where
    P: SortedSequence,
    P::Item: Clone,
    KS: Fn(&P::Item) -> K,
    K: PartialOrd,
{
    type Item = P::Item;
    type Cursor = SortedCursor<P::Item>;

    fn start(&self) -> Self::Cursor {
        sorted_start(self, "then_by")
    }

    fn end(&self) -> Self::Cursor {
        SortedCursor::exhausted()
    }
}

impl<P, KS, K> SortedSequence for ThenBy<P, KS, K>
where
    P: SortedSequence,
    P::Item: Clone,
    KS: Fn(&P::Item) -> K,
    K: PartialOrd,
{
    fn compare(&self, a: &P::Item, b: &P::Item) -> Ordering {
        self.source
            .compare(a, b)
            .then_with(|| compare_keys(&(self.key)(a), &(self.key)(b), self.dir))
    }

    fn unsorted(&self) -> Vec<P::Item> {
        self.source.unsorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from, range};

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert!(Dir::default().is_asc());
        assert!(Dir::Desc.is_desc());
    }

    #[test]
    fn compare_keys_nan_is_equal() {
        assert_eq!(compare_keys(&f64::NAN, &1.0, Dir::Asc), Ordering::Equal);
        assert_eq!(compare_keys(&1, &2, Dir::Desc), Ordering::Greater);
    }

    #[test]
    fn order_by_ascending_and_descending() {
        let items = [3, 1, 2];
        assert_eq!(
            from(&items).cloned().order_by_ascending(|n| *n).to_vec(),
            vec![1, 2, 3]
        );
        assert_eq!(
            from(&items).cloned().order_by_descending(|n| *n).to_vec(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn ties_keep_source_order() {
        let items = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = from(&items).order_by(|p| p.0, Dir::Asc).cloned().to_vec();
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);

        let sorted = from(&items).order_by(|p| p.0, Dir::Desc).cloned().to_vec();
        assert_eq!(sorted, vec![(1, 'a'), (1, 'c'), (0, 'b'), (0, 'd')]);
    }

    #[test]
    fn then_by_breaks_ties() {
        let items = [(1, "b"), (1, "a"), (0, "z")];
        let sorted = from(&items)
            .order_by_ascending(|p| p.0)
            .then_by_ascending(|p| p.1)
            .cloned()
            .to_vec();
        assert_eq!(sorted, vec![(0, "z"), (1, "a"), (1, "b")]);
    }

    #[test]
    fn first_key_has_priority() {
        let items = [(2, 1), (1, 2), (1, 1), (2, 2)];
        let sorted = from(&items)
            .order_by_descending(|p| p.0)
            .then_by_ascending(|p| p.1)
            .cloned()
            .to_vec();
        assert_eq!(sorted, vec![(2, 1), (2, 2), (1, 1), (1, 2)]);
    }

    #[test]
    fn three_keys() {
        let items = [(0, 0, 'x'), (0, 1, 'b'), (0, 1, 'a'), (0, 0, 'y')];
        let sorted = from(&items)
            .order_by_ascending(|t| t.0)
            .then_by_descending(|t| t.1)
            .then_by(|t| t.2, Dir::Asc)
            .cloned()
            .to_vec();
        assert_eq!(
            sorted,
            vec![(0, 1, 'a'), (0, 1, 'b'), (0, 0, 'x'), (0, 0, 'y')]
        );
    }

    #[test]
    fn empty_sort() {
        let items: [u8; 0] = [];
        let seq = from(&items).order_by_ascending(|n| **n);
        assert!(seq.start() == seq.end());
    }

    #[test]
    fn separate_traversals_use_separate_buffers() {
        let seq = range(1, 3).order_by_descending(|n| *n);
        let a = seq.start();
        let b = seq.start();
        assert!(a != b);
        assert_eq!(seq.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn owned_keys_are_cloned_out_of_elements() {
        struct Entry {
            group: String,
            label: String,
        }

        let entry = |group: &str, label: &str| Entry {
            group: group.to_string(),
            label: label.to_string(),
        };
        let entries = vec![entry("b", "x"), entry("a", "z"), entry("a", "y")];

        let sorted = from(&entries)
            .order_by(|e| e.group.clone(), Dir::Asc)
            .then_by(|e| e.label.clone(), Dir::Desc)
            .select(|e| format!("{}{}", e.group, e.label))
            .to_vec();
        assert_eq!(sorted, vec!["az", "ay", "bx"]);
    }

    #[test]
    fn sorted_stages_expose_their_comparator() {
        fn is_sorted_by_chain<Q>(seq: &Q) -> bool
        where
            Q: SortedSequence,
            Q::Item: Clone,
        {
            let items = seq.to_vec();
            items
                .windows(2)
                .all(|w| seq.compare(&w[0], &w[1]) != Ordering::Greater)
        }

        let items = [(2, 'b'), (1, 'c'), (2, 'a')];
        let by_first = from(&items).order_by_descending(|p| p.0);
        assert!(is_sorted_by_chain(&by_first));
        assert!(is_sorted_by_chain(&by_first.clone().then_by_ascending(|p| p.1)));
    }
}
