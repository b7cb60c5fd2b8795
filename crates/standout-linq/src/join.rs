//! Key-matching join between two sequences.
//!
//! The join keeps one position in each sequence and scans the inner
//! sequence forward from where it last stopped:
//!
//! 1. Scan the inner sequence from its current position for the first
//!    element whose key equals the current outer element's key.
//! 2. If the inner end is reached without a match, rewind the inner position
//!    to its start, advance the outer position, and repeat.
//! 3. On a match, stop; reading combines the outer and inner elements.
//! 4. Advancing steps the inner position past the last match and repeats
//!    from step 1.
//!
//! Inner matches are consumed progressively and only rewound after a full
//! inner pass.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Joins an outer and an inner sequence on equal keys.
/// Created by [`Sequence::join`].
pub struct Join<A, B, KA, KB, F, K> {
    outer: A,
    inner: B,
    outer_key: Rc<KA>,
    inner_key: Rc<KB>,
    combine: Rc<F>,
    _key: PhantomData<fn() -> K>,
}

impl<A, B, KA, KB, F, K> Join<A, B, KA, KB, F, K> {
    pub(crate) fn new(outer: A, inner: B, outer_key: KA, inner_key: KB, combine: F) -> Self {
        Join {
            outer,
            inner,
            outer_key: Rc::new(outer_key),
            inner_key: Rc::new(inner_key),
            combine: Rc::new(combine),
            _key: PhantomData,
        }
    }
}

impl<A: Clone, B: Clone, KA, KB, F, K> Clone for Join<A, B, KA, KB, F, K> {
    fn clone(&self) -> Self {
        Join {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            outer_key: Rc::clone(&self.outer_key),
            inner_key: Rc::clone(&self.inner_key),
            combine: Rc::clone(&self.combine),
            _key: PhantomData,
        }
    }
}

/// Cursor for [`Join`], holding independent outer and inner positions.
pub struct JoinCursor<CA, CB, KA, KB, F, K> {
    outer: CA,
    outer_end: CA,
    inner: CB,
    inner_start: CB,
    inner_end: CB,
    outer_key: Rc<KA>,
    inner_key: Rc<KB>,
    combine: Rc<F>,
    _key: PhantomData<fn() -> K>,
}

impl<CA, CB, KA, KB, F, K> JoinCursor<CA, CB, KA, KB, F, K>
where
    CA: Cursor,
    CB: Cursor,
    KA: Fn(&CA::Item) -> K,
    KB: Fn(&CB::Item) -> K,
    K: PartialEq,
{
    /// Positions both cursors on the next matching pair, or the outer end.
    fn find_next(&mut self) {
        while self.outer != self.outer_end {
            let key = (self.outer_key)(&self.outer.read());
            let mut matched = false;

            while self.inner != self.inner_end {
                if (self.inner_key)(&self.inner.read()) == key {
                    matched = true;
                    break;
                }
                self.inner.advance();
            }

            if self.inner == self.inner_end {
                self.inner = self.inner_start.clone();
            }

            if matched {
                break;
            }

            self.outer.advance();
        }
    }
}

impl<CA: Clone, CB: Clone, KA, KB, F, K> Clone for JoinCursor<CA, CB, KA, KB, F, K> {
    fn clone(&self) -> Self {
        JoinCursor {
            outer: self.outer.clone(),
            outer_end: self.outer_end.clone(),
            inner: self.inner.clone(),
            inner_start: self.inner_start.clone(),
            inner_end: self.inner_end.clone(),
            outer_key: Rc::clone(&self.outer_key),
            inner_key: Rc::clone(&self.inner_key),
            combine: Rc::clone(&self.combine),
            _key: PhantomData,
        }
    }
}

impl<CA: PartialEq, CB: PartialEq, KA, KB, F, K> PartialEq for JoinCursor<CA, CB, KA, KB, F, K> {
    fn eq(&self, other: &Self) -> bool {
        self.outer == other.outer && (self.outer == self.outer_end || self.inner == other.inner)
    }
}

impl<CA, CB, KA, KB, F, K, R> Cursor for JoinCursor<CA, CB, KA, KB, F, K>
where
    CA: Cursor,
    CB: Cursor,
    KA: Fn(&CA::Item) -> K,
    KB: Fn(&CB::Item) -> K,
    K: PartialEq,
    F: Fn(CA::Item, CB::Item) -> R,
{
    type Item = R;

    fn advance(&mut self) {
        self.inner.advance();
        self.find_next();
    }

    fn read(&self) -> R {
        (self.combine)(self.outer.read(), self.inner.read())
    }
}

impl<A, B, KA, KB, F, K, R> Sequence for Join<A, B, KA, KB, F, K>
where
    A: Sequence,
    B: Sequence,
    KA: Fn(&A::Item) -> K,
    KB: Fn(&B::Item) -> K,
    K: PartialEq,
    F: Fn(A::Item, B::Item) -> R,
{
    type Item = R;
    type Cursor = JoinCursor<A::Cursor, B::Cursor, KA, KB, F, K>;

    fn start(&self) -> Self::Cursor {
        let inner_start = self.inner.start();
        let mut cursor = JoinCursor {
            outer: self.outer.start(),
            outer_end: self.outer.end(),
            inner: inner_start.clone(),
            inner_start,
            inner_end: self.inner.end(),
            outer_key: Rc::clone(&self.outer_key),
            inner_key: Rc::clone(&self.inner_key),
            combine: Rc::clone(&self.combine),
            _key: PhantomData,
        };
        cursor.find_next();
        cursor
    }

    fn end(&self) -> Self::Cursor {
        let outer_end = self.outer.end();
        let inner_start = self.inner.start();
        JoinCursor {
            outer: outer_end.clone(),
            outer_end,
            inner: inner_start.clone(),
            inner_start,
            inner_end: self.inner.end(),
            outer_key: Rc::clone(&self.outer_key),
            inner_key: Rc::clone(&self.inner_key),
            combine: Rc::clone(&self.combine),
            _key: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from, Sequence};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: u32,
        name: &'static str,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        owner: u32,
        item: &'static str,
    }

    #[test]
    fn matches_on_keys() {
        let people = [
            Person { id: 1, name: "ada" },
            Person { id: 2, name: "bob" },
        ];
        let orders = [
            Order { owner: 2, item: "lamp" },
            Order { owner: 1, item: "desk" },
            Order { owner: 2, item: "rug" },
        ];

        let pairs = from(&people)
            .join(from(&orders), |p| p.id, |o| o.owner, |p, o| (p.name, o.item))
            .to_vec();

        assert_eq!(pairs, vec![("ada", "desk"), ("bob", "lamp"), ("bob", "rug")]);
    }

    #[test]
    fn no_matches() {
        let a = [1, 2];
        let b = [3, 4];
        let seq = from(&a).join(from(&b), |x| **x, |y| **y, |x, y| x + y);
        assert!(seq.start() == seq.end());
    }

    #[test]
    fn empty_inner() {
        let a = [1, 2];
        let b: [i32; 0] = [];
        let seq = from(&a).join(from(&b), |x| **x, |y| **y, |x, y| (*x, *y));
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn empty_outer() {
        let a: [i32; 0] = [];
        let b = [1];
        let seq = from(&a).join(from(&b), |x| **x, |y| **y, |x, y| (*x, *y));
        assert!(seq.to_vec().is_empty());
    }

    #[test]
    fn last_inner_match_rewinds_for_next_outer() {
        let a = [5, 5];
        let b = [1, 5];
        let pairs = from(&a)
            .join(from(&b), |x| **x, |y| **y, |x, y| (*x, *y))
            .to_vec();
        assert_eq!(pairs, vec![(5, 5), (5, 5)]);
    }
}
