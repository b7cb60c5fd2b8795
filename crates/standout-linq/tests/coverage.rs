//! Scenario and characterization tests across whole chains.

use std::cell::Cell;

use standout_linq::{
    from, from_to, generate, range, try_from_to, Dir, Generated, QueryError, Sequence,
    SortedSequence,
};

// ============================================================================
// Join characterization
// ============================================================================

#[test]
fn join_forward_scan_with_wraparound() {
    let outer = [1, 1, 2];
    let inner = [1, 2, 2];

    let pairs = from(&outer)
        .join(from(&inner), |a| **a, |b| **b, |a, b| (*a, *b))
        .to_vec();

    assert_eq!(pairs, vec![(1, 1), (1, 1), (2, 2), (2, 2)]);
}

#[test]
fn join_resumes_inner_scan_after_last_match() {
    // The first outer element consumes every inner match before the inner
    // sequence wraps for the second.
    let outer = [1, 1];
    let inner = [10, 10, 30];

    let pairs = from(&outer)
        .join(from(&inner), |a| **a * 10, |b| **b, |a, b| (*a, *b))
        .to_vec();

    assert_eq!(pairs, vec![(1, 10), (1, 10), (1, 10), (1, 10)]);
}

#[test]
fn join_feeds_downstream_stages() {
    let departments = [(1, "eng"), (2, "ops")];
    let people = [("ann", 2), ("bo", 1), ("cy", 2)];

    let roster = from(&departments)
        .join(
            from(&people),
            |d| d.0,
            |p| p.1,
            |d, p| format!("{}:{}", d.1, p.0),
        )
        .order_by_ascending(|s| s.clone())
        .to_vec();

    assert_eq!(roster, vec!["eng:bo", "ops:ann", "ops:cy"]);
}

// ============================================================================
// Sources
// ============================================================================

#[test]
fn generator_stops_at_finished() {
    let calls = Cell::new(0usize);
    let seq = generate(|i| {
        calls.set(calls.get() + 1);
        if i < 5 {
            Generated::Value(i * 3)
        } else if i == 5 {
            Generated::Finished
        } else {
            Generated::Value(usize::MAX)
        }
    });

    assert_eq!(seq.count(), 5);
    assert_eq!(seq.to_vec(), vec![0, 3, 6, 9, 12]);
    assert_eq!(calls.get(), 12);
}

#[test]
fn generator_from_option() {
    let seq = generate(|i| Generated::from((i < 3).then_some(i)));
    assert_eq!(seq.to_vec(), vec![0, 1, 2]);
}

#[test]
fn progression_examples() {
    assert_eq!(from_to(0, 10, 2).to_vec(), vec![0, 2, 4, 6, 8, 10]);
    assert_eq!(from_to(10, 0, 2).to_vec(), vec![10, 8, 6, 4, 2, 0]);
    assert_eq!(from_to(-3i64, 3, 3).to_vec(), vec![-3, 0, 3]);
    assert_eq!(range(5u8, 7).to_vec(), vec![5, 6, 7]);
}

#[test]
fn progression_degenerate_cases() {
    assert_eq!(from_to(4, 4, 1).count(), 0);
    assert_eq!(from_to(0, 4, 0).count(), 0);
    assert_eq!(from_to(f64::NAN, 1.0, 0.5).count(), 0);
}

#[test]
fn checked_progression() {
    assert_eq!(try_from_to(0, 4, 0).err(), Some(QueryError::ZeroStep));
    assert_eq!(
        try_from_to(0.0, f64::NAN, 1.0).err(),
        Some(QueryError::UnorderedBounds)
    );

    let seq = try_from_to(1.0, 2.0, 0.5).map(|s| s.to_vec());
    assert_eq!(seq, Ok(vec![1.0, 1.5, 2.0]));
}

// ============================================================================
// Aggregates
// ============================================================================

#[test]
fn empty_aggregates() {
    let ints: Vec<i64> = Vec::new();
    let seq = from(&ints).cloned();
    assert_eq!(seq.sum(), 0);
    assert_eq!(seq.min(), 0);
    assert_eq!(seq.max(), 0);
    assert_eq!(seq.average(), 0.0f64);
    assert_eq!(seq.aggregate(|a, b| a * b), 0);

    let floats: Vec<f32> = Vec::new();
    assert_eq!(from(&floats).cloned().average(), 0.0f32);
}

#[test]
fn aggregates_over_a_chain() {
    let seq = range(1, 10).filter(|n| n % 2 == 1).select(|n| n * n);
    assert_eq!(seq.to_vec(), vec![1, 9, 25, 49, 81]);
    assert_eq!(seq.sum(), 165);
    assert_eq!(seq.min(), 1);
    assert_eq!(seq.max(), 81);
    assert_eq!(seq.average(), 33.0);
    assert_eq!(seq.element_at(2, -1), 25);
    assert_eq!(seq.element_at(9, -1), -1);
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn sort_with_three_keys() {
    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        team: &'static str,
        score: u32,
        name: &'static str,
    }

    let rows = vec![
        Row { team: "b", score: 7, name: "x" },
        Row { team: "a", score: 7, name: "z" },
        Row { team: "a", score: 9, name: "y" },
        Row { team: "a", score: 7, name: "w" },
    ];

    let names = from(&rows)
        .order_by(|r| r.team, Dir::Asc)
        .then_by(|r| r.score, Dir::Desc)
        .then_by_ascending(|r| r.name)
        .select(|r| r.name)
        .to_vec();

    assert_eq!(names, vec!["y", "w", "z", "x"]);
}

#[test]
fn skip_take_window() {
    let page = range(1, 100).skip(20).take(5).to_vec();
    assert_eq!(page, vec![21, 22, 23, 24, 25]);
}

#[test]
fn skip_while_then_take_while() {
    let items = [1, 1, 4, 5, 6, 1, 8];
    let run = from(&items)
        .skip_while(|n| **n < 3)
        .take_while(|n| **n > 3)
        .cloned()
        .to_vec();
    assert_eq!(run, vec![4, 5, 6]);
}

#[test]
fn flatten_then_distinct() {
    let groups = [vec![1, 2], vec![], vec![2, 3], vec![]];
    let flat = from(&groups)
        .select_many(|g| from(g.as_slice()))
        .distinct()
        .cloned()
        .to_vec();
    assert_eq!(flat, vec![1, 2, 3]);
}

#[test]
fn concat_reverse_repeat() {
    let seq = range(1, 2).concat(range(8, 9)).reverse().repeat(1);
    assert_eq!(seq.to_vec(), vec![9, 8, 2, 1, 9, 8, 2, 1]);
}

#[test]
fn chains_are_reusable() {
    let items = [3, 1, 2];
    let sorted = from(&items).cloned().order_by_ascending(|n| *n);
    assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
    assert_eq!(sorted.first(0), 1);
    assert_eq!(sorted.last(0), 3);
}

#[test]
fn checked_terminals() {
    let empty: [u8; 0] = [];
    assert_eq!(from(&empty).try_first(), Err(QueryError::Empty));
    assert_eq!(
        range(0, 2).try_element_at(3),
        Err(QueryError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(range(0, 2).try_last(), Ok(2));
}
