//! Linq - Lazily evaluated, composable query sequences over in-memory data.
//!
//! Linq provides a fluent API for chaining filters, projections, sorts and
//! joins over borrowed collections, numeric progressions and generator
//! functions. It supports:
//!
//! - Streaming adaptors: filter, select, select_many, take, skip, concat
//! - Buffering adaptors: distinct, reverse, repeat, multi-key sort
//! - A key-matching join between two sequences
//! - Terminals: sum, min, max, average, aggregate, first, last, count, ...
//!
//! Nothing runs until a terminal walks the chain.
//!
//! # Quick Start
//!
//! ```rust
//! use standout_linq::{from, Sequence, SortedSequence};
//!
//! struct Task {
//!     name: &'static str,
//!     priority: i32,
//!     archived: bool,
//! }
//!
//! let tasks = vec![
//!     Task { name: "Write docs", priority: 3, archived: false },
//!     Task { name: "Fix bug", priority: 5, archived: false },
//!     Task { name: "Old task", priority: 1, archived: true },
//!     Task { name: "Review", priority: 3, archived: false },
//! ];
//!
//! let names = from(&tasks)
//!     .filter(|t| !t.archived)
//!     .order_by_descending(|t| t.priority)
//!     .then_by_ascending(|t| t.name)
//!     .select(|t| t.name)
//!     .to_vec();
//!
//! assert_eq!(names, vec!["Fix bug", "Review", "Write docs"]);
//! ```
//!
//! # Sources
//!
//! | Constructor | Yields |
//! |-------------|--------|
//! | [`from`] | `&T` for each element of a borrowed slice |
//! | [`from_to`], [`range`] | a numeric progression, end inclusive |
//! | [`generate`] | `f(0)`, `f(1)`, ... until `f` returns [`Generated::Finished`] |
//!
//! ```rust
//! use standout_linq::{from_to, generate, Generated, Sequence};
//!
//! assert_eq!(from_to(10, 0, 5).to_vec(), vec![10, 5, 0]);
//!
//! let powers = generate(|i| match i {
//!     0..=4 => Generated::Value(1u32 << i),
//!     _ => Generated::Finished,
//! });
//! assert_eq!(powers.sum(), 31);
//! ```
//!
//! # Evaluation Model
//!
//! Every stage implements [`Sequence`]: `start()` begins a traversal and
//! returns a [`Cursor`], `end()` returns the cursor the traversal stops on.
//! Stages own their closures, and buffering stages (distinct, reverse,
//! order_by, then_by) build a fresh buffer inside each cursor returned by
//! `start()`, so separate traversals never share state.
//!
//! Illegal chains are rejected at compile time: `then_by` exists only on
//! [`SortedSequence`], `select_many` requires the transform to return a
//! [`Sequence`], and progressions accept only built-in numeric types.
//!
//! # Errors
//!
//! Terminals never fail; empty sequences produce a default (zero, `false`,
//! or a caller-supplied value). The `try_*` variants report
//! [`QueryError`] instead.
//!
//! # Features
//!
//! - `tracing` (default): TRACE events when a buffering stage materializes
//!   or a repeat restarts its predecessor.

mod concat;
mod cursor;
mod distinct;
mod error;
mod filter;
mod join;
mod numeric;
mod ordering;
mod repeat;
mod reverse;
mod select;
mod sequence;
mod skip;
mod source;
mod take;
mod trace;

// Re-export public API
pub use concat::{Concat, ConcatCursor};
pub use cursor::{Cursor, Iter};
pub use distinct::{Distinct, DistinctCursor};
pub use error::{QueryError, Result};
pub use filter::{Filter, FilterCursor};
pub use join::{Join, JoinCursor};
pub use numeric::{Average, Progression};
pub use ordering::{compare_keys, Dir, OrderBy, SortedCursor, SortedSequence, ThenBy};
pub use repeat::{Repeat, RepeatCursor};
pub use reverse::{Reverse, ReverseCursor};
pub use select::{Cloned, ClonedCursor, Select, SelectCursor, SelectMany, SelectManyCursor};
pub use sequence::Sequence;
pub use skip::{Skip, SkipWhile};
pub use source::{
    from, from_to, generate, range, try_from_to, FromSlice, FromTo, FromToCursor, Generate,
    GenerateCursor, Generated, SliceCursor,
};
pub use take::{Take, TakeCursor, TakeWhile, TakeWhileCursor};
