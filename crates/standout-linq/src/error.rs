//! Error types for the linq crate.
//!
//! The default-valued terminals never fail. These errors only surface through
//! the checked `try_*` variants.

use thiserror::Error;

/// Errors reported by checked constructors and terminals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A numeric progression was given a zero step.
    #[error("progression step must be non-zero")]
    ZeroStep,

    /// The bounds of a numeric progression cannot be ordered (NaN).
    #[error("progression bounds cannot be ordered")]
    UnorderedBounds,

    /// The sequence produced no elements.
    #[error("sequence contains no elements")]
    Empty,

    /// Indexed lookup past the last element.
    #[error("index {index} is out of range for a sequence of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for checked operations.
pub type Result<T> = std::result::Result<T, QueryError>;
