//! Tracing hooks for buffering stages.
//!
//! Events are emitted at TRACE level only when the `tracing` feature is
//! enabled; otherwise these compile to nothing.

/// Records that a buffering stage materialized its upstream for a traversal.
#[cfg(feature = "tracing")]
pub(crate) fn materialized(stage: &'static str, len: usize) {
    tracing::trace!(stage, len, "materialized traversal buffer");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn materialized(_stage: &'static str, _len: usize) { /* no-op */
}

/// Records that a repeat cursor restarted its predecessor.
#[cfg(feature = "tracing")]
pub(crate) fn restarted(stage: &'static str, remaining: usize) {
    tracing::trace!(stage, remaining, "restarted upstream traversal");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn restarted(_stage: &'static str, _remaining: usize) { /* no-op */
}
