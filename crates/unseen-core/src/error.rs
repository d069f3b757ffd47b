//! Error types for the core crate.
//!
//! Scanning and cleaning are total; only offset-to-position lookups can
//! fail.

use thiserror::Error;

/// Errors raised while resolving an offset to a line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PositionError {
    /// The offset lies beyond the end of the indexed text.
    #[error("offset {offset} is past the end of the text ({length} UTF-16 units)")]
    OutOfBounds {
        /// Offset requested by the caller.
        offset: usize,
        /// Length of the indexed text in UTF-16 units.
        length: usize,
    },
}

impl PositionError {
    /// Creates an out-of-bounds error.
    #[must_use]
    pub const fn out_of_bounds(offset: usize, length: usize) -> Self {
        Self::OutOfBounds { offset, length }
    }
}
