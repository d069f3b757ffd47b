//! UTF-16 offset to line/column conversion.
//!
//! Line terminators follow the Language Server Protocol: `\n`, `\r\n` and a
//! lone `\r` each end a line. Columns count UTF-16 code units from the start
//! of the line.

use std::iter::Peekable;

use serde::{Deserialize, Serialize};

use crate::error::PositionError;
use crate::scanner::Match;

const LINE_FEED: u16 = 0x0A;
const CARRIAGE_RETURN: u16 = 0x0D;

/// A zero-based line and UTF-16 column.
///
/// # Example
///
/// ```
/// use unseen_core::LineCol;
///
/// let pos = LineCol::new(2, 7);
/// assert_eq!(pos.line(), 2);
/// assert_eq!(pos.column(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineCol {
    /// Zero-indexed line number.
    pub line: u32,
    /// Zero-indexed column in UTF-16 code units.
    pub column: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the zero-indexed line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the zero-indexed column.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns one-based coordinates for user-facing output.
    #[must_use]
    pub const fn one_based(&self) -> (u32, u32) {
        (self.line.saturating_add(1), self.column.saturating_add(1))
    }
}

/// Line start table for a text snapshot.
///
/// # Example
///
/// ```
/// use unseen_core::{LineCol, LineIndex};
///
/// let index = LineIndex::new("ab\r\ncd");
/// assert_eq!(index.position(5)?, LineCol::new(1, 1));
/// # Ok::<(), unseen_core::PositionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    length: usize,
}

impl LineIndex {
    /// Indexes a UTF-8 snapshot.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::from_units(text.encode_utf16())
    }

    /// Indexes a UTF-16 snapshot.
    #[must_use]
    pub fn from_utf16(units: &[u16]) -> Self {
        Self::from_units(units.iter().copied())
    }

    fn from_units(source: impl Iterator<Item = u16>) -> Self {
        let mut line_starts = vec![0];
        let mut length = 0;
        let mut units: Peekable<_> = source.peekable();
        while let Some(unit) = units.next() {
            length += 1;
            match unit {
                LINE_FEED => line_starts.push(length),
                CARRIAGE_RETURN => {
                    if units.next_if_eq(&LINE_FEED).is_some() {
                        length += 1;
                    }
                    line_starts.push(length);
                }
                _ => {}
            }
        }
        Self {
            line_starts,
            length,
        }
    }

    /// Length of the indexed text in UTF-16 code units.
    #[must_use]
    pub const fn len_utf16(&self) -> usize {
        self.length
    }

    /// Number of lines; an empty text has one line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Resolves a UTF-16 offset to a line and column.
    ///
    /// The end-of-text offset is valid and resolves to the position just
    /// past the last unit.
    pub fn position(&self, offset: usize) -> Result<LineCol, PositionError> {
        if offset > self.length {
            return Err(PositionError::out_of_bounds(offset, self.length));
        }

        let line = self
            .line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or_default();
        // Line/column numbers will realistically never exceed u32::MAX.
        Ok(LineCol::new(
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(offset - line_start).unwrap_or(u32::MAX),
        ))
    }

    /// Resolves both ends of a span.
    pub fn span_positions(&self, span: &Match) -> Result<(LineCol, LineCol), PositionError> {
        Ok((self.position(span.start())?, self.position(span.end())?))
    }
}
