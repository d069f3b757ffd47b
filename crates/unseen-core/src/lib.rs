//! Detection and removal of invisible Unicode and control characters.
//!
//! The crate is the pure half of the `unseen` toolchain. It owns the fixed
//! classification table, the scanner that reports every invisible code unit
//! in a text snapshot, and the remover that deletes them. Nothing here holds
//! a live document or performs I/O; editor integration lives in
//! `unseen-host`.
//!
//! # Core types
//!
//! - [`CharacterClass`] and [`InvisibleKind`]: the classification table
//! - [`Match`] and [`Finding`]: one reported occurrence per code unit
//! - [`Findings`]: the lazy, restartable result of [`scan`]
//! - [`LineIndex`] and [`LineCol`]: UTF-16 offset to line/column mapping
//!
//! # Offsets
//!
//! Every offset is measured in UTF-16 code units, matching the default
//! position encoding of the Language Server Protocol. Each finding spans
//! exactly one unit and adjacent findings are never merged.
//!
//! # Example
//!
//! ```
//! use unseen_core::{clean, scan};
//!
//! let text = "A\u{200B}B";
//! let findings: Vec<_> = scan(text).collect();
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].span().start(), 1);
//! assert_eq!(clean(text), "AB");
//! ```

mod classifier;
mod error;
mod position;
mod remover;
mod scanner;

pub use classifier::{
    CharacterClass, INVISIBLE, INVISIBLE_RANGES, InvisibleKind, InvisibleRange, classify,
    is_invisible, is_invisible_char, is_invisible_unit,
};
pub use error::PositionError;
pub use position::{LineCol, LineIndex};
pub use remover::{clean, clean_utf16};
pub use scanner::{
    FINDING_MESSAGE, Finding, Findings, HOVER_MESSAGE, INVISIBLE_CHARACTER_TAG, Match, Severity,
    Utf16Findings, scan, scan_utf16,
};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(test)]
mod tests;
