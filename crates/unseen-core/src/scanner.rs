//! Scanning text snapshots for invisible characters.
//!
//! Both scanners walk the snapshot one UTF-16 code unit at a time and emit a
//! [`Finding`] for every unit the classifier flags. The `&str` scanner
//! decodes `char`s and advances the offset by each character's UTF-16 width;
//! characters outside the Basic Multilingual Plane occupy two units that are
//! never in the table, so they are never reported. The `&[u16]` scanner sees
//! raw units and therefore also handles lone surrogates, which are likewise
//! never reported.

use std::iter::{Enumerate, FusedIterator};
use std::slice;
use std::str::Chars;

use serde::{Deserialize, Serialize};

use crate::classifier::{InvisibleKind, classify};

/// Stable code attached to every finding.
///
/// Hosts use this value to decide which diagnostics are eligible for the
/// "clean all" quick fix.
pub const INVISIBLE_CHARACTER_TAG: &str = "invisible_character_mention";

/// Message reported for every finding.
pub const FINDING_MESSAGE: &str = "Invalid Character";

/// Hover text shown over a flagged region.
pub const HOVER_MESSAGE: &str = "Non-Printable Character";

/// A half-open span of UTF-16 code units in a snapshot.
///
/// # Example
///
/// ```
/// use unseen_core::Match;
///
/// let span = Match::new(4, 5, 0x200B);
/// assert_eq!(span.len(), 1);
/// assert_eq!(span.code_point_label(), "U+200B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    start: usize,
    end: usize,
    unit: u16,
}

impl Match {
    /// Creates a span covering `start..end` whose first unit is `unit`.
    #[must_use]
    pub const fn new(start: usize, end: usize, unit: u16) -> Self {
        Self { start, end, unit }
    }

    const fn single(offset: usize, unit: u16) -> Self {
        Self::new(offset, offset + 1, unit)
    }

    /// Inclusive start offset in UTF-16 code units.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset in UTF-16 code units.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of code units covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for an empty span.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The matched code unit.
    #[must_use]
    pub const fn unit(&self) -> u16 {
        self.unit
    }

    /// The matched unit formatted as `U+XXXX`.
    #[must_use]
    pub fn code_point_label(&self) -> String {
        format!("U+{:04X}", self.unit)
    }
}

/// Severity attached to findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The finding blocks a clean document.
    Error,
}

/// One reported invisible character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Finding {
    span: Match,
    kind: InvisibleKind,
    severity: Severity,
    message: &'static str,
    tag: &'static str,
}

impl Finding {
    /// Creates a finding for `span` with the fixed severity, message and tag.
    #[must_use]
    pub const fn new(span: Match, kind: InvisibleKind) -> Self {
        Self {
            span,
            kind,
            severity: Severity::Error,
            message: FINDING_MESSAGE,
            tag: INVISIBLE_CHARACTER_TAG,
        }
    }

    /// The flagged span.
    #[must_use]
    pub const fn span(&self) -> &Match {
        &self.span
    }

    /// The family of the flagged character.
    #[must_use]
    pub const fn kind(&self) -> InvisibleKind {
        self.kind
    }

    /// Always [`Severity::Error`].
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Always [`FINDING_MESSAGE`].
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Always [`INVISIBLE_CHARACTER_TAG`].
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }
}

fn finding_for_unit(offset: usize, unit: u16) -> Option<Finding> {
    classify(u32::from(unit)).map(|kind| Finding::new(Match::single(offset, unit), kind))
}

/// Lazy iterator over the findings in a `&str` snapshot.
///
/// A clone taken before consumption replays the same findings.
#[derive(Debug, Clone)]
pub struct Findings<'a> {
    chars: Chars<'a>,
    offset: usize,
}

impl Iterator for Findings<'_> {
    type Item = Finding;

    fn next(&mut self) -> Option<Self::Item> {
        for ch in self.chars.by_ref() {
            let offset = self.offset;
            self.offset += ch.len_utf16();
            let Ok(unit) = u16::try_from(u32::from(ch)) else {
                continue;
            };
            if let Some(finding) = finding_for_unit(offset, unit) {
                return Some(finding);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.chars.size_hint().1)
    }
}

impl FusedIterator for Findings<'_> {}

/// Lazy iterator over the findings in a UTF-16 snapshot.
#[derive(Debug, Clone)]
pub struct Utf16Findings<'a> {
    units: Enumerate<slice::Iter<'a, u16>>,
}

impl Iterator for Utf16Findings<'_> {
    type Item = Finding;

    fn next(&mut self) -> Option<Self::Item> {
        self.units
            .by_ref()
            .find_map(|(offset, unit)| finding_for_unit(offset, *unit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.units.size_hint().1)
    }
}

impl FusedIterator for Utf16Findings<'_> {}

/// Scans `text` and yields one finding per invisible code unit.
///
/// The result depends only on `text`: repeated scans of the same snapshot
/// produce identical findings in the same order.
///
/// # Example
///
/// ```
/// use unseen_core::scan;
///
/// let offsets: Vec<_> = scan("\u{A0}\u{A0}")
///     .map(|finding| finding.span().start())
///     .collect();
/// assert_eq!(offsets, [0, 1]);
/// ```
#[must_use]
pub fn scan(text: &str) -> Findings<'_> {
    Findings {
        chars: text.chars(),
        offset: 0,
    }
}

/// Scans a UTF-16 snapshot, classifying each code unit independently.
///
/// Unpaired surrogates are accepted and never flagged.
#[must_use]
pub fn scan_utf16(units: &[u16]) -> Utf16Findings<'_> {
    Utf16Findings {
        units: units.iter().enumerate(),
    }
}
