//! Fixed classification table for invisible characters.
//!
//! The table is a sorted list of inclusive, non-overlapping code point
//! ranges. Membership is answered from a 256-entry lookup for the Latin-1
//! block and by binary search for everything above it. The set is a
//! compile-time constant; changing it is a code change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad family an invisible code point belongs to.
///
/// The label is informational only: it feeds hover text and CLI output and
/// never changes whether a code point is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvisibleKind {
    /// C0 control codes other than tab, line feed and carriage return.
    C0Control,
    /// DEL and the C1 control block, excluding NEL (U+0085).
    C1Control,
    /// U+00A0 NO-BREAK SPACE.
    NoBreakSpace,
    /// U+00AD SOFT HYPHEN.
    SoftHyphen,
    /// Zero-width spaces, joiners and directional marks (U+200B..U+200F).
    ZeroWidth,
    /// Bidirectional embeddings and overrides (U+202A..U+202E).
    BidiControl,
    /// Word joiner, invisible operators and deprecated format controls.
    FormatControl,
    /// A reserved slot inside an otherwise printable block.
    Reserved,
    /// U+FEFF and the unassigned code points around it.
    ByteOrderMark,
    /// Unassigned specials and interlinear annotation controls.
    Specials,
}

impl InvisibleKind {
    /// Returns a short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::C0Control => "C0 control",
            Self::C1Control => "C1 control",
            Self::NoBreakSpace => "no-break space",
            Self::SoftHyphen => "soft hyphen",
            Self::ZeroWidth => "zero-width or directional mark",
            Self::BidiControl => "bidirectional control",
            Self::FormatControl => "invisible format control",
            Self::Reserved => "reserved code point",
            Self::ByteOrderMark => "byte order mark or reserved",
            Self::Specials => "special or annotation control",
        }
    }
}

impl fmt::Display for InvisibleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An inclusive range of code points flagged as invisible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvisibleRange {
    start: u32,
    end: u32,
    kind: InvisibleKind,
}

impl InvisibleRange {
    const fn new(start: u32, end: u32, kind: InvisibleKind) -> Self {
        Self { start, end, kind }
    }

    const fn single(code_point: u32, kind: InvisibleKind) -> Self {
        Self::new(code_point, code_point, kind)
    }

    /// Returns the first code point in the range.
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Returns the last code point in the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Returns the family label for the range.
    #[must_use]
    pub const fn kind(&self) -> InvisibleKind {
        self.kind
    }

    /// Returns `true` when `code_point` lies inside the range.
    #[must_use]
    pub const fn contains(&self, code_point: u32) -> bool {
        self.start <= code_point && code_point <= self.end
    }
}

/// Every code point the toolchain treats as invisible, sorted by start.
pub const INVISIBLE_RANGES: &[InvisibleRange] = &[
    InvisibleRange::new(0x00, 0x08, InvisibleKind::C0Control),
    InvisibleRange::single(0x0B, InvisibleKind::C0Control),
    InvisibleRange::single(0x0C, InvisibleKind::C0Control),
    InvisibleRange::new(0x0E, 0x1F, InvisibleKind::C0Control),
    InvisibleRange::new(0x7F, 0x84, InvisibleKind::C1Control),
    InvisibleRange::new(0x86, 0x9F, InvisibleKind::C1Control),
    InvisibleRange::single(0xA0, InvisibleKind::NoBreakSpace),
    InvisibleRange::single(0xAD, InvisibleKind::SoftHyphen),
    InvisibleRange::new(0x200B, 0x200F, InvisibleKind::ZeroWidth),
    InvisibleRange::new(0x202A, 0x202E, InvisibleKind::BidiControl),
    InvisibleRange::new(0x2060, 0x206F, InvisibleKind::FormatControl),
    InvisibleRange::single(0x2072, InvisibleKind::Reserved),
    InvisibleRange::new(0xFEFD, 0xFF00, InvisibleKind::ByteOrderMark),
    InvisibleRange::new(0xFFEF, 0xFFFB, InvisibleKind::Specials),
];

/// A set of code points described by sorted, non-overlapping ranges.
///
/// # Example
///
/// ```
/// use unseen_core::INVISIBLE;
///
/// assert!(INVISIBLE.contains(0x200B));
/// assert!(!INVISIBLE.contains(u32::from('a')));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClass {
    ranges: &'static [InvisibleRange],
}

impl CharacterClass {
    /// Wraps a range table. The table must be sorted and non-overlapping.
    #[must_use]
    pub const fn new(ranges: &'static [InvisibleRange]) -> Self {
        Self { ranges }
    }

    /// Returns `true` when `code_point` falls in at least one range.
    #[must_use]
    pub fn contains(&self, code_point: u32) -> bool {
        self.range_for(code_point).is_some()
    }

    /// Returns the range containing `code_point`, if any.
    #[must_use]
    pub fn range_for(&self, code_point: u32) -> Option<&'static InvisibleRange> {
        let index = self.ranges.partition_point(|range| range.end < code_point);
        self.ranges
            .get(index)
            .filter(|range| range.contains(code_point))
    }
}

/// The invisible-character class used by the scanner and the remover.
pub const INVISIBLE: CharacterClass = CharacterClass::new(INVISIBLE_RANGES);

const LATIN1_LEN: usize = 0x100;

static LATIN1_TABLE: [bool; LATIN1_LEN] = build_latin1_table();

#[expect(
    clippy::indexing_slicing,
    reason = "const evaluation cannot use slice::get; bounds are checked by the loop conditions"
)]
const fn build_latin1_table() -> [bool; LATIN1_LEN] {
    let mut table = [false; LATIN1_LEN];
    let mut index = 0;
    while index < INVISIBLE_RANGES.len() {
        let range = &INVISIBLE_RANGES[index];
        let mut code_point = range.start;
        while code_point <= range.end && (code_point as usize) < LATIN1_LEN {
            table[code_point as usize] = true;
            code_point += 1;
        }
        index += 1;
    }
    table
}

/// Returns `true` when `code_point` is in the invisible-character table.
///
/// Defined for every `u32`; values outside the Unicode range are simply not
/// invisible.
///
/// # Example
///
/// ```
/// use unseen_core::is_invisible;
///
/// assert!(is_invisible(0x00));
/// assert!(!is_invisible(0x09));
/// assert!(is_invisible(0xA0));
/// assert!(!is_invisible(0x1F600));
/// ```
#[must_use]
pub fn is_invisible(code_point: u32) -> bool {
    usize::try_from(code_point)
        .ok()
        .and_then(|index| LATIN1_TABLE.get(index))
        .map_or_else(|| INVISIBLE.contains(code_point), |flag| *flag)
}

/// Returns `true` when `ch` is in the invisible-character table.
#[must_use]
pub fn is_invisible_char(ch: char) -> bool {
    is_invisible(u32::from(ch))
}

/// Returns `true` when a single UTF-16 code unit is in the table.
///
/// Surrogate halves are classified on their own value and are never
/// invisible.
#[must_use]
pub fn is_invisible_unit(unit: u16) -> bool {
    is_invisible(u32::from(unit))
}

/// Returns the family of an invisible code point, or `None` when the code
/// point is not flagged.
#[must_use]
pub fn classify(code_point: u32) -> Option<InvisibleKind> {
    INVISIBLE.range_for(code_point).map(InvisibleRange::kind)
}
