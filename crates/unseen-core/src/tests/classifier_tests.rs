//! Tests for the invisible-character table.

use rstest::rstest;

use crate::{INVISIBLE_RANGES, InvisibleKind, classify, is_invisible, is_invisible_char};

/// The table written out literally, checked against the optimised lookup.
const REFERENCE: &[(u32, u32)] = &[
    (0x00, 0x08),
    (0x0B, 0x0B),
    (0x0C, 0x0C),
    (0x0E, 0x1F),
    (0x7F, 0x84),
    (0x86, 0x9F),
    (0xA0, 0xA0),
    (0xAD, 0xAD),
    (0x200B, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x206F),
    (0x2072, 0x2072),
    (0xFEFD, 0xFF00),
    (0xFFEF, 0xFFFB),
];

fn reference_is_invisible(code_point: u32) -> bool {
    REFERENCE
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&code_point))
}

#[test]
fn ranges_are_sorted_and_disjoint() {
    for pair in INVISIBLE_RANGES.windows(2) {
        let [left, right] = pair else {
            panic!("windows(2) yielded {} ranges", pair.len());
        };
        assert!(left.start() <= left.end(), "inverted range {left:?}");
        assert!(left.end() < right.start(), "{left:?} overlaps {right:?}");
    }
}

#[test]
fn lookup_matches_reference_on_every_code_point() {
    for code_point in 0..=0x0010_FFFF_u32 {
        assert_eq!(
            is_invisible(code_point),
            reference_is_invisible(code_point),
            "mismatch at U+{code_point:04X}"
        );
    }
}

#[test]
fn values_beyond_unicode_are_visible() {
    assert!(!is_invisible(0x0011_0000));
    assert!(!is_invisible(u32::MAX));
}

#[rstest]
#[case(0x00, true)]
#[case(0x08, true)]
#[case(0x09, false)]
#[case(0x0A, false)]
#[case(0x0B, true)]
#[case(0x0C, true)]
#[case(0x0D, false)]
#[case(0x0E, true)]
#[case(0x1F, true)]
#[case(0x20, false)]
#[case(0x7E, false)]
#[case(0x7F, true)]
#[case(0x84, true)]
#[case(0x85, false)]
#[case(0x86, true)]
#[case(0x9F, true)]
#[case(0xA0, true)]
#[case(0xA1, false)]
#[case(0xAC, false)]
#[case(0xAD, true)]
#[case(0xAE, false)]
#[case(0x200A, false)]
#[case(0x200B, true)]
#[case(0x200F, true)]
#[case(0x2010, false)]
#[case(0x2029, false)]
#[case(0x202A, true)]
#[case(0x202E, true)]
#[case(0x202F, false)]
#[case(0x205F, false)]
#[case(0x2060, true)]
#[case(0x206F, true)]
#[case(0x2070, false)]
#[case(0x2071, false)]
#[case(0x2072, true)]
#[case(0x2073, false)]
#[case(0xFEFC, false)]
#[case(0xFEFD, true)]
#[case(0xFEFF, true)]
#[case(0xFF00, true)]
#[case(0xFF01, false)]
#[case(0xFFEE, false)]
#[case(0xFFEF, true)]
#[case(0xFFFB, true)]
#[case(0xFFFC, false)]
#[case(0xFFFD, false)]
#[case(0xD800, false)]
#[case(0xDFFF, false)]
#[case(0x1_F600, false)]
#[case(0xE_0001, false)]
fn range_boundaries(#[case] code_point: u32, #[case] expected: bool) {
    assert_eq!(is_invisible(code_point), expected, "U+{code_point:04X}");
}

#[rstest]
#[case('\u{0}', InvisibleKind::C0Control)]
#[case('\u{7F}', InvisibleKind::C1Control)]
#[case('\u{A0}', InvisibleKind::NoBreakSpace)]
#[case('\u{AD}', InvisibleKind::SoftHyphen)]
#[case('\u{200D}', InvisibleKind::ZeroWidth)]
#[case('\u{202E}', InvisibleKind::BidiControl)]
#[case('\u{2063}', InvisibleKind::FormatControl)]
#[case('\u{2072}', InvisibleKind::Reserved)]
#[case('\u{FEFF}', InvisibleKind::ByteOrderMark)]
#[case('\u{FFF9}', InvisibleKind::Specials)]
fn classify_reports_kind(#[case] ch: char, #[case] kind: InvisibleKind) {
    assert!(is_invisible_char(ch));
    assert_eq!(classify(u32::from(ch)), Some(kind));
}

#[test]
fn classify_returns_none_for_visible_characters() {
    assert_eq!(classify(u32::from('a')), None);
    assert_eq!(classify(u32::from('\t')), None);
}

#[test]
fn kind_display_uses_label() {
    assert_eq!(InvisibleKind::ZeroWidth.to_string(), "zero-width or directional mark");
}

#[test]
fn kind_serialises_as_snake_case() {
    let json = serde_json::to_string(&InvisibleKind::BidiControl).expect("serialise kind");
    assert_eq!(json, "\"bidi_control\"");
}
