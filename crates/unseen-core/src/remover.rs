//! Removal of invisible characters.
//!
//! The remover uses the same predicate as the scanner, so a cleaned snapshot
//! always scans empty. Text without invisible characters is returned
//! borrowed, letting callers skip a no-op edit.

use std::borrow::Cow;

use crate::classifier::{is_invisible_char, is_invisible_unit};

/// Returns `text` with every invisible character deleted.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use unseen_core::clean;
///
/// assert_eq!(clean("A\u{200B}B"), "AB");
/// assert!(matches!(clean("hello"), Cow::Borrowed("hello")));
/// ```
#[must_use]
pub fn clean(text: &str) -> Cow<'_, str> {
    let Some((first, _)) = text.char_indices().find(|(_, ch)| is_invisible_char(*ch)) else {
        return Cow::Borrowed(text);
    };

    let (kept, rest) = text.split_at(first);
    let mut cleaned = String::with_capacity(text.len());
    cleaned.push_str(kept);
    cleaned.extend(rest.chars().filter(|ch| !is_invisible_char(*ch)));
    Cow::Owned(cleaned)
}

/// Returns `units` with every invisible code unit deleted.
///
/// Surrogate halves, paired or not, are always kept.
#[must_use]
pub fn clean_utf16(units: &[u16]) -> Cow<'_, [u16]> {
    let Some(first) = units.iter().position(|unit| is_invisible_unit(*unit)) else {
        return Cow::Borrowed(units);
    };

    let (kept, rest) = units.split_at(first);
    let mut cleaned = Vec::with_capacity(units.len());
    cleaned.extend_from_slice(kept);
    cleaned.extend(rest.iter().copied().filter(|unit| !is_invisible_unit(*unit)));
    Cow::Owned(cleaned)
}
