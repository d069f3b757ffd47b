//! Shared fixtures and helpers for boundary-layer tests.

mod world;

use rstest::fixture;

use crate::{Dispatcher, DocumentId, MemoryHost};

pub use unseen_core::test_support::unescape;
pub use world::TestWorld;

/// Common document used by host tests.
#[fixture]
pub fn sample_document() -> DocumentId {
    DocumentId::new("file:///workspace/notes.txt")
}

/// Builds a dispatcher over a host holding `text` in the focused document.
#[must_use]
pub fn focused_dispatcher(document: &DocumentId, text: &str) -> Dispatcher<MemoryHost> {
    let mut host = MemoryHost::new();
    host.open(document.clone(), text);
    host.focus(Some(document.clone()));
    Dispatcher::new(host)
}

/// Strips the surrounding quotes captured from a feature file.
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"')
}
