//! Per-document finding collection.

use std::collections::HashMap;

use lsp_types::Diagnostic;

use crate::document::DocumentId;

/// Holds the latest diagnostics for each document.
///
/// Writes replace; there is no merging.
#[derive(Debug, Default, Clone)]
pub struct FindingStore {
    entries: HashMap<DocumentId, Vec<Diagnostic>>,
}

impl FindingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the diagnostics recorded for `document`.
    pub fn set(&mut self, document: DocumentId, diagnostics: Vec<Diagnostic>) {
        self.entries.insert(document, diagnostics);
    }

    /// Forgets `document`, returning what was recorded.
    pub fn clear(&mut self, document: &DocumentId) -> Option<Vec<Diagnostic>> {
        self.entries.remove(document)
    }

    /// Returns the diagnostics recorded for `document`; empty when unknown.
    #[must_use]
    pub fn get(&self, document: &DocumentId) -> &[Diagnostic] {
        self.entries.get(document).map_or(&[], Vec::as_slice)
    }

    /// Number of documents with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no document has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
