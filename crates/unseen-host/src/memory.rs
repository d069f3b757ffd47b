//! In-memory [`EditorHost`] used by the command-line front end and tests.

use std::collections::{BTreeMap, BTreeSet};

use lsp_types::Diagnostic;
use unseen_core::{LineCol, LineIndex, Match};

use crate::document::DocumentId;
use crate::errors::HostError;
use crate::host::EditorHost;

#[derive(Debug, Clone)]
struct OpenDocument {
    text: String,
    index: LineIndex,
    version: u32,
}

impl OpenDocument {
    fn new(text: String) -> Self {
        let index = LineIndex::new(&text);
        Self {
            text,
            index,
            version: 0,
        }
    }

    fn replace(&mut self, text: String) {
        self.index = LineIndex::new(&text);
        self.text = text;
        self.version = self.version.saturating_add(1);
    }
}

/// Holds open documents, focus and published diagnostics in memory.
///
/// Edits can be refused per document with [`MemoryHost::reject_edits`],
/// mirroring a read-only buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    documents: BTreeMap<DocumentId, OpenDocument>,
    active: Option<DocumentId>,
    published: BTreeMap<DocumentId, Vec<Diagnostic>>,
    read_only: BTreeSet<DocumentId>,
}

impl MemoryHost {
    /// Creates a host with no open documents.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `document` with `text`, replacing any earlier content.
    pub fn open(&mut self, document: DocumentId, text: impl Into<String>) {
        self.documents.insert(document, OpenDocument::new(text.into()));
    }

    /// Closes `document`. Focus is dropped when it pointed at the document.
    ///
    /// Published diagnostics are left alone; the dispatcher clears them.
    pub fn close(&mut self, document: &DocumentId) -> Option<String> {
        if self.active.as_ref() == Some(document) {
            self.active = None;
        }
        self.read_only.remove(document);
        self.documents.remove(document).map(|open| open.text)
    }

    /// Moves focus to `document`, or clears it.
    pub fn focus(&mut self, document: Option<DocumentId>) {
        self.active = document;
    }

    /// Makes every later replacement of `document` fail.
    pub fn reject_edits(&mut self, document: DocumentId) {
        self.read_only.insert(document);
    }

    /// Returns the current text of `document`.
    #[must_use]
    pub fn text(&self, document: &DocumentId) -> Option<&str> {
        self.documents.get(document).map(|open| open.text.as_str())
    }

    /// Number of replacements applied to `document` since it was opened.
    #[must_use]
    pub fn version(&self, document: &DocumentId) -> Option<u32> {
        self.documents.get(document).map(|open| open.version)
    }

    /// Returns the diagnostics last published for `document`.
    ///
    /// `None` means nothing was ever published; an empty slice means the
    /// diagnostics were cleared.
    #[must_use]
    pub fn published(&self, document: &DocumentId) -> Option<&[Diagnostic]> {
        self.published.get(document).map(Vec::as_slice)
    }

    /// Iterates over open documents in identifier order.
    pub fn documents(&self) -> impl Iterator<Item = (&DocumentId, &str)> {
        self.documents
            .iter()
            .map(|(document, open)| (document, open.text.as_str()))
    }

    fn document(&self, document: &DocumentId) -> Result<&OpenDocument, HostError> {
        self.documents
            .get(document)
            .ok_or_else(|| HostError::unknown_document(document.clone()))
    }
}

impl EditorHost for MemoryHost {
    fn active_document(&self) -> Option<DocumentId> {
        self.active.clone()
    }

    fn document_text(&self, document: &DocumentId) -> Result<String, HostError> {
        self.document(document).map(|open| open.text.clone())
    }

    fn offset_to_position(
        &self,
        document: &DocumentId,
        offset: usize,
    ) -> Result<LineCol, HostError> {
        self.document(document)?
            .index
            .position(offset)
            .map_err(|source| HostError::position(document.clone(), source))
    }

    fn span_positions(
        &self,
        document: &DocumentId,
        span: &Match,
    ) -> Result<(LineCol, LineCol), HostError> {
        self.document(document)?
            .index
            .span_positions(span)
            .map_err(|source| HostError::position(document.clone(), source))
    }

    fn replace_whole_document(
        &mut self,
        document: &DocumentId,
        text: String,
    ) -> Result<(), HostError> {
        if self.read_only.contains(document) {
            return Err(HostError::edit_rejected(
                document.clone(),
                "document is read-only",
            ));
        }
        let open = self
            .documents
            .get_mut(document)
            .ok_or_else(|| HostError::unknown_document(document.clone()))?;
        open.replace(text);
        Ok(())
    }

    fn publish_findings(&mut self, document: &DocumentId, diagnostics: &[Diagnostic]) {
        self.published.insert(document.clone(), diagnostics.to_vec());
    }
}
