//! Capabilities the boundary layer needs from an editor.

use lsp_types::Diagnostic;
use unseen_core::{LineCol, Match};

use crate::document::DocumentId;
use crate::errors::HostError;

/// Services an editor exposes to the dispatcher.
///
/// Offsets passed to [`EditorHost::offset_to_position`] are UTF-16 code
/// units into the snapshot most recently returned by
/// [`EditorHost::document_text`].
pub trait EditorHost {
    /// Returns the document that currently has focus, if any.
    fn active_document(&self) -> Option<DocumentId>;

    /// Returns the full text of `document`.
    fn document_text(&self, document: &DocumentId) -> Result<String, HostError>;

    /// Maps a UTF-16 offset to a line and column in `document`.
    fn offset_to_position(&self, document: &DocumentId, offset: usize)
    -> Result<LineCol, HostError>;

    /// Maps both ends of `span` to positions in `document`.
    ///
    /// Hosts holding a line index can resolve the pair in one lookup.
    fn span_positions(
        &self,
        document: &DocumentId,
        span: &Match,
    ) -> Result<(LineCol, LineCol), HostError> {
        let start = self.offset_to_position(document, span.start())?;
        let end = self.offset_to_position(document, span.end())?;
        Ok((start, end))
    }

    /// Replaces the entire content of `document` with `text`.
    fn replace_whole_document(
        &mut self,
        document: &DocumentId,
        text: String,
    ) -> Result<(), HostError>;

    /// Shows `diagnostics` for `document`, replacing anything shown before.
    ///
    /// An empty slice removes every diagnostic for the document.
    fn publish_findings(&mut self, document: &DocumentId, diagnostics: &[Diagnostic]);
}
