//! File-backed [`EditorHost`].
//!
//! Files are read into an in-memory host; a whole-document replacement is
//! written back to disk before the in-memory copy changes, so a failed write
//! leaves both untouched. In dry-run mode only the in-memory copy changes.

use std::collections::BTreeMap;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use lsp_types::Diagnostic;
use tracing::debug;
use unseen_core::{LineCol, Match};
use unseen_host::{DocumentId, EditorHost, HostError, MemoryHost};
use url::Url;

use crate::AppError;

const FILES_TARGET: &str = "unseen_cli::files";

pub(crate) struct FileHost {
    memory: MemoryHost,
    paths: BTreeMap<DocumentId, Utf8PathBuf>,
    dry_run: bool,
}

impl FileHost {
    pub(crate) fn new(dry_run: bool) -> Self {
        Self {
            memory: MemoryHost::new(),
            paths: BTreeMap::new(),
            dry_run,
        }
    }

    /// Reads `path` and opens it under its `file://` URI.
    pub(crate) fn load(&mut self, path: &Utf8Path) -> Result<DocumentId, AppError> {
        let document = document_id(path)?;
        let text = fs::read_to_string(path).map_err(|source| AppError::read(path, source))?;
        debug!(
            target: FILES_TARGET,
            path = %path,
            document = %document,
            "loaded file"
        );
        self.memory.open(document.clone(), text);
        self.paths.insert(document.clone(), path.to_path_buf());
        Ok(document)
    }

    pub(crate) fn focus(&mut self, document: &DocumentId) {
        self.memory.focus(Some(document.clone()));
    }

    pub(crate) fn close(&mut self, document: &DocumentId) {
        self.memory.close(document);
        self.paths.remove(document);
    }
}

fn document_id(path: &Utf8Path) -> Result<DocumentId, AppError> {
    let absolute =
        std::path::absolute(path.as_std_path()).map_err(|source| AppError::read(path, source))?;
    Url::from_file_path(absolute)
        .map(|url| DocumentId::new(url.as_str()))
        .map_err(|()| AppError::invalid_path(path))
}

impl EditorHost for FileHost {
    fn active_document(&self) -> Option<DocumentId> {
        self.memory.active_document()
    }

    fn document_text(&self, document: &DocumentId) -> Result<String, HostError> {
        self.memory.document_text(document)
    }

    fn offset_to_position(
        &self,
        document: &DocumentId,
        offset: usize,
    ) -> Result<LineCol, HostError> {
        self.memory.offset_to_position(document, offset)
    }

    fn span_positions(
        &self,
        document: &DocumentId,
        span: &Match,
    ) -> Result<(LineCol, LineCol), HostError> {
        self.memory.span_positions(document, span)
    }

    fn replace_whole_document(
        &mut self,
        document: &DocumentId,
        text: String,
    ) -> Result<(), HostError> {
        if !self.dry_run {
            let path = self
                .paths
                .get(document)
                .ok_or_else(|| HostError::unknown_document(document.clone()))?;
            fs::write(path, &text)
                .map_err(|error| HostError::edit_rejected(document.clone(), error.to_string()))?;
            debug!(target: FILES_TARGET, path = %path, "rewrote file");
        }
        self.memory.replace_whole_document(document, text)
    }

    fn publish_findings(&mut self, document: &DocumentId, diagnostics: &[Diagnostic]) {
        self.memory.publish_findings(document, diagnostics);
    }
}
