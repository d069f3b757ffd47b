//! Routes editor lifecycle triggers to scan, clean and clear operations.

use std::borrow::Cow;

use lsp_types::Diagnostic;
use tracing::{debug, warn};
use unseen_core::{Finding, clean, scan};

use crate::diagnostics::to_diagnostic;
use crate::document::DocumentId;
use crate::errors::{DispatchError, HostError, HostOperation};
use crate::host::EditorHost;
use crate::store::FindingStore;

const DISPATCH_TARGET: &str = "unseen_host::dispatch";

/// Editor events the boundary layer reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The extension started; the focused document is scanned.
    Activated,
    /// The focused document is about to be saved.
    WillSave,
    /// Focus moved. `None` means no editor has focus and nothing happens.
    ActiveEditorChanged {
        /// Newly focused document.
        document: Option<DocumentId>,
    },
    /// A document was closed; its findings are discarded.
    DocumentClosed {
        /// Closed document.
        document: DocumentId,
    },
    /// The "clean all" command ran against the focused document.
    CleanCommand,
}

/// What a dispatched trigger did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No document was in scope.
    Idle,
    /// A document was scanned and its findings published.
    Refreshed {
        /// Scanned document.
        document: DocumentId,
        /// Number of published findings.
        findings: usize,
    },
    /// A clean found nothing to remove; no edit was issued.
    Unchanged {
        /// Inspected document.
        document: DocumentId,
    },
    /// A document was replaced with its cleaned text and re-scanned.
    Cleaned {
        /// Cleaned document.
        document: DocumentId,
        /// Number of characters removed.
        removed: usize,
        /// Findings left after the re-scan.
        remaining: usize,
    },
    /// A document's findings were discarded.
    Cleared {
        /// Closed document.
        document: DocumentId,
    },
}

/// Owns the finding collection and drives an [`EditorHost`].
#[derive(Debug)]
pub struct Dispatcher<H> {
    host: H,
    store: FindingStore,
}

impl<H: EditorHost> Dispatcher<H> {
    /// Wraps `host` with an empty finding collection.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            store: FindingStore::new(),
        }
    }

    /// Returns the wrapped host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the wrapped host mutably, e.g. to open or focus documents.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the finding collection.
    #[must_use]
    pub fn store(&self) -> &FindingStore {
        &self.store
    }

    /// Returns the latest diagnostics for `document`.
    #[must_use]
    pub fn findings(&self, document: &DocumentId) -> &[Diagnostic] {
        self.store.get(document)
    }

    /// Handles a single trigger.
    ///
    /// Triggers that need a focused document return [`Outcome::Idle`] when
    /// there is none. A failed clean leaves the document and its findings
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Host`] when the host cannot supply text,
    /// resolve a position or apply the replacement.
    pub fn dispatch(&mut self, trigger: Trigger) -> Result<Outcome, DispatchError> {
        debug!(target: DISPATCH_TARGET, ?trigger, "dispatching trigger");
        match trigger {
            Trigger::Activated | Trigger::WillSave => self
                .host
                .active_document()
                .map_or(Ok(Outcome::Idle), |document| self.refresh(document)),
            Trigger::ActiveEditorChanged {
                document: Some(document),
            } => self.refresh(document),
            Trigger::ActiveEditorChanged { document: None } => Ok(Outcome::Idle),
            Trigger::DocumentClosed { document } => Ok(self.forget(document)),
            Trigger::CleanCommand => self
                .host
                .active_document()
                .map_or(Ok(Outcome::Idle), |document| self.clean_document(document)),
        }
    }

    fn refresh(&mut self, document: DocumentId) -> Result<Outcome, DispatchError> {
        let findings = self.publish(&document, HostOperation::Refresh)?;
        Ok(Outcome::Refreshed { document, findings })
    }

    /// Scans `document`, publishes the diagnostics and returns their count.
    fn publish(
        &mut self,
        document: &DocumentId,
        operation: HostOperation,
    ) -> Result<usize, DispatchError> {
        let text = self
            .host
            .document_text(document)
            .map_err(|source| DispatchError::host(document.clone(), operation, source))?;
        let diagnostics = scan(&text)
            .map(|finding| self.diagnostic_for(document, &finding))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| DispatchError::host(document.clone(), operation, source))?;

        let findings = diagnostics.len();
        self.host.publish_findings(document, &diagnostics);
        self.store.set(document.clone(), diagnostics);
        debug!(
            target: DISPATCH_TARGET,
            document = %document,
            findings,
            "published findings"
        );
        Ok(findings)
    }

    fn diagnostic_for(
        &self,
        document: &DocumentId,
        finding: &Finding,
    ) -> Result<Diagnostic, HostError> {
        let (start, end) = self.host.span_positions(document, finding.span())?;
        Ok(to_diagnostic(finding, start, end))
    }

    fn clean_document(&mut self, document: DocumentId) -> Result<Outcome, DispatchError> {
        let text = self
            .host
            .document_text(&document)
            .map_err(|source| DispatchError::host(document.clone(), HostOperation::Clean, source))?;

        let cleaned = match clean(&text) {
            Cow::Borrowed(_) => {
                self.publish(&document, HostOperation::Clean)?;
                return Ok(Outcome::Unchanged { document });
            }
            Cow::Owned(cleaned) => cleaned,
        };
        let removed = scan(&text).count();

        if let Err(source) = self.host.replace_whole_document(&document, cleaned) {
            warn!(
                target: DISPATCH_TARGET,
                document = %document,
                error = %source,
                "host rejected clean edit"
            );
            return Err(DispatchError::host(document, HostOperation::Clean, source));
        }

        let remaining = self.publish(&document, HostOperation::Clean)?;
        debug!(
            target: DISPATCH_TARGET,
            document = %document,
            removed,
            remaining,
            "cleaned document"
        );
        Ok(Outcome::Cleaned {
            document,
            removed,
            remaining,
        })
    }

    fn forget(&mut self, document: DocumentId) -> Outcome {
        self.store.clear(&document);
        self.host.publish_findings(&document, &[]);
        debug!(target: DISPATCH_TARGET, document = %document, "cleared findings");
        Outcome::Cleared { document }
    }
}
