//! Error types surfaced by the boundary layer.

use std::fmt;

use thiserror::Error;
use unseen_core::PositionError;

use crate::document::DocumentId;

/// Operation being executed when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOperation {
    /// Reading a snapshot and publishing its findings.
    Refresh,
    /// Replacing a document with its cleaned text.
    Clean,
}

impl fmt::Display for HostOperation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Refresh => "refresh",
            Self::Clean => "clean",
        };
        formatter.write_str(label)
    }
}

/// Failures reported by an [`crate::EditorHost`].
#[derive(Debug, Error)]
pub enum HostError {
    /// The host has no document with this identifier.
    #[error("document '{document}' is not open")]
    UnknownDocument {
        /// Document requested by the caller.
        document: DocumentId,
    },

    /// The host refused a whole-document replacement.
    #[error("edit to '{document}' was rejected: {reason}")]
    EditRejected {
        /// Document the edit targeted.
        document: DocumentId,
        /// Host-supplied explanation.
        reason: String,
    },

    /// An offset could not be mapped to a position.
    #[error("position lookup failed for '{document}': {source}")]
    Position {
        /// Document being resolved.
        document: DocumentId,
        /// Underlying lookup failure.
        #[source]
        source: PositionError,
    },

    /// A document identifier is not a valid URI.
    #[error("'{value}' is not a valid document URI")]
    InvalidUri {
        /// Rejected identifier.
        value: String,
    },
}

impl HostError {
    /// Builds an `UnknownDocument` error.
    #[must_use]
    pub fn unknown_document(document: DocumentId) -> Self {
        Self::UnknownDocument { document }
    }

    /// Builds an `EditRejected` error.
    #[must_use]
    pub fn edit_rejected(document: DocumentId, reason: impl Into<String>) -> Self {
        Self::EditRejected {
            document,
            reason: reason.into(),
        }
    }

    /// Wraps a position lookup failure.
    #[must_use]
    pub fn position(document: DocumentId, source: PositionError) -> Self {
        Self::Position { document, source }
    }

    pub(crate) fn invalid_uri(value: String) -> Self {
        Self::InvalidUri { value }
    }
}

/// Errors returned by [`crate::Dispatcher::dispatch`].
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The host failed while the dispatcher was handling a trigger.
    #[error("host failed during {operation} of '{document}': {source}")]
    Host {
        /// Document being processed.
        document: DocumentId,
        /// Operation that failed.
        operation: HostOperation,
        /// Underlying host error.
        #[source]
        source: HostError,
    },
}

impl DispatchError {
    pub(crate) fn host(document: DocumentId, operation: HostOperation, source: HostError) -> Self {
        Self::Host {
            document,
            operation,
            source,
        }
    }

    /// Returns the document the failing trigger targeted.
    #[must_use]
    pub fn document(&self) -> &DocumentId {
        match self {
            Self::Host { document, .. } => document,
        }
    }
}
