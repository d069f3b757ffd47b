//! Document identity.

use std::fmt;
use std::str::FromStr;

use lsp_types::Uri;

use crate::errors::HostError;

/// Identifies a document by its URI string.
///
/// The identifier is compared textually; hosts are expected to hand out the
/// same URI for the same document across triggers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wraps a URI string.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Returns the URI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the identifier as an LSP URI.
    pub fn to_uri(&self) -> Result<Uri, HostError> {
        Uri::from_str(&self.0).map_err(|_| HostError::invalid_uri(self.0.clone()))
    }
}

impl From<&Uri> for DocumentId {
    fn from(uri: &Uri) -> Self {
        Self::new(uri.as_str())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
