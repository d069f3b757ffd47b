//! BDD test world wrapping a dispatcher over an in-memory host.

use crate::{DispatchError, Dispatcher, DocumentId, MemoryHost, Outcome, Trigger};

/// Shared state exercised by BDD step implementations.
pub struct TestWorld {
    /// Dispatcher under test.
    pub dispatcher: Dispatcher<MemoryHost>,
    /// Outcome of the last successful dispatch.
    pub last_outcome: Option<Outcome>,
    /// Last error observed while dispatching.
    pub last_error: Option<DispatchError>,
}

impl TestWorld {
    /// Builds a world with no open documents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(MemoryHost::new()),
            last_outcome: None,
            last_error: None,
        }
    }

    /// Dispatches `trigger`, recording the outcome or the error.
    pub fn dispatch(&mut self, trigger: Trigger) {
        match self.dispatcher.dispatch(trigger) {
            Ok(outcome) => {
                self.last_outcome = Some(outcome);
                self.last_error = None;
            }
            Err(error) => {
                self.last_outcome = None;
                self.last_error = Some(error);
            }
        }
    }

    /// Returns the host's published diagnostics count for `document`.
    #[must_use]
    pub fn published_count(&self, document: &DocumentId) -> Option<usize> {
        self.dispatcher
            .host()
            .published(document)
            .map(<[_]>::len)
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}
