//! Editor boundary layer for the `unseen` scanner.
//!
//! The crate feeds document snapshots from a host editor into
//! `unseen-core`, turns the resulting findings into LSP diagnostics, and owns
//! the per-document finding collection. Hosts implement [`EditorHost`] to
//! expose their text, position and edit services; lifecycle events arrive as
//! [`Trigger`] values handed to a [`Dispatcher`].
//!
//! Every scan fully replaces the previous findings for its document. There
//! is no merging and no ordering guarantee beyond "last scan wins".
//!
//! # Example
//!
//! ```
//! use unseen_host::{DocumentId, Dispatcher, MemoryHost, Outcome, Trigger};
//!
//! let document = DocumentId::new("file:///notes.txt");
//! let mut host = MemoryHost::new();
//! host.open(document.clone(), "A\u{200B}B");
//! host.focus(Some(document.clone()));
//!
//! let mut dispatcher = Dispatcher::new(host);
//! dispatcher.dispatch(Trigger::Activated)?;
//! assert_eq!(dispatcher.findings(&document).len(), 1);
//!
//! let outcome = dispatcher.dispatch(Trigger::CleanCommand)?;
//! assert!(matches!(outcome, Outcome::Cleaned { removed: 1, .. }));
//! assert_eq!(dispatcher.host().text(&document), Some("AB"));
//! # Ok::<(), unseen_host::DispatchError>(())
//! ```

mod code_action;
mod diagnostics;
mod dispatcher;
mod document;
mod errors;
mod host;
mod memory;
mod store;

pub use code_action::{CLEAN_ACTION_TITLE, CLEAN_COMMAND, code_actions};
pub use diagnostics::{DIAGNOSTIC_SOURCE, is_invisible_character_diagnostic, to_diagnostic};
pub use dispatcher::{Dispatcher, Outcome, Trigger};
pub use document::DocumentId;
pub use errors::{DispatchError, HostError, HostOperation};
pub use host::EditorHost;
pub use memory::MemoryHost;
pub use store::FindingStore;

#[cfg(test)]
mod tests;
