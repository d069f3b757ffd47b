//! "Clean all" quick fix offered on scanner diagnostics.

use lsp_types::{CodeAction, CodeActionKind, Command, Diagnostic};

use crate::diagnostics::is_invisible_character_diagnostic;

/// Command identifier that triggers a whole-document clean.
pub const CLEAN_COMMAND: &str = "invisible-characters.checkInvisibleCharacters";

/// Title shown for the quick fix.
pub const CLEAN_ACTION_TITLE: &str = "Clean all Non-Printable Characters";

fn clean_action(diagnostic: &Diagnostic) -> CodeAction {
    CodeAction {
        title: CLEAN_ACTION_TITLE.to_owned(),
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![diagnostic.clone()]),
        edit: None,
        command: Some(Command::new(
            CLEAN_ACTION_TITLE.to_owned(),
            CLEAN_COMMAND.to_owned(),
            None,
        )),
        is_preferred: Some(true),
        disabled: None,
        data: None,
    }
}

/// Returns one preferred quick fix per scanner diagnostic in `diagnostics`.
///
/// Diagnostics from other sources are ignored. Every action runs
/// [`CLEAN_COMMAND`], which cleans the whole document rather than the single
/// range.
#[must_use]
pub fn code_actions(diagnostics: &[Diagnostic]) -> Vec<CodeAction> {
    diagnostics
        .iter()
        .filter(|diagnostic| is_invisible_character_diagnostic(diagnostic))
        .map(clean_action)
        .collect()
}
