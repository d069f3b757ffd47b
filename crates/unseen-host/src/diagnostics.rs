//! Conversion of core findings into LSP diagnostics.

use lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};
use serde_json::json;
use unseen_core::{Finding, HOVER_MESSAGE, INVISIBLE_CHARACTER_TAG, LineCol, Severity};

/// `source` attached to every published diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "unseen";

fn to_position(position: LineCol) -> Position {
    Position::new(position.line(), position.column())
}

const fn to_severity(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
    }
}

/// Builds the diagnostic for `finding` spanning `start..end`.
///
/// The `data` payload carries the hover text, the character family and the
/// flagged code unit so hosts can render richer hovers.
#[must_use]
pub fn to_diagnostic(finding: &Finding, start: LineCol, end: LineCol) -> Diagnostic {
    let mut diagnostic = Diagnostic::new(
        Range::new(to_position(start), to_position(end)),
        Some(to_severity(finding.severity())),
        Some(NumberOrString::String(finding.tag().to_owned())),
        Some(DIAGNOSTIC_SOURCE.to_owned()),
        finding.message().to_owned(),
        None,
        None,
    );
    diagnostic.data = Some(json!({
        "hover": HOVER_MESSAGE,
        "kind": finding.kind().label(),
        "codePoint": finding.span().code_point_label(),
    }));
    diagnostic
}

/// Returns `true` when `diagnostic` was produced by this scanner.
#[must_use]
pub fn is_invisible_character_diagnostic(diagnostic: &Diagnostic) -> bool {
    matches!(
        &diagnostic.code,
        Some(NumberOrString::String(code)) if code == INVISIBLE_CHARACTER_TAG
    )
}
