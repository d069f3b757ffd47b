//! Rendering of published diagnostics for the terminal.

use std::io::Write;

use camino::Utf8Path;
use lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString};
use serde::Serialize;
use serde_json::Value;
use unseen_core::LineCol;

use crate::AppError;

/// One finding as shown to the user, with one-based coordinates.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FindingReport<'a> {
    path: &'a Utf8Path,
    line: u32,
    column: u32,
    end_line: u32,
    end_column: u32,
    severity: &'static str,
    message: &'a str,
    code: &'a str,
    code_point: &'a str,
    kind: &'a str,
}

fn data_field<'a>(diagnostic: &'a Diagnostic, key: &str) -> &'a str {
    diagnostic
        .data
        .as_ref()
        .and_then(|data| data.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

impl<'a> FindingReport<'a> {
    pub(crate) fn new(path: &'a Utf8Path, diagnostic: &'a Diagnostic) -> Self {
        let code = match &diagnostic.code {
            Some(NumberOrString::String(code)) => code.as_str(),
            _ => "",
        };
        let severity = if diagnostic.severity == Some(DiagnosticSeverity::ERROR) {
            "error"
        } else {
            "warning"
        };
        let range = diagnostic.range;
        let (line, column) = LineCol::new(range.start.line, range.start.character).one_based();
        let (end_line, end_column) = LineCol::new(range.end.line, range.end.character).one_based();
        Self {
            path,
            line,
            column,
            end_line,
            end_column,
            severity,
            message: &diagnostic.message,
            code,
            code_point: data_field(diagnostic, "codePoint"),
            kind: data_field(diagnostic, "kind"),
        }
    }

    /// Writes `path:line:column: severity: message (U+XXXX kind) [code]`.
    pub(crate) fn write_human(&self, out: &mut impl Write) -> Result<(), AppError> {
        writeln!(
            out,
            "{}:{}:{}: {}: {} ({} {}) [{}]",
            self.path,
            self.line,
            self.column,
            self.severity,
            self.message,
            self.code_point,
            self.kind,
            self.code
        )?;
        Ok(())
    }

    /// Writes the finding as a single JSON line.
    pub(crate) fn write_json(&self, out: &mut impl Write) -> Result<(), AppError> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
