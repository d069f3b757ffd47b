//! Command-line runtime for the `unseen` invisible-character scanner.
//!
//! The runtime splits configuration flags from the command, loads the
//! layered configuration, installs logging and then drives the
//! `unseen-host` dispatcher over a file-backed host. Each named file is
//! focused in turn, exactly as an editor would focus a document.
//!
//! Exit status is `0` when nothing was found (or everything was cleaned),
//! `1` when `check` reported findings and `2` on usage, configuration or
//! file errors.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use tracing::{info, warn};
use unseen_host::{Dispatcher, DocumentId, Outcome, Trigger};

mod cli;
mod config;
mod errors;
mod files;
mod report;
pub mod telemetry;

pub use cli::OutputFormat;
use cli::{Cli, CliCommand};
use config::{ConfigLoader, OrthoConfigLoader, split_config_arguments};
use errors::AppError;
use files::FileHost;
use report::FindingReport;

const FINDINGS_EXIT: u8 = 1;
const ERROR_EXIT: u8 = 2;

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&args);

    let result = Cli::try_parse_from(&split.command_arguments)
        .map_err(AppError::CliUsage)
        .and_then(|cli| {
            let config = loader.load(&split.config_arguments)?;
            telemetry::initialise(&config)?;
            Ok(execute(cli.command, stdout, stderr))
        });

    match result {
        Ok(exit_code) => exit_code,
        Err(AppError::CliUsage(error)) => report_usage(&error, stdout, stderr),
        Err(error) => {
            report_error(stderr, &error);
            ExitCode::from(ERROR_EXIT)
        }
    }
}

fn report_usage<W: Write, E: Write>(error: &clap::Error, stdout: &mut W, stderr: &mut E) -> ExitCode {
    let rendered = error.render();
    let written = if error.use_stderr() {
        write!(stderr, "{rendered}")
    } else {
        write!(stdout, "{rendered}")
    };
    if written.is_err() {
        return ExitCode::from(ERROR_EXIT);
    }
    u8::try_from(error.exit_code()).map_or(ExitCode::from(ERROR_EXIT), ExitCode::from)
}

fn report_error<E: Write>(stderr: &mut E, error: &AppError) {
    let _ = writeln!(stderr, "unseen: {error}");
}

fn execute<W: Write, E: Write>(command: CliCommand, stdout: &mut W, stderr: &mut E) -> ExitCode {
    let (mut session, result) = match command {
        CliCommand::Check { format, paths } => {
            let mut session = Session::open(&paths, false, stderr);
            let result = session.check(format, stdout, stderr);
            (session, result)
        }
        CliCommand::Clean { dry_run, paths } => {
            let mut session = Session::open(&paths, dry_run, stderr);
            let result = session.clean(dry_run, stdout, stderr);
            (session, result)
        }
    };

    if let Err(error) = result {
        report_error(stderr, &error);
        session.failures += 1;
    }
    session.exit_code()
}

/// Files opened for one invocation plus the running tallies.
struct Session {
    dispatcher: Dispatcher<FileHost>,
    documents: Vec<(DocumentId, Utf8PathBuf)>,
    failures: usize,
    findings: usize,
}

impl Session {
    fn open<E: Write>(paths: &[Utf8PathBuf], dry_run: bool, stderr: &mut E) -> Self {
        let mut host = FileHost::new(dry_run);
        let mut documents: Vec<(DocumentId, Utf8PathBuf)> = Vec::new();
        let mut failures = 0;
        for path in paths {
            match host.load(path) {
                Ok(document) if documents.iter().any(|(seen, _)| *seen == document) => {}
                Ok(document) => documents.push((document, path.clone())),
                Err(error) => {
                    report_error(stderr, &error);
                    failures += 1;
                }
            }
        }

        Self {
            dispatcher: Dispatcher::new(host),
            documents,
            failures,
            findings: 0,
        }
    }

    /// Focuses `document` and runs `trigger` against it.
    fn focus_and_dispatch(
        dispatcher: &mut Dispatcher<FileHost>,
        document: &DocumentId,
        path: &Utf8Path,
        trigger: Trigger,
    ) -> Result<Outcome, AppError> {
        dispatcher.host_mut().focus(document);
        dispatcher
            .dispatch(trigger)
            .map_err(|source| AppError::dispatch(path, source))
    }

    /// Closes `document` so its findings and text are released.
    fn close(dispatcher: &mut Dispatcher<FileHost>, document: &DocumentId, path: &Utf8Path) {
        dispatcher.host_mut().close(document);
        let closed = Trigger::DocumentClosed {
            document: document.clone(),
        };
        if let Err(error) = dispatcher.dispatch(closed) {
            warn!(path = %path, %error, "failed to release document");
        }
    }

    fn check<W: Write, E: Write>(
        &mut self,
        format: OutputFormat,
        stdout: &mut W,
        stderr: &mut E,
    ) -> Result<(), AppError> {
        for (document, path) in &self.documents {
            let trigger = Trigger::ActiveEditorChanged {
                document: Some(document.clone()),
            };
            let written =
                match Self::focus_and_dispatch(&mut self.dispatcher, document, path, trigger) {
                    Ok(_) => Self::write_findings(&self.dispatcher, document, path, format, stdout),
                    Err(error) => {
                        report_error(stderr, &error);
                        self.failures += 1;
                        Ok(0)
                    }
                };
            Self::close(&mut self.dispatcher, document, path);
            self.findings += written?;
        }

        info!(
            files = self.documents.len(),
            findings = self.findings,
            "check complete"
        );
        Ok(())
    }

    /// Writes one report line per finding stored for `document`.
    fn write_findings<W: Write>(
        dispatcher: &Dispatcher<FileHost>,
        document: &DocumentId,
        path: &Utf8Path,
        format: OutputFormat,
        stdout: &mut W,
    ) -> Result<usize, AppError> {
        let diagnostics = dispatcher.findings(document);
        for diagnostic in diagnostics {
            let report = FindingReport::new(path, diagnostic);
            match format {
                OutputFormat::Human => report.write_human(stdout)?,
                OutputFormat::Json => report.write_json(stdout)?,
            }
        }
        Ok(diagnostics.len())
    }

    fn clean<W: Write, E: Write>(
        &mut self,
        dry_run: bool,
        stdout: &mut W,
        stderr: &mut E,
    ) -> Result<(), AppError> {
        let verb = if dry_run { "would remove" } else { "removed" };
        for (document, path) in &self.documents {
            match Self::focus_and_dispatch(&mut self.dispatcher, document, path, Trigger::CleanCommand)
            {
                Ok(Outcome::Cleaned { removed, .. }) => {
                    writeln!(stdout, "{path}: {verb} {removed} invisible character(s)")?;
                }
                Ok(_) => writeln!(stdout, "{path}: no invisible characters")?,
                Err(error) => {
                    report_error(stderr, &error);
                    self.failures += 1;
                }
            }
            Self::close(&mut self.dispatcher, document, path);
        }

        info!(files = self.documents.len(), dry_run, "clean complete");
        Ok(())
    }

    fn exit_code(&self) -> ExitCode {
        if self.failures > 0 {
            ExitCode::from(ERROR_EXIT)
        } else if self.findings > 0 {
            ExitCode::from(FINDINGS_EXIT)
        } else {
            ExitCode::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests;
