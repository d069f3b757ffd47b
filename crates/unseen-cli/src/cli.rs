//! Command-line argument definitions.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for `check` results.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One `path:line:column` line per finding.
    #[default]
    Human,
    /// One JSON object per finding.
    Json,
}

/// Finds and removes invisible characters in text files.
#[derive(Parser, Debug)]
#[command(name = "unseen", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Operations offered by the tool.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Reports every invisible character; exits 1 when any are found.
    Check {
        /// Controls how findings are rendered.
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
        /// Files to scan.
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<Utf8PathBuf>,
    },
    /// Removes every invisible character, rewriting files in place.
    Clean {
        /// Reports what would be removed without touching the files.
        #[arg(long)]
        dry_run: bool,
        /// Files to clean.
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<Utf8PathBuf>,
    },
}
