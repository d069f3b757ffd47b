//! CLI entrypoint for the `unseen` invisible-character scanner.
//!
//! The binary delegates to [`unseen_cli::run`], which loads configuration,
//! parses the command line and drives the scanner over the named files.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    unseen_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
