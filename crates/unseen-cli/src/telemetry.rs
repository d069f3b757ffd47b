//! Diagnostic logging for the CLI.
//!
//! Log events always go to stderr: stdout carries nothing but finding
//! reports, so `check --format json` output stays parseable line by line.
//! The default filter is `warn`, which keeps an ordinary run silent apart
//! from its reports.
//!
//! Compact output drops timestamps because a run lasts milliseconds; the
//! JSON format keeps an RFC 3339 timestamp for log collectors.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, debug, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use unseen_config::{Config, LogFormat};

const TELEMETRY_TARGET: &str = "unseen_cli::telemetry";

static LOGGING_INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors encountered while configuring logging.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// `--log-filter` or `UNSEEN_LOG_FILTER` is not a valid filter directive.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Another subscriber was installed first.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Installs the stderr subscriber described by `config`.
///
/// Only the first call in a process installs anything; later calls return
/// `Ok(())` without reading `config`.
pub fn initialise(config: &Config) -> Result<(), TelemetryError> {
    LOGGING_INSTALLED
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| ())
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .json()
                .flatten_event(true)
                .finish(),
        ),
        LogFormat::Compact => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .without_time()
                .compact()
                .finish(),
        ),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)?;
    debug!(
        target: TELEMETRY_TARGET,
        format = %config.log_format(),
        filter = config.log_filter(),
        "logging initialised"
    );
    Ok(())
}
