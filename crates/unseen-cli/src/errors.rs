//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use unseen_host::DispatchError;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot resolve {path} to a file URI")]
    InvalidPath { path: Utf8PathBuf },
    #[error("{path}: {source}")]
    Dispatch {
        path: Utf8PathBuf,
        #[source]
        source: DispatchError,
    },
    #[error("failed to serialise finding: {0}")]
    Serialise(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    pub(crate) fn read(path: &Utf8Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn invalid_path(path: &Utf8Path) -> Self {
        Self::InvalidPath {
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn dispatch(path: &Utf8Path, source: DispatchError) -> Self {
        Self::Dispatch {
            path: path.to_path_buf(),
            source,
        }
    }
}
