//! Output formats for the CLI's diagnostic log.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How log events are rendered on stderr.
///
/// Accepted spellings are `compact` and `json`, in any case.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One untimed line per event, readable next to finding reports.
    #[default]
    Compact,
    /// One timestamped JSON object per event.
    Json,
}

/// Error returned when `--log-format` names no known format.
pub type LogFormatParseError = strum::ParseError;
