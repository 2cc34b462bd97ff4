//! Display utilities and output formatting for the readtime CLI.

use anyhow::Result;
use clap::ValueEnum;
use readtime_lib::prelude::*;

/// Output format for an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// The rendered reading time only.
    Text,
    /// Compact JSON summary.
    Json,
    /// Pretty-printed JSON summary.
    JsonPretty,
}

impl Format {
    /// Returns the format name as accepted on the command line.
    pub(crate) const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::JsonPretty => "json-pretty",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats an estimate for output.
pub(crate) fn format_read_time(read_time: &ReadTime, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => read_time.render(),
        Format::Json => read_time.to_json()?,
        Format::JsonPretty => read_time.to_json_pretty()?,
    })
}

/// Returns a short label for a reading direction.
pub(crate) const fn direction_label(ltr: bool) -> &'static str {
    if ltr { "ltr" } else { "rtl" }
}
