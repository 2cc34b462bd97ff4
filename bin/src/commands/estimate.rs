//! Estimate command implementation.
//!
//! This module reads the input files (or stdin), resolves the options
//! against the settings file and prints the reading time.

use anyhow::{Context, Result};
use readtime_lib::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::commands::config::load_settings;
use crate::display::{Format, format_read_time};

/// Options given on the command line. Unset flags defer to the settings.
#[derive(Debug, Default)]
pub(crate) struct EstimateFlags {
    pub(crate) words_per_minute: Option<u32>,
    pub(crate) seconds: bool,
    pub(crate) time_only: bool,
    pub(crate) abbreviated: bool,
    pub(crate) rtl: bool,
    pub(crate) ltr: bool,
    pub(crate) locale: Option<String>,
}

impl EstimateFlags {
    /// Builds a request for `content`, setting only the options that were given.
    pub(crate) fn to_request(&self, content: Content) -> ReadTimeRequest {
        let mut request = ReadTimeRequest::new(content);
        if let Some(words_per_minute) = self.words_per_minute {
            request = request.with_words_per_minute(words_per_minute);
        }
        if self.seconds {
            request = request.with_omit_seconds(false);
        }
        if self.time_only {
            request = request.with_time_only(true);
        }
        if self.abbreviated {
            request = request.with_abbreviated(true);
        }
        if self.rtl {
            request = request.with_ltr(false);
        } else if self.ltr {
            request = request.with_ltr(true);
        }
        if let Some(locale) = &self.locale {
            request = request.with_locale(locale.clone());
        }
        request
    }
}

/// Estimate the reading time of `files`, or of stdin when there are none.
pub(crate) fn estimate(
    files: &[PathBuf],
    flags: &EstimateFlags,
    format: Format,
    config: Option<&Path>,
) -> Result<()> {
    let settings = load_settings(config)?;
    let content = read_content(files)?;
    let read_time = read_time(flags.to_request(content), &settings)?;

    info!(
        words = read_time.word_count(),
        words_per_minute = read_time.options().words_per_minute(),
        "estimated reading time"
    );

    println!("{}", format_read_time(&read_time, format)?);
    Ok(())
}

/// Reads each file as one piece of content, or stdin when `files` is empty.
fn read_content(files: &[PathBuf]) -> Result<Content> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        debug!(bytes = input.len(), "read stdin");
        return Ok(Content::Text(input));
    }

    let pieces = files
        .iter()
        .map(|path| -> Result<Content> {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            debug!(path = %path.display(), bytes = text.len(), "read file");
            Ok(Content::Text(text))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(match <[Content; 1]>::try_from(pieces) {
        Ok([single]) => single,
        Err(pieces) => Content::Sequence(pieces),
    })
}
