//! Reading time estimation logic.

use readtime_types::{
    Content, ReadTimeError, ReadTimeOptions, Result, TranslationKey, TranslationOverrides,
    Translations,
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::markup::{collapse_whitespace, normalize, reverse_words};
use crate::summary::ReadTimeSummary;
use crate::words::count_words;

/// Seconds in a minute.
const SECONDS_PER_MINUTE: u64 = 60;

/// Estimated reading time for a word count under a set of options.
///
/// An estimate is always computed from the current options and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    /// Whole minutes, never less than one.
    pub minutes: u64,
    /// Remaining seconds, zero when seconds are omitted.
    pub seconds: u64,
    /// The formatted reading time, e.g. "3 min read".
    pub rendered_text: String,
}

impl Estimate {
    /// Computes the estimate for `word_count` words.
    #[must_use]
    pub fn compute(word_count: usize, options: &ReadTimeOptions) -> Self {
        let minutes = whole_minutes(word_count, options.words_per_minute());
        let seconds = remaining_seconds(word_count, options.words_per_minute());

        Self {
            minutes,
            seconds: if options.omit_seconds() { 0 } else { seconds },
            rendered_text: format_read_time(minutes, seconds, options),
        }
    }
}

/// Reading time estimator for a single piece of content.
///
/// The content is normalized and its words counted once, at construction.
/// Options are changed through consuming setters, and every read recomputes
/// the estimate from the options in place at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTime {
    /// Markup-stripped content.
    content: String,
    /// Number of words in `content`.
    word_count: usize,
    /// Formatting options.
    options: ReadTimeOptions,
}

impl ReadTime {
    /// Creates an estimator for `content` with the default options.
    #[must_use]
    pub fn new(content: impl Into<Content>) -> Self {
        Self::with_options(content, ReadTimeOptions::default())
    }

    /// Creates an estimator for `content` with the given options.
    #[must_use]
    pub fn with_options(content: impl Into<Content>, options: ReadTimeOptions) -> Self {
        let content = content.into();
        let normalized = normalize(&content);
        let word_count = count_words(&normalized);

        debug!(
            pieces = content.pieces(),
            bytes = normalized.len(),
            word_count,
            "normalized content"
        );

        Self {
            content: normalized,
            word_count,
            options,
        }
    }

    /// Creates an estimator from an untyped JSON value with the default options.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::InvalidInput`] if the value is neither a
    /// string nor a (possibly nested) array of strings.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::new(Content::from_value(value)?))
    }

    /// Sets whether minutes and seconds are abbreviated as min/sec.
    #[must_use]
    pub fn abbreviated(mut self, abbreviated: bool) -> Self {
        self.options = self.options.with_abbreviated(abbreviated);
        self
    }

    /// Sets whether seconds are left out of the estimate.
    #[must_use]
    pub fn omit_seconds(mut self, omit_seconds: bool) -> Self {
        self.options = self.options.with_omit_seconds(omit_seconds);
        self
    }

    /// Sets whether only the time is rendered, without the trailing "read".
    #[must_use]
    pub fn time_only(mut self, time_only: bool) -> Self {
        self.options = self.options.with_time_only(time_only);
        self
    }

    /// Sets whether the rendered text reads left to right.
    #[must_use]
    pub fn ltr(mut self, left_to_right: bool) -> Self {
        self.options = self.options.with_left_to_right(left_to_right);
        self
    }

    /// Sets whether the rendered text reads right to left.
    #[must_use]
    pub fn rtl(mut self, right_to_left: bool) -> Self {
        self.options = self.options.with_right_to_left(right_to_left);
        self
    }

    /// Sets the average words read per minute.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::InvalidInput`] if `words_per_minute` is zero.
    pub fn words_per_minute(mut self, words_per_minute: u32) -> Result<Self> {
        self.options = self.options.with_words_per_minute(words_per_minute)?;
        Ok(self)
    }

    /// Replaces the translations with `overrides` merged onto the English
    /// defaults. Keys set by an earlier call are not kept.
    #[must_use]
    pub fn set_translation(mut self, overrides: &TranslationOverrides) -> Self {
        self.options = self.options.with_translation(overrides);
        self
    }

    /// Returns the markup-stripped content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the number of words in the content.
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the current options.
    #[must_use]
    pub const fn options(&self) -> &ReadTimeOptions {
        &self.options
    }

    /// Returns the whole translations table.
    #[must_use]
    pub const fn translations(&self) -> &Translations {
        self.options.translations()
    }

    /// Returns a single translation by key name.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::UnknownTranslationKey`] for a key outside
    /// `min`, `minute`, `sec`, `second` and `read`.
    pub fn translation(&self, key: &str) -> Result<&str> {
        self.translations().lookup(key)
    }

    /// Computes the estimate for the current options.
    #[must_use]
    pub fn estimate(&self) -> Estimate {
        Estimate::compute(self.word_count, &self.options)
    }

    /// Returns the formatted reading time.
    #[must_use]
    pub fn render(&self) -> String {
        self.estimate().rendered_text
    }

    /// Returns a snapshot of the estimate together with every option.
    #[must_use]
    pub fn to_summary(&self) -> ReadTimeSummary {
        ReadTimeSummary::new(self.estimate(), self.word_count, &self.options)
    }

    /// Serializes [`Self::to_summary`] as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_summary()).map_err(ReadTimeError::from)
    }

    /// Serializes [`Self::to_summary`] as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_summary()).map_err(ReadTimeError::from)
    }
}

impl std::fmt::Display for ReadTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&ReadTime> for String {
    fn from(read_time: &ReadTime) -> Self {
        read_time.render()
    }
}

/// Whole minutes of reading, clamped to at least one.
fn whole_minutes(word_count: usize, words_per_minute: u32) -> u64 {
    (word_count as u64 / u64::from(words_per_minute)).max(1)
}

/// Seconds for the words left over after the whole minutes.
///
/// Equal to `floor((words mod wpm) / (wpm / 60))`, computed without floats.
fn remaining_seconds(word_count: usize, words_per_minute: u32) -> u64 {
    let words_per_minute = u64::from(words_per_minute);
    (word_count as u64 % words_per_minute) * SECONDS_PER_MINUTE / words_per_minute
}

/// Assembles the reading time phrase.
fn format_read_time(minutes: u64, seconds: u64, options: &ReadTimeOptions) -> String {
    let translations = options.translations();
    let (minute_key, second_key) = if options.abbreviated() {
        (TranslationKey::Min, TranslationKey::Sec)
    } else {
        (TranslationKey::Minute, TranslationKey::Second)
    };

    let mut message = format!("{minutes} {}", translations.get(minute_key));

    if !options.omit_seconds() && seconds > 0 {
        message.push_str(&format!(" {seconds} {}", translations.get(second_key)));
    }

    if !options.time_only() {
        message.push(' ');
        message.push_str(translations.get(TranslationKey::Read));
    }

    let message = collapse_whitespace(&message);
    trace!(%message, left_to_right = options.left_to_right(), "formatted read time");

    if options.left_to_right() {
        message
    } else {
        reverse_words(&message)
    }
}
