//! Building an estimator from an options bag.

use readtime_config::Settings;
use readtime_estimate::ReadTime;
use readtime_locales::LocaleRegistry;
use readtime_types::{
    Content, ReadTimeError, ReadTimeOptions, Result, TranslationOverrides, Translations,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Content plus any options the caller wants to set explicitly.
///
/// Options left as `None` fall back to [`Settings`], and the reading
/// direction and translations fall back to the locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadTimeRequest {
    /// The content to estimate.
    pub content: Content,
    /// Omit seconds from the estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omit_seconds: Option<bool>,
    /// Render only the time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_only: Option<bool>,
    /// Abbreviate unit words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviated: Option<bool>,
    /// Reading speed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_per_minute: Option<u32>,
    /// Reading direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ltr: Option<bool>,
    /// Translations merged onto the English defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<TranslationOverrides>,
    /// Locale supplying the default direction and translations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Options of a request, without its content.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawOptions {
    omit_seconds: Option<bool>,
    time_only: Option<bool>,
    abbreviated: Option<bool>,
    words_per_minute: Option<u32>,
    ltr: Option<bool>,
    translation: Option<TranslationOverrides>,
    locale: Option<String>,
}

impl ReadTimeRequest {
    /// Creates a request for `content` with every option unset.
    #[must_use]
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Parses a request from JSON.
    ///
    /// A bare string or array is taken as the content. An object must carry
    /// a `content` key; the remaining keys are the options.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::Json`] for malformed JSON and
    /// [`ReadTimeError::InvalidInput`] for a missing or malformed content,
    /// an option of the wrong type, or zero words per minute.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Builds a request from an untyped JSON value.
    ///
    /// # Errors
    ///
    /// See [`Self::from_json`].
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = match value {
            Value::String(_) | Value::Array(_) => {
                return Ok(Self::new(Content::from_value(&value)?));
            }
            Value::Object(map) => map,
            _ => {
                return Err(ReadTimeError::InvalidInput(
                    "request must be a string, an array or an object".to_string(),
                ));
            }
        };

        let content = map.remove("content").ok_or_else(|| {
            ReadTimeError::InvalidInput("content must be supplied".to_string())
        })?;
        let content = Content::from_value(&content)?;

        let raw: RawOptions = serde_json::from_value(Value::Object(map))
            .map_err(|e| ReadTimeError::InvalidInput(e.to_string()))?;
        if raw.words_per_minute == Some(0) {
            return Err(ReadTimeError::zero_words_per_minute());
        }

        Ok(Self {
            content,
            omit_seconds: raw.omit_seconds,
            time_only: raw.time_only,
            abbreviated: raw.abbreviated,
            words_per_minute: raw.words_per_minute,
            ltr: raw.ltr,
            translation: raw.translation,
            locale: raw.locale,
        })
    }

    /// Sets whether seconds are omitted.
    #[must_use]
    pub const fn with_omit_seconds(mut self, omit_seconds: bool) -> Self {
        self.omit_seconds = Some(omit_seconds);
        self
    }

    /// Sets whether only the time is rendered.
    #[must_use]
    pub const fn with_time_only(mut self, time_only: bool) -> Self {
        self.time_only = Some(time_only);
        self
    }

    /// Sets whether unit words are abbreviated.
    #[must_use]
    pub const fn with_abbreviated(mut self, abbreviated: bool) -> Self {
        self.abbreviated = Some(abbreviated);
        self
    }

    /// Sets the reading speed.
    #[must_use]
    pub const fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = Some(words_per_minute);
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub const fn with_ltr(mut self, ltr: bool) -> Self {
        self.ltr = Some(ltr);
        self
    }

    /// Sets the translations.
    #[must_use]
    pub fn with_translation(mut self, translation: TranslationOverrides) -> Self {
        self.translation = Some(translation);
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Resolves the options of this request against `settings` and the
    /// locale store.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::UnknownLocale`] if the locale is not in the
    /// store and [`ReadTimeError::InvalidInput`] if the resolved words per
    /// minute is zero.
    pub fn resolve_options(&self, settings: &Settings) -> Result<ReadTimeOptions> {
        let locale_id = self.locale.as_deref().unwrap_or(&settings.locale);
        let locale = LocaleRegistry::global().resolve(locale_id)?;

        let translations = self.translation.as_ref().map_or_else(
            || locale.translation().clone(),
            Translations::from_overrides,
        );
        let ltr = self.ltr.unwrap_or_else(|| locale.ltr());
        let words_per_minute = self.words_per_minute.unwrap_or(settings.words_per_minute);

        debug!(
            locale = locale.id(),
            ltr,
            words_per_minute,
            custom_translation = self.translation.is_some(),
            "resolved read time options"
        );

        ReadTimeOptions::new()
            .with_omit_seconds(self.omit_seconds.unwrap_or(settings.omit_seconds))
            .with_time_only(self.time_only.unwrap_or(settings.time_only))
            .with_abbreviated(
                self.abbreviated
                    .unwrap_or(settings.abbreviate_time_measurements),
            )
            .with_left_to_right(ltr)
            .with_words_per_minute(words_per_minute)
            .map(|options| options.with_translations(translations))
    }
}

impl From<&str> for ReadTimeRequest {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for ReadTimeRequest {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<Vec<String>> for ReadTimeRequest {
    fn from(pieces: Vec<String>) -> Self {
        Self::new(pieces)
    }
}

impl From<Content> for ReadTimeRequest {
    fn from(content: Content) -> Self {
        Self::new(content)
    }
}

/// Creates an estimator from a request, filling unset options from
/// `settings` and the locale store.
///
/// # Errors
///
/// See [`ReadTimeRequest::resolve_options`].
pub fn read_time(request: impl Into<ReadTimeRequest>, settings: &Settings) -> Result<ReadTime> {
    let request = request.into();
    let options = request.resolve_options(settings)?;
    Ok(ReadTime::with_options(request.content, options))
}

/// Creates an estimator from a request using the built-in default settings.
///
/// # Errors
///
/// See [`ReadTimeRequest::resolve_options`].
pub fn read_time_with_defaults(request: impl Into<ReadTimeRequest>) -> Result<ReadTime> {
    read_time(request, &Settings::default())
}
