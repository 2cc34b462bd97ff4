//! Formatting options for a read time estimate.

use crate::{ReadTimeError, Result, TranslationOverrides, Translations};

/// Default reading speed in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 230;

/// Formatting options for a read time estimate.
///
/// Setters consume and return the options so they can be chained; an
/// options value is never shared between estimators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTimeOptions {
    abbreviated: bool,
    omit_seconds: bool,
    time_only: bool,
    left_to_right: bool,
    words_per_minute: u32,
    translations: Translations,
}

impl ReadTimeOptions {
    /// Creates options with the default settings: seconds omitted, full unit
    /// words, left-to-right, 230 words per minute and English strings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            abbreviated: false,
            omit_seconds: true,
            time_only: false,
            left_to_right: true,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            translations: Translations::english(),
        }
    }

    /// Sets whether unit words are abbreviated.
    #[must_use]
    pub const fn with_abbreviated(mut self, abbreviated: bool) -> Self {
        self.abbreviated = abbreviated;
        self
    }

    /// Sets whether seconds are left out of the estimate.
    #[must_use]
    pub const fn with_omit_seconds(mut self, omit_seconds: bool) -> Self {
        self.omit_seconds = omit_seconds;
        self
    }

    /// Sets whether only the time phrase is rendered.
    #[must_use]
    pub const fn with_time_only(mut self, time_only: bool) -> Self {
        self.time_only = time_only;
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub const fn with_left_to_right(mut self, left_to_right: bool) -> Self {
        self.left_to_right = left_to_right;
        self
    }

    /// Sets the reading direction from the right-to-left point of view.
    #[must_use]
    pub const fn with_right_to_left(self, right_to_left: bool) -> Self {
        self.with_left_to_right(!right_to_left)
    }

    /// Sets the reading speed.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::InvalidInput`] if `words_per_minute` is zero.
    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Result<Self> {
        if words_per_minute == 0 {
            return Err(ReadTimeError::zero_words_per_minute());
        }
        self.words_per_minute = words_per_minute;
        Ok(self)
    }

    /// Replaces the translations table with `overrides` merged onto the
    /// English defaults.
    #[must_use]
    pub fn with_translation(self, overrides: &TranslationOverrides) -> Self {
        self.with_translations(Translations::from_overrides(overrides))
    }

    /// Replaces the translations table.
    #[must_use]
    pub fn with_translations(mut self, translations: Translations) -> Self {
        self.translations = translations;
        self
    }

    /// Returns true if unit words are abbreviated.
    #[must_use]
    pub const fn abbreviated(&self) -> bool {
        self.abbreviated
    }

    /// Returns true if seconds are omitted.
    #[must_use]
    pub const fn omit_seconds(&self) -> bool {
        self.omit_seconds
    }

    /// Returns true if only the time phrase is rendered.
    #[must_use]
    pub const fn time_only(&self) -> bool {
        self.time_only
    }

    /// Returns true if the text reads left to right.
    #[must_use]
    pub const fn left_to_right(&self) -> bool {
        self.left_to_right
    }

    /// Returns the reading speed in words per minute. Never zero.
    #[must_use]
    pub const fn words_per_minute(&self) -> u32 {
        self.words_per_minute
    }

    /// Returns the translations table.
    #[must_use]
    pub const fn translations(&self) -> &Translations {
        &self.translations
    }
}

impl Default for ReadTimeOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TranslationKey;

    #[test]
    fn test_defaults() {
        let options = ReadTimeOptions::default();
        assert!(!options.abbreviated());
        assert!(options.omit_seconds());
        assert!(!options.time_only());
        assert!(options.left_to_right());
        assert_eq!(options.words_per_minute(), 230);
        assert_eq!(options.translations(), &Translations::english());
    }

    #[test]
    fn test_right_to_left_inverts() {
        let options = ReadTimeOptions::new().with_right_to_left(true);
        assert!(!options.left_to_right());

        let options = options.with_right_to_left(false);
        assert!(options.left_to_right());
    }

    #[test]
    fn test_zero_words_per_minute_rejected() {
        let result = ReadTimeOptions::new().with_words_per_minute(0);
        assert!(matches!(result, Err(ReadTimeError::InvalidInput(_))));

        let options = ReadTimeOptions::new().with_words_per_minute(150).unwrap();
        assert_eq!(options.words_per_minute(), 150);
    }

    #[test]
    fn test_translation_replaces_whole_table() {
        let spanish = TranslationOverrides::new()
            .with(TranslationKey::Minute, "minuto")
            .with(TranslationKey::Read, "leer");
        let options = ReadTimeOptions::new().with_translation(&spanish);
        assert_eq!(options.translations().get(TranslationKey::Read), "leer");

        let options = options.with_translation(&TranslationOverrides::new());
        assert_eq!(options.translations(), &Translations::english());
    }
}
