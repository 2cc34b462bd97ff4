//! Translation table used to assemble a read time string.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ReadTimeError;

/// One of the five translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationKey {
    /// Abbreviated minute unit.
    Min,
    /// Full minute unit.
    Minute,
    /// Abbreviated second unit.
    Sec,
    /// Full second unit.
    Second,
    /// Trailing descriptive word.
    Read,
}

impl TranslationKey {
    /// Returns the key as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Minute => "minute",
            Self::Sec => "sec",
            Self::Second => "second",
            Self::Read => "read",
        }
    }

    /// Returns the English default for this key.
    #[must_use]
    pub const fn english(&self) -> &'static str {
        // The English strings are the key names.
        self.as_str()
    }

    /// Returns all translation keys.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Min, Self::Minute, Self::Sec, Self::Second, Self::Read]
    }
}

impl std::fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TranslationKey {
    type Err = ReadTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Self::Min),
            "minute" => Ok(Self::Minute),
            "sec" => Ok(Self::Sec),
            "second" => Ok(Self::Second),
            "read" => Ok(Self::Read),
            _ => Err(ReadTimeError::UnknownTranslationKey(s.to_string())),
        }
    }
}

/// A partial translations table.
///
/// Every key left as `None` falls back to its English default when the
/// overrides are turned into a [`Translations`] table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationOverrides {
    /// Abbreviated minute unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    /// Full minute unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<String>,
    /// Abbreviated second unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec: Option<String>,
    /// Full second unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
    /// Trailing descriptive word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
}

impl TranslationOverrides {
    /// Creates an empty set of overrides.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: None,
            minute: None,
            sec: None,
            second: None,
            read: None,
        }
    }

    /// Sets the value for a key.
    #[must_use]
    pub fn with(mut self, key: TranslationKey, value: impl Into<String>) -> Self {
        *self.slot_mut(key) = Some(value.into());
        self
    }

    /// Returns the override for a key, if any.
    #[must_use]
    pub fn get(&self, key: TranslationKey) -> Option<&str> {
        match key {
            TranslationKey::Min => self.min.as_deref(),
            TranslationKey::Minute => self.minute.as_deref(),
            TranslationKey::Sec => self.sec.as_deref(),
            TranslationKey::Second => self.second.as_deref(),
            TranslationKey::Read => self.read.as_deref(),
        }
    }

    /// Returns true if no key is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        TranslationKey::all().iter().all(|key| self.get(*key).is_none())
    }

    fn slot_mut(&mut self, key: TranslationKey) -> &mut Option<String> {
        match key {
            TranslationKey::Min => &mut self.min,
            TranslationKey::Minute => &mut self.minute,
            TranslationKey::Sec => &mut self.sec,
            TranslationKey::Second => &mut self.second,
            TranslationKey::Read => &mut self.read,
        }
    }
}

/// The complete five-key translations table.
///
/// Deserializing goes through [`TranslationOverrides`], so a JSON object with
/// missing keys still yields a complete table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TranslationOverrides")]
pub struct Translations {
    min: String,
    minute: String,
    sec: String,
    second: String,
    read: String,
}

impl Translations {
    /// Returns the English table.
    #[must_use]
    pub fn english() -> Self {
        Self::from_overrides(&TranslationOverrides::new())
    }

    /// Builds a complete table from overrides, filling every missing key
    /// with its English default.
    #[must_use]
    pub fn from_overrides(overrides: &TranslationOverrides) -> Self {
        let pick = |key: TranslationKey| {
            overrides
                .get(key)
                .unwrap_or_else(|| key.english())
                .to_string()
        };
        Self {
            min: pick(TranslationKey::Min),
            minute: pick(TranslationKey::Minute),
            sec: pick(TranslationKey::Sec),
            second: pick(TranslationKey::Second),
            read: pick(TranslationKey::Read),
        }
    }

    /// Returns the string for a key.
    #[must_use]
    pub fn get(&self, key: TranslationKey) -> &str {
        match key {
            TranslationKey::Min => &self.min,
            TranslationKey::Minute => &self.minute,
            TranslationKey::Sec => &self.sec,
            TranslationKey::Second => &self.second,
            TranslationKey::Read => &self.read,
        }
    }

    /// Returns the string for a key given by name.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::UnknownTranslationKey`] if `key` is not one
    /// of `min`, `minute`, `sec`, `second` or `read`.
    pub fn lookup(&self, key: &str) -> Result<&str, ReadTimeError> {
        Ok(self.get(key.parse()?))
    }

    /// Returns the `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (TranslationKey, &str)> {
        TranslationKey::all().iter().map(|key| (*key, self.get(*key)))
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::english()
    }
}

impl From<TranslationOverrides> for Translations {
    fn from(overrides: TranslationOverrides) -> Self {
        Self::from_overrides(&overrides)
    }
}

impl From<&Translations> for TranslationOverrides {
    fn from(translations: &Translations) -> Self {
        translations
            .iter()
            .fold(Self::new(), |acc, (key, value)| acc.with(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_defaults() {
        let translations = Translations::default();
        assert_eq!(translations.get(TranslationKey::Min), "min");
        assert_eq!(translations.get(TranslationKey::Minute), "minute");
        assert_eq!(translations.get(TranslationKey::Sec), "sec");
        assert_eq!(translations.get(TranslationKey::Second), "second");
        assert_eq!(translations.get(TranslationKey::Read), "read");
    }

    #[test]
    fn test_partial_overrides_fall_back() {
        let overrides = TranslationOverrides::new().with(TranslationKey::Minute, "minuto");
        let translations = Translations::from_overrides(&overrides);

        assert_eq!(translations.get(TranslationKey::Minute), "minuto");
        assert_eq!(translations.get(TranslationKey::Min), "min");
        assert_eq!(translations.get(TranslationKey::Read), "read");
    }

    #[test]
    fn test_lookup_unknown_key() {
        let translations = Translations::default();
        assert_eq!(translations.lookup("second").unwrap(), "second");
        assert!(matches!(
            translations.lookup("hour"),
            Err(ReadTimeError::UnknownTranslationKey(key)) if key == "hour"
        ));
    }

    #[test]
    fn test_key_parse() {
        assert_eq!("sec".parse::<TranslationKey>().unwrap(), TranslationKey::Sec);
        assert!("Sec".parse::<TranslationKey>().is_err());
        assert!("".parse::<TranslationKey>().is_err());
    }

    #[test]
    fn test_deserialize_partial_table() {
        let translations: Translations = serde_json::from_str(r#"{"read": "leer"}"#).unwrap();
        assert_eq!(translations.get(TranslationKey::Read), "leer");
        assert_eq!(translations.get(TranslationKey::Second), "second");
    }

    #[test]
    fn test_serialize_full_table() {
        let json = serde_json::to_string(&Translations::default()).unwrap();
        assert_eq!(
            json,
            r#"{"min":"min","minute":"minute","sec":"sec","second":"second","read":"read"}"#
        );
    }

    #[test]
    fn test_overrides_from_translations() {
        let translations = Translations::default();
        let overrides = TranslationOverrides::from(&translations);
        assert!(!overrides.is_empty());
        assert_eq!(overrides.get(TranslationKey::Sec), Some("sec"));
        assert!(TranslationOverrides::new().is_empty());
    }
}
