//! Locale strings and reading direction for readtime.
//!
//! This crate provides the locale store consulted when a caller does not
//! supply its own translations or reading direction.
//!
//! # Example
//!
//! ```
//! use readtime_locales::LocaleRegistry;
//!
//! let registry = LocaleRegistry::global();
//!
//! if let Some(locale) = registry.get("es") {
//!     println!("{}: reads left to right = {}", locale.name(), locale.ltr());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/readtime-rs/readtime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::sync::OnceLock;

use readtime_types::{ReadTimeError, Result, Translations};
use serde::Deserialize;
use tracing::debug;

/// The locale table embedded at compile time.
const LOCALES_JSON: &str = include_str!("../data/locales.json");

/// Identifier of the locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Global locale registry instance.
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

/// A single locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    id: String,
    name: String,
    ltr: bool,
    translation: Translations,
}

impl Locale {
    /// Creates a new locale.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ltr: bool,
        translation: Translations,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ltr,
            translation,
        }
    }

    /// Returns the locale identifier (e.g., "en").
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the English display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the language reads left to right.
    #[must_use]
    pub const fn ltr(&self) -> bool {
        self.ltr
    }

    /// Returns the translations table.
    #[must_use]
    pub const fn translation(&self) -> &Translations {
        &self.translation
    }
}

/// Raw locale entry from JSON.
#[derive(Debug, Deserialize)]
struct RawLocale {
    name: String,
    #[serde(default = "default_ltr")]
    ltr: bool,
    #[serde(default)]
    translation: Translations,
}

const fn default_ltr() -> bool {
    true
}

/// Registry of the supported locales.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: HashMap<String, Locale>,
}

impl LocaleRegistry {
    /// Returns the global locale registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(|| Self::from_json(LOCALES_JSON).expect("Invalid locales.json"))
    }

    /// Creates a registry from a JSON object keyed by locale identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, RawLocale> = serde_json::from_str(json)?;
        let locales: HashMap<String, Locale> = raw
            .into_iter()
            .map(|(id, raw)| {
                let id = id.to_lowercase();
                let locale = Locale::new(id.clone(), raw.name, raw.ltr, raw.translation);
                (id, locale)
            })
            .collect();
        debug!(count = locales.len(), "loaded locales");
        Ok(Self { locales })
    }

    /// Looks up a locale by identifier (case-insensitive).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Locale> {
        self.locales.get(&id.to_lowercase())
    }

    /// Looks up a locale by identifier, failing if it is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::UnknownLocale`] if no locale has this identifier.
    pub fn resolve(&self, id: &str) -> Result<&Locale> {
        self.get(id)
            .ok_or_else(|| ReadTimeError::UnknownLocale(id.to_string()))
    }

    /// Returns all locales as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &Locale> {
        self.locales.values()
    }

    /// Returns all locales that read right to left.
    pub fn right_to_left(&self) -> impl Iterator<Item = &Locale> {
        self.all().filter(|locale| !locale.ltr())
    }

    /// Returns the total number of locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Returns all locale identifiers sorted alphabetically.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.all().map(Locale::id).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readtime_types::TranslationKey;

    #[test]
    fn test_registry_loads() {
        let registry = LocaleRegistry::global();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn test_default_locale_is_english() {
        let english = LocaleRegistry::global()
            .get(DEFAULT_LOCALE)
            .expect("en should exist");
        assert!(english.ltr());
        assert_eq!(english.translation(), &Translations::english());
    }

    #[test]
    fn test_get_spanish_case_insensitive() {
        let spanish = LocaleRegistry::global().get("ES").expect("es should exist");
        assert_eq!(spanish.id(), "es");
        assert_eq!(spanish.translation().get(TranslationKey::Read), "leer");
        assert_eq!(spanish.translation().get(TranslationKey::Minute), "minuto");
    }

    #[test]
    fn test_resolve_unknown_locale() {
        let result = LocaleRegistry::global().resolve("xx");
        assert!(matches!(result, Err(ReadTimeError::UnknownLocale(id)) if id == "xx"));
    }

    #[test]
    fn test_right_to_left_locales() {
        let mut ids: Vec<&str> = LocaleRegistry::global()
            .right_to_left()
            .map(Locale::id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["ar", "fa", "he"]);
    }

    #[test]
    fn test_ids_sorted() {
        let ids = LocaleRegistry::global().ids();
        assert_eq!(ids.first(), Some(&"ar"));
        assert_eq!(ids.last(), Some(&"pt"));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let registry =
            LocaleRegistry::from_json(r#"{"EO": {"name": "Esperanto", "translation": {"read": "legi"}}}"#)
                .unwrap();
        let locale = registry.get("eo").unwrap();
        assert!(locale.ltr());
        assert_eq!(locale.translation().get(TranslationKey::Read), "legi");
        assert_eq!(locale.translation().get(TranslationKey::Second), "second");
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            LocaleRegistry::from_json("[1, 2]"),
            Err(ReadTimeError::Json(_))
        ));
    }
}
