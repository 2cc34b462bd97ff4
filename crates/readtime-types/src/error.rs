//! Error types for readtime.

use thiserror::Error;

/// Result type alias for readtime operations.
pub type Result<T> = std::result::Result<T, ReadTimeError>;

/// Errors that can occur while building or rendering a read time estimate.
#[derive(Error, Debug)]
pub enum ReadTimeError {
    /// Content or an option value has the wrong shape.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Translation lookup for a key outside the fixed key set.
    #[error("Unknown translation key: {0}")]
    UnknownTranslationKey(String),

    /// Locale not present in the locale store.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReadTimeError {
    /// Shorthand for the error raised when words per minute is zero.
    #[must_use]
    pub fn zero_words_per_minute() -> Self {
        Self::InvalidInput("words per minute must be greater than zero".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReadTimeError::UnknownTranslationKey("hour".to_string());
        assert_eq!(err.to_string(), "Unknown translation key: hour");

        let err = ReadTimeError::zero_words_per_minute();
        assert_eq!(
            err.to_string(),
            "Invalid input: words per minute must be greater than zero"
        );
    }
}
