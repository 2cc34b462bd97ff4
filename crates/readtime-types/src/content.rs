//! Content accepted by the estimator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ReadTimeError, Result};

/// Raw textual or markup content.
///
/// Content is either a single string or an ordered, possibly nested,
/// sequence of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// A single piece of text.
    Text(String),
    /// An ordered sequence of pieces, each of which may itself be a sequence.
    Sequence(Vec<Content>),
}

impl Content {
    /// Builds content from an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ReadTimeError::InvalidInput`] if the value, or any element
    /// nested inside it, is neither a string nor an array.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::from_value)
                .collect::<Result<Vec<_>>>()
                .map(Self::Sequence),
            other => Err(ReadTimeError::InvalidInput(format!(
                "content must be a string or an array of strings, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// Returns the number of text pieces, counting nested ones.
    #[must_use]
    pub fn pieces(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Sequence(items) => items.iter().map(Self::pieces).sum(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Content {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
