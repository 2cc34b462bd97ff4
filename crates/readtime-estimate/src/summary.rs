//! Serializable snapshot of an estimate.

use readtime_types::{ReadTimeOptions, Translations};
use serde::{Deserialize, Serialize};

use crate::Estimate;

/// An estimate together with every option that produced it.
///
/// This is the record exposed by API responses; the serialized key names are
/// stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadTimeSummary {
    /// Whole minutes, never less than one.
    pub minutes: u64,
    /// Remaining seconds, zero when seconds are omitted.
    pub seconds: u64,
    /// The formatted reading time.
    #[serde(rename = "read_time")]
    pub rendered_text: String,
    /// Whether unit words are abbreviated.
    pub abbreviated: bool,
    /// Whether the text reads left to right.
    pub left_to_right: bool,
    /// Whether seconds are omitted.
    pub omit_seconds: bool,
    /// Whether only the time phrase is rendered.
    pub time_only: bool,
    /// The translations table in use.
    #[serde(rename = "translation")]
    pub translations: Translations,
    /// Number of words in the content.
    #[serde(rename = "words_in_content")]
    pub word_count: usize,
    /// Reading speed in words per minute.
    pub words_per_minute: u32,
}

impl ReadTimeSummary {
    /// Creates a summary from an estimate and the options it was computed with.
    #[must_use]
    pub fn new(estimate: Estimate, word_count: usize, options: &ReadTimeOptions) -> Self {
        Self {
            minutes: estimate.minutes,
            seconds: estimate.seconds,
            rendered_text: estimate.rendered_text,
            abbreviated: options.abbreviated(),
            left_to_right: options.left_to_right(),
            omit_seconds: options.omit_seconds(),
            time_only: options.time_only(),
            translations: options.translations().clone(),
            word_count,
            words_per_minute: options.words_per_minute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ReadTime;

    const RECIPE: &str = include_str!("../testdata/recipe.html");

    #[test]
    fn test_summary_echoes_options() {
        let summary = ReadTime::new(RECIPE)
            .words_per_minute(150)
            .unwrap()
            .time_only(true)
            .omit_seconds(false)
            .to_summary();

        assert_eq!(summary.words_per_minute, 150);
        assert!(summary.time_only);
        assert!(!summary.omit_seconds);
        assert!(summary.left_to_right);
        assert!(!summary.abbreviated);
        assert_eq!(summary.word_count, 270);
        assert_eq!(summary.minutes, 1);
        assert_eq!(summary.seconds, 48);
        assert_eq!(summary.rendered_text, "1 minute 48 second");
    }

    #[test]
    fn test_json_keys() {
        let json = ReadTime::new(RECIPE).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["minutes"], 1);
        assert_eq!(value["seconds"], 0);
        assert_eq!(value["read_time"], "1 minute read");
        assert_eq!(value["abbreviated"], false);
        assert_eq!(value["left_to_right"], true);
        assert_eq!(value["omit_seconds"], true);
        assert_eq!(value["time_only"], false);
        assert_eq!(value["translation"]["read"], "read");
        assert_eq!(value["words_in_content"], 270);
        assert_eq!(value["words_per_minute"], 230);
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let read_time = ReadTime::new(RECIPE).abbreviated(true);
        let pretty = read_time.to_json_pretty().unwrap();
        assert!(pretty.contains('\n'));

        let parsed: super::ReadTimeSummary = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, read_time.to_summary());
    }
}
