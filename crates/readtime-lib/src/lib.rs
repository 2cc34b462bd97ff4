//! Estimated reading time for text and HTML content.
//!
//! This is a facade crate that re-exports functionality from the readtime
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use readtime_lib::prelude::*;
//!
//! let article = "<h1>Title</h1><p>".to_string() + &"word ".repeat(500) + "</p>";
//! let read_time = ReadTime::new(article)
//!     .abbreviated(true)
//!     .omit_seconds(false);
//!
//! assert_eq!(read_time.render(), "2 min 10 sec read");
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/readtime-rs/readtime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod factory;

// Re-export core types
pub use readtime_types::*;

// Re-export the estimator
pub use readtime_estimate::{
    Estimate, ReadTime, ReadTimeSummary, collapse_whitespace, count_words, normalize,
    reverse_words, strip_tags,
};

// Re-export the locale store
pub use readtime_locales::{DEFAULT_LOCALE, Locale, LocaleRegistry};

// Re-export settings
pub use readtime_config::{ConfigError, Settings};

pub use factory::{ReadTimeRequest, read_time, read_time_with_defaults};

/// Prelude module for convenient imports.
///
/// ```
/// use readtime_lib::prelude::*;
/// ```
pub mod prelude {
    pub use readtime_types::{
        Content, ReadTimeError, ReadTimeOptions, Result, TranslationKey, TranslationOverrides,
        Translations,
    };

    pub use readtime_estimate::{Estimate, ReadTime, ReadTimeSummary};

    pub use readtime_locales::{Locale, LocaleRegistry};

    pub use readtime_config::Settings;

    pub use crate::factory::{ReadTimeRequest, read_time, read_time_with_defaults};
}
