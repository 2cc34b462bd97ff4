//! Core types for the readtime reading time estimator.
//!
//! This crate provides the fundamental data structures used throughout readtime:
//!
//! - [`Content`] - Raw text or a nested sequence of text pieces
//! - [`Translations`] - The five locale strings used to assemble a read time
//! - [`TranslationKey`] - One of the five translation keys
//! - [`TranslationOverrides`] - A partial translations table merged onto English defaults
//! - [`ReadTimeOptions`] - Formatting options for a read time estimate

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/readtime-rs/readtime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod content;
mod error;
mod options;
mod translation;

pub use content::Content;
pub use error::{ReadTimeError, Result};
pub use options::{DEFAULT_WORDS_PER_MINUTE, ReadTimeOptions};
pub use translation::{TranslationKey, TranslationOverrides, Translations};
