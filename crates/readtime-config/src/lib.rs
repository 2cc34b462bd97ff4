//! Process-wide default settings for readtime.
//!
//! This crate provides the defaults applied to every estimate whose caller
//! leaves an option unset:
//!
//! - [`Settings`] - Default formatting options and locale
//! - [`ConfigError`] - Errors raised while loading or saving settings

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/readtime-rs/readtime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod settings;

pub use settings::{CONFIG_FILE_NAME, ConfigError, Result, Settings};
