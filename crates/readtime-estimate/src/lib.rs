//! Reading time estimation and formatting for readtime.
//!
//! This crate turns raw text or markup into a human-readable reading time:
//!
//! - [`ReadTime`] - Normalizes content, counts words and renders the estimate
//! - [`Estimate`] - Minutes, seconds and rendered text for the current options
//! - [`ReadTimeSummary`] - Serializable snapshot of an estimate and its options
//! - [`normalize`], [`strip_tags`], [`count_words`] - The normalization building blocks

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/readtime-rs/readtime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod markup;
mod summary;
mod words;

pub use estimator::{Estimate, ReadTime};
pub use markup::{collapse_whitespace, normalize, reverse_words, strip_tags};
pub use summary::ReadTimeSummary;
pub use words::count_words;
