//! CLI command implementations.

pub(crate) mod config;
pub(crate) mod estimate;
pub(crate) mod locales;
