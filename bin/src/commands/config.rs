//! Config command implementation.
//!
//! This module resolves the settings file and handles showing or
//! initializing it.

use anyhow::{Context, Result, bail};
use readtime_lib::Settings;
use std::path::{Path, PathBuf};
use tracing::info;

/// Returns the settings file path, honoring an explicit `--config`.
pub(crate) fn settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Settings::default_path().context("Failed to locate the settings file"),
    }
}

/// Loads settings from an explicit `--config` path, or from the default
/// location.
pub(crate) fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Settings::load_default().context("Failed to load the default settings file"),
    }
}

/// Show the resolved settings, print the path, or write the defaults.
pub(crate) fn config(explicit: Option<&Path>, path_only: bool, init: bool, force: bool) -> Result<()> {
    let path = settings_path(explicit)?;

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    if init {
        if path.exists() && !force {
            bail!(
                "Settings file already exists: {}. Use --force to overwrite.",
                path.display()
            );
        }
        Settings::default()
            .save(&path)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        info!(path = %path.display(), "wrote default settings");
        println!("Wrote default settings to {}", path.display());
        return Ok(());
    }

    let settings = load_settings(Some(path.as_path()))?;
    let source = if path.exists() { "file" } else { "defaults" };

    println!("Settings file: {} ({source})", path.display());
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
