//! Settings storage.

use directories::ProjectDirs;
use readtime_types::DEFAULT_WORDS_PER_MINUTE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name of the settings file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can occur while loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine the configuration directory.
    #[error("Failed to determine configuration directory")]
    NoConfigDir,

    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse settings file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize JSON.
    #[error("Failed to serialize settings: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// A setting has an unusable value.
    #[error("Invalid setting '{key}': {message}")]
    Invalid {
        /// The offending key.
        key: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Default options applied when a caller leaves an option unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether minute/second should be abbreviated as min/sec.
    pub abbreviate_time_measurements: bool,
    /// Omit seconds from the estimate.
    pub omit_seconds: bool,
    /// Render only the time, without the trailing "read".
    pub time_only: bool,
    /// Average reading speed.
    pub words_per_minute: u32,
    /// Locale supplying the default translations and reading direction.
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            abbreviate_time_measurements: false,
            omit_seconds: true,
            time_only: false,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            locale: "en".to_string(),
        }
    }
}

impl Settings {
    /// Returns the default path of the settings file.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.config/readtime/config.json`
    /// - macOS: `~/Library/Application Support/readtime/config.json`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\readtime\config\config.json`
    ///
    /// Falls back to `~/.readtime/config.json` if the platform-specific
    /// location cannot be determined.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if neither location can be found.
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "readtime")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(dirs_fallback)
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads settings from `path`.
    ///
    /// A missing file yields the defaults. Keys absent from the file take
    /// their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Self =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: e,
            })?;
        settings.validate()?;

        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Loads settings from the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the default path cannot be determined or the file
    /// cannot be loaded.
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path()?)
    }

    /// Writes the settings to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `words_per_minute` is zero or the
    /// locale is empty.
    pub fn validate(&self) -> Result<()> {
        if self.words_per_minute == 0 {
            return Err(ConfigError::Invalid {
                key: "words_per_minute",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "locale",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Fallback to the home directory if `ProjectDirs` fails.
fn dirs_fallback() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".readtime"))
}
