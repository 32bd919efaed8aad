//! # Configuration Module
//!
//! Runtime settings for the tracker and where they come from.
//!
//! Settings are resolved in three layers, later ones winning:
//! 1. Built-in defaults (`report.txt` in the working directory, colors on
//!    when stdout is a terminal)
//! 2. An optional JSON config file, by default in the platform config directory:
//!    - Linux: `~/.config/musictrack/config.json`
//!    - macOS: `~/Library/Application Support/musictrack/config.json`
//!    - Windows: `%APPDATA%\musictrack\config.json`
//! 3. Command-line flags
//!
//! A missing config file is not an error. A malformed one is.

use crate::report::DEFAULT_REPORT_FILE;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Returns the platform-appropriate config file path, if the platform has one.
///
/// The directory is not created; the file is only ever read.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("musictrack").join("config.json"))
}

/// Settings read from the config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub report_path: Option<PathBuf>,
    pub color: Option<bool>,
}

impl FileConfig {
    /// Parse a config file. `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// valid config object.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(None);
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON in config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(Some(config))
    }
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Path to the append-only report file
    pub report_path: PathBuf,
    /// Whether console output is colored
    pub color: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            color: std::io::stdout().is_terminal(),
        }
    }
}

/// Command-line overrides, applied after the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub no_color: bool,
}

impl RuntimeConfig {
    /// Layer a config file's values over these settings.
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(report_path) = file.report_path {
            self.report_path = report_path;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        self
    }

    /// Layer command-line overrides over these settings.
    pub fn merge_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(report_path) = &overrides.report_path {
            self.report_path.clone_from(report_path);
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }

    /// Resolve defaults, the config file and command-line overrides.
    ///
    /// An explicitly given config file must exist; the default one may be absent.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `overrides.config_path` names a file that does not exist
    /// - the config file in use cannot be read
    /// - the config file is malformed JSON or has unknown keys
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        let file = match &overrides.config_path {
            Some(path) => Some(
                FileConfig::load(path)?
                    .with_context(|| format!("Config file {} does not exist", path.display()))?,
            ),
            None => match default_config_path() {
                Some(path) => FileConfig::load(&path)?,
                None => None,
            },
        };

        let config = Self::default()
            .merge_file(file.unwrap_or_default())
            .merge_overrides(overrides);
        debug!("Resolved configuration: {config:?}");
        Ok(config)
    }
}
