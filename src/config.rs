//! Configuration: the contact affordance and default output format.
//!
//! Resolution order:
//! 1. An explicit `--config <path>` (must exist)
//! 2. `<config_dir>/incoterm-wizard/config.json` (used if present)
//! 3. Built-in defaults
//!
//! Every field is optional; missing fields take the built-in values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{WizardError, WizardResult};
use crate::types::OutputFormat;

/// Fixed "talk to a human" affordance shown alongside every result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Lead-in line above the number.
    #[serde(default = "default_headline")]
    pub headline: String,
    /// Number as shown to the user.
    #[serde(default = "default_display")]
    pub display: String,
    /// Dial string for `tel:` links (comma = pause before extension).
    #[serde(default = "default_dial")]
    pub dial: String,
}

fn default_headline() -> String {
    "Need expert assistance?".to_string()
}

fn default_display() -> String {
    "833-782-7628 Ext. 1".to_string()
}

fn default_dial() -> String {
    "8337827628,1".to_string()
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            headline: default_headline(),
            display: default_display(),
            dial: default_dial(),
        }
    }
}

impl Contact {
    /// `tel:` URI for the dial string.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.dial)
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contact: Contact,
    /// Output format for one-shot commands when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Default config file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("incoterm-wizard")
        .join("config.json")
}

impl Config {
    /// Parse configuration from JSON text.
    pub fn from_json(contents: &str) -> WizardResult<Self> {
        serde_json::from_str(contents)
            .map_err(|e| WizardError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from a specific file. The file must exist.
    pub fn load_from(path: &Path) -> WizardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WizardError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&contents)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit path, else the default location if it exists,
    /// else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> WizardResult<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_or_default(&default_config_path()),
        }
    }

    /// Load `path` if it exists; a missing file yields defaults.
    pub fn load_or_default(path: &Path) -> WizardResult<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
