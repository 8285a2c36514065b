//! User settings for Pocket Metrics
//!
//! Presentation preferences only: currency symbol, the preset a session
//! starts with, and the log filter. Income and rules are never stored here.

use serde::{Deserialize, Serialize};

use super::paths::PocketPaths;
use crate::error::PocketError;
use crate::models::Preset;

/// User settings for Pocket Metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol printed after amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Preset selected when a session starts
    #[serde(default)]
    pub default_preset: Preset,

    /// tracing filter directive used when `POCKET_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Show key hints in the TUI status bar
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_preset: Preset::default(),
            log_filter: default_log_filter(),
            show_key_hints: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketPaths) -> Result<Self, PocketError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PocketError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PocketError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketPaths) -> Result<(), PocketError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PocketError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            PocketError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
