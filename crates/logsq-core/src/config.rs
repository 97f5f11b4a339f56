//! Preference configuration.
//!
//! Hosts normally run with the defaults: the well-known editor mode key and
//! a preferences file under the platform config directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Store key holding the editor mode for fresh queries.
pub const EDITOR_MODE_DEFAULT_KEY: &str = "VictoriaLogsQueryEditorModeDefault";

/// Where and under which key the editor mode preference lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceConfig {
    /// Store key for the editor mode preference.
    #[serde(default = "default_key")]
    pub key: String,

    /// Override for the preferences file. Defaults to `default_prefs_path()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_key() -> String {
    EDITOR_MODE_DEFAULT_KEY.to_string()
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            path: None,
        }
    }
}

impl PreferenceConfig {
    /// Resolve the preferences file path.
    pub fn store_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => default_prefs_path().ok_or(ConfigError::NoConfigDir),
        }
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("logsq"))
}

/// Get the path to the default preferences file.
pub fn default_prefs_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("preferences.json"))
}
