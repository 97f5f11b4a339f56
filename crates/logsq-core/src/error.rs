//! Error types for the logs query editor.

use thiserror::Error;

/// Preference store errors.
///
/// Never surfaced by the editor operations themselves; they degrade to
/// their documented fallbacks and log instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading or writing the backing file.
    #[error("IO error: {0}")]
    Io(String),

    /// Backing file exists but is not a JSON object of strings.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entries could not be encoded for writing.
    #[error("Serialize error: {0}")]
    Serialize(String),

    /// Store cannot be reached (disabled, quota exceeded, ...).
    #[error("Preference store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_error_is_distinct_from_parse() {
        let error = StoreError::Serialize("key must be a string".to_string());
        assert_eq!(error.to_string(), "Serialize error: key must be a string");
        assert!(!matches!(error, StoreError::Parse(_)));
    }

    #[test]
    fn test_config_error_conversion() {
        let error: StoreError = ConfigError::NoConfigDir.into();
        assert!(matches!(error, StoreError::Config(ConfigError::NoConfigDir)));
        assert_eq!(error.to_string(), "Config directory not found");
    }
}
