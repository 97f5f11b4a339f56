//! Typed access to the persisted editor mode.

use std::sync::Arc;

use logsq_core::{EditorMode, PreferenceConfig, StoreError, EDITOR_MODE_DEFAULT_KEY};

use crate::store::PreferenceStore;

/// The editor mode a user prefers for fresh queries.
///
/// Wraps a shared store and the key the mode lives under. Reading never
/// fails: store errors and values that are not a valid mode read as `None`.
#[derive(Clone)]
pub struct EditorModePreference {
    store: Arc<dyn PreferenceStore>,
    key: String,
}

impl EditorModePreference {
    /// Use the well-known editor mode key.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_key(store, EDITOR_MODE_DEFAULT_KEY)
    }

    pub fn with_key(store: Arc<dyn PreferenceStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn from_config(store: Arc<dyn PreferenceStore>, config: &PreferenceConfig) -> Self {
        Self::with_key(store, config.key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored mode.
    pub fn load(&self) -> Option<EditorMode> {
        match self.store.get(&self.key) {
            Ok(Some(value)) => {
                let mode = EditorMode::parse(&value);
                if mode.is_none() && !value.is_empty() {
                    tracing::warn!("Ignoring invalid editor mode preference {:?}", value);
                }
                mode
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read editor mode preference: {}", e);
                None
            }
        }
    }

    /// Overwrite the stored mode.
    pub fn save(&self, mode: EditorMode) -> Result<(), StoreError> {
        self.store.set(&self.key, mode.as_str())
    }
}

impl std::fmt::Debug for EditorModePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorModePreference")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
