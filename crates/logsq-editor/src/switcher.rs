//! Editor mode switching.

use std::sync::Arc;

use logsq_core::{EditorMode, Query};
use logsq_prefs::{EditorModePreference, PreferenceStore};

/// Applies a user's editor mode toggle to a query.
#[derive(Debug, Clone)]
pub struct ModeSwitcher {
    preference: EditorModePreference,
}

impl ModeSwitcher {
    /// Create a switcher writing the well-known preference key to `store`.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_preference(EditorModePreference::new(store))
    }

    pub fn with_preference(preference: EditorModePreference) -> Self {
        Self { preference }
    }

    /// Switch `query` to `mode` and hand the result to `on_change`.
    ///
    /// When the expression is exactly empty the choice also becomes the
    /// default for fresh queries. With an absent or non-empty expression the
    /// stored preference is left alone. `on_change` runs once, before this
    /// returns, even if the preference write fails.
    pub fn change_editor_mode<F>(&self, query: &Query, mode: EditorMode, on_change: F)
    where
        F: FnOnce(Query),
    {
        if query.expr.as_deref() == Some("") {
            match self.preference.save(mode) {
                Ok(()) => tracing::debug!("Stored {} as default editor mode", mode.as_str()),
                Err(e) => tracing::warn!("Failed to store default editor mode: {}", e),
            }
        }

        on_change(query.clone().with_editor_mode(mode));
    }
}
