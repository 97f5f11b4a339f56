//! Query defaults and editor mode switching for the logs query editor.
//!
//! Hosts call `DefaultsResolver::resolve_defaults` before first rendering or
//! running a query, and route the editor's mode toggle through
//! `ModeSwitcher::change_editor_mode`. Both share one `PreferenceStore`.

mod defaults;
mod switcher;

pub use defaults::{default_query_type, DefaultsResolver};
pub use switcher::ModeSwitcher;

// Re-export the types callers need to drive the editor
pub use logsq_core::{CoreApp, EditorMode, InvocationContext, PanelKind, Query, QueryType};
pub use logsq_prefs::{EditorModePreference, FileStore, MemoryStore, PreferenceStore};
