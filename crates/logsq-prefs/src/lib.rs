//! Persisted preferences for the logs query editor.
//!
//! This crate provides:
//! - `PreferenceStore` - the get/set string store the editor reads and writes
//! - `MemoryStore` / `FileStore` - in-process and durable implementations
//! - `EditorModePreference` - typed access to the editor mode key

mod file;
mod memory;
mod preference;
mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use preference::EditorModePreference;
pub use store::PreferenceStore;

// Re-export logsq_core types for convenience
pub use logsq_core::{EditorMode, PreferenceConfig, StoreError, EDITOR_MODE_DEFAULT_KEY};
