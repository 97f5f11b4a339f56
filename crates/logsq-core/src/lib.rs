//! Core types for the logs query editor.
//!
//! This crate contains shared data structures that are used across all logsq crates:
//! - The `Query` value and its editor mode / query type enums
//! - Invocation context hints (host app, panel type)
//! - Preference configuration
//! - Error types

mod config;
mod context;
mod error;
mod mode;
mod query;

pub use config::{config_dir, default_prefs_path, PreferenceConfig, EDITOR_MODE_DEFAULT_KEY};
pub use context::{CoreApp, InvocationContext, PanelKind};
pub use error::{ConfigError, StoreError};
pub use mode::{EditorMode, QueryType};
pub use query::Query;
