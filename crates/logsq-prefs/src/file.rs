//! File-backed preference store.
//!
//! Entries live in a flat JSON object:
//! ```text
//! { "VictoriaLogsQueryEditorModeDefault": "builder" }
//! ```
//! Every `set` re-reads the file, merges its key in and rewrites the whole
//! object, so keys written by other handles on the same file are kept.
//! `get` answers from the copy taken at the last `open`, `set` or `reload`;
//! it can be stale if another handle wrote since.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use logsq_core::{PreferenceConfig, StoreError};
use tempfile::NamedTempFile;

use crate::store::PreferenceStore;

/// Durable store persisted to a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store; it is created on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = load_entries(&path)?;

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Open the store at the configured path.
    pub fn from_config(config: &PreferenceConfig) -> Result<Self, StoreError> {
        Self::open(config.store_path()?)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory copy with the current file contents.
    pub fn reload(&self) -> Result<(), StoreError> {
        let latest = load_entries(&self.path)?;
        *self.entries.write() = latest;
        Ok(())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let io_err = |e: io::Error| StoreError::Io(format!("{}: {}", self.path.display(), e));

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(io_err)?;

        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        // Uniquely named sibling, renamed into place; removed on drop if persist fails
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(&json).map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

/// Read the entries at `path`. Missing or blank files are empty.
fn load_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
        Ok(contents) => serde_json::from_str(&contents)
            .map_err(|e| StoreError::Parse(format!("{}: {}", path.display(), e))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No preferences file at {:?}, starting empty", path);
            Ok(BTreeMap::new())
        }
        Err(e) => Err(StoreError::Io(format!("{}: {}", path.display(), e))),
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        let mut next = load_entries(&self.path)?;
        next.insert(key.to_string(), value.to_string());

        self.persist(&next)?;
        *entries = next;
        tracing::debug!("Persisted preference {} to {:?}", key, self.path);
        Ok(())
    }
}
