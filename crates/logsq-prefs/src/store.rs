use logsq_core::StoreError;

/// A process-wide key to string store.
///
/// Implementations must be durable if preferences are expected to survive a
/// restart. Concurrent writers race with last-write-wins semantics.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
