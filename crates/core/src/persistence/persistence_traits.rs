use crate::errors::Result;

/// Trait for a local string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`. Returns None if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
