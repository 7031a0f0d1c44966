use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::KeyValueStore;
use crate::errors::{DatabaseError, Error, Result};

/// Process-local key-value store.
///
/// Clones share the same underlying map. Writes can be made to fail, which
/// lets callers exercise persistence failure handling.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_on_write: Arc<Mutex<bool>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }

    pub fn set_fail_on_write(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_on_write.lock() {
            *flag = fail;
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Unexpected("in-memory store lock poisoned".to_string())
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.fail_on_write.lock().map_err(poisoned)? {
            return Err(Error::Database(DatabaseError::QueryFailed(format!(
                "write to '{}' rejected",
                key
            ))));
        }
        let mut entries = self.entries.lock().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
