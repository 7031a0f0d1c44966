use log::{debug, warn};

use super::codec::{decode_goals, encode_goals};
use super::KeyValueStore;
use crate::config::TrackerConfig;
use crate::constants::GOALS_STORAGE_KEY;
use crate::errors::Result;
use crate::goals::{Goal, GoalRepositoryTrait, GoalsLoad};

/// Goal gateway that keeps the entire collection as one JSON blob under a
/// single fixed key of a [`KeyValueStore`].
pub struct KeyValueGoalRepository<S: KeyValueStore> {
    store: S,
    storage_key: String,
}

impl<S: KeyValueStore> KeyValueGoalRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, GOALS_STORAGE_KEY)
    }

    /// Uses the storage key from `config`, so the store and the gateway agree
    /// on where the collection lives.
    pub fn from_config(store: S, config: &TrackerConfig) -> Self {
        Self::with_key(store, config.storage_key.clone())
    }

    pub fn with_key(store: S, storage_key: impl Into<String>) -> Self {
        KeyValueGoalRepository {
            store,
            storage_key: storage_key.into(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> GoalRepositoryTrait for KeyValueGoalRepository<S> {
    fn load_goals(&self) -> Result<GoalsLoad> {
        let Some(payload) = self.store.get(&self.storage_key)? else {
            debug!("No goals saved under '{}'", self.storage_key);
            return Ok(GoalsLoad::Empty);
        };

        match decode_goals(&payload) {
            Ok(goals) if goals.is_empty() => Ok(GoalsLoad::Empty),
            Ok(goals) => Ok(GoalsLoad::Loaded(goals)),
            Err(e) => {
                warn!(
                    "Saved goals under '{}' could not be decoded: {}",
                    self.storage_key, e
                );
                Ok(GoalsLoad::Corrupted(e.to_string()))
            }
        }
    }

    fn save_goals(&self, goals: &[Goal]) -> Result<()> {
        let payload = encode_goals(goals)?;
        self.store.set(&self.storage_key, &payload)?;
        debug!("Saved {} goal(s) under '{}'", goals.len(), self.storage_key);
        Ok(())
    }
}
