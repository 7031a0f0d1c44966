//! Runtime configuration for the goal store.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SAVE_ATTEMPTS, GOALS_STORAGE_KEY};

/// Configuration shared by the store, its persistence gateway and the
/// statistics views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    /// Key-value slot the goal collection is saved under.
    pub storage_key: String,
    /// Timezone used to truncate milestone dates to calendar days.
    pub timezone: Tz,
    /// Populate an empty collection with the sample goals on startup.
    pub seed_sample_goals: bool,
    /// Save attempts before a persistence failure is reported. Values below 1 are treated as 1.
    pub save_attempts: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: GOALS_STORAGE_KEY.to_string(),
            timezone: chrono_tz::UTC,
            seed_sample_goals: true,
            save_attempts: DEFAULT_SAVE_ATTEMPTS,
        }
    }
}

impl TrackerConfig {
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    pub fn without_sample_goals(mut self) -> Self {
        self.seed_sample_goals = false;
        self
    }

    pub fn effective_save_attempts(&self) -> u32 {
        self.save_attempts.max(1)
    }
}
