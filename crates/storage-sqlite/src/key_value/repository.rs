use diesel::prelude::*;
use std::sync::Arc;

use super::model::AppStorageDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::app_storage::dsl::*;
use goaltrack_core::errors::Result;
use goaltrack_core::persistence::KeyValueStore;

/// Key-value store backed by the `app_storage` table.
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    pool: Arc<DbPool>,
}

impl SqliteKeyValueStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteKeyValueStore { pool }
    }

    /// Removes the entry under `key`. Returns whether one existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(app_storage.filter(storage_key.eq(key)))
            .execute(&mut conn)
            .into_core()?;
        Ok(deleted > 0)
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        app_storage
            .filter(storage_key.eq(key))
            .select(storage_value)
            .first::<String>(&mut conn)
            .optional()
            .into_core()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_storage)
            .values(&AppStorageDB {
                storage_key: key.to_string(),
                storage_value: value.to_string(),
            })
            .execute(&mut conn)
            .into_core()?;
        Ok(())
    }
}
