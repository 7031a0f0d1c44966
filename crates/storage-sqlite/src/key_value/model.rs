//! Database model for key-value entries.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for one key-value entry
#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::app_storage)]
#[serde(rename_all = "camelCase")]
pub struct AppStorageDB {
    pub storage_key: String,
    pub storage_value: String,
}
