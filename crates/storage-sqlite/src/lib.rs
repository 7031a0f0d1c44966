//! SQLite storage implementation for the goal tracker.
//!
//! This crate provides the local key-value store the goal collection is saved
//! in, using Diesel ORM with SQLite. It implements the `KeyValueStore` trait
//! defined in `goaltrack-core` and contains:
//! - Database connection pooling and file setup
//! - Diesel migrations
//! - The `app_storage` key-value table
//!
//! # Architecture
//!
//! ```text
//!   core (GoalStore, KeyValueGoalRepository)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod key_value;
pub mod schema;

use log::debug;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init_database_file, run_migrations,
    DbConnection, DbPool,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};
pub use key_value::SqliteKeyValueStore;

// Re-export from goaltrack-core for convenience
pub use goaltrack_core::errors::{DatabaseError, Error, Result};

use goaltrack_core::persistence::KeyValueGoalRepository;
use goaltrack_core::TrackerConfig;

/// Goal gateway over SQLite, ready to hand to `GoalStore::initialize`.
pub type SqliteGoalRepository = KeyValueGoalRepository<SqliteKeyValueStore>;

/// Opens (creating and migrating if needed) the database in `app_data_dir`
/// and returns a goal gateway using the configured storage key.
pub fn open_goal_repository(
    app_data_dir: &str,
    config: &TrackerConfig,
) -> Result<SqliteGoalRepository> {
    open_goal_repository_at(&get_db_path(app_data_dir), config)
}

/// Like [`open_goal_repository`], for an explicit database file path.
pub fn open_goal_repository_at(
    db_path: &str,
    config: &TrackerConfig,
) -> Result<SqliteGoalRepository> {
    init_database_file(db_path)?;
    let pool = create_pool(db_path)?;
    run_migrations(&pool)?;
    debug!("Goal storage ready at {}", db_path);
    Ok(KeyValueGoalRepository::from_config(
        SqliteKeyValueStore::new(pool),
        config,
    ))
}
