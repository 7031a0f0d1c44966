//! SQLite storage implementation of the core key-value contract.

mod model;
mod repository;

pub use model::AppStorageDB;
pub use repository::SqliteKeyValueStore;

// Re-export trait from core for convenience
pub use goaltrack_core::persistence::KeyValueStore;
