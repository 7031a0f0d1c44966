//! Persistence module - key-value storage contract and the goal gateway built on it.
//!
//! Storage crates implement [`KeyValueStore`]; [`KeyValueGoalRepository`] turns any
//! such store into a [`GoalRepositoryTrait`](crate::goals::GoalRepositoryTrait).

pub mod codec;
mod key_value_repository;
mod memory_store;
mod persistence_traits;

pub use key_value_repository::KeyValueGoalRepository;
pub use memory_store::InMemoryKeyValueStore;
pub use persistence_traits::KeyValueStore;
