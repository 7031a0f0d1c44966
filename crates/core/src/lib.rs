//! Goaltrack Core - Domain entities, the goal store, and derived statistics.
//!
//! This crate contains the core logic for tracking yearly goals and their
//! milestones. It is storage-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod persistence;
pub mod statistics;
pub mod utils;

pub use config::TrackerConfig;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
