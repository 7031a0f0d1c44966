//! Domain events module.
//!
//! Provides the goal change notifications and the sink trait the store emits
//! them through. Presentation layers implement the sink (or use the mock one)
//! to refresh their views after a mutation.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
