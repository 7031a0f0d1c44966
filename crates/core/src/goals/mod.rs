//! Goals module - domain models, the goal store, and persistence traits.

mod goals_model;
mod goals_sample;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_model_tests;

pub use goals_model::{Goal, GoalCategory, Milestone, NewGoal, NewMilestone};
pub use goals_sample::sample_goals;
pub use goals_service::{GoalStore, LoadStatus, MutationOutcome};
pub use goals_traits::{GoalRepositoryTrait, GoalsLoad};
