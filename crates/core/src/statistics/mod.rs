//! Statistics module - derived, read-only views over the goal collection.

mod statistics_model;
mod statistics_service;

pub use statistics_model::{CategoryProgress, GoalStatistics, TimelinePoint};
pub use statistics_service::{
    category_progress, completed_milestone_count, completion_timeline, goal_statistics,
    overall_progress, total_milestone_count,
};
