//! Statistics view models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::goals::GoalCategory;

/// Mean progress of the goals in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category: GoalCategory,
    pub goal_count: usize,
    pub average_progress: f64,
}

/// Number of completed milestones dated on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub completed: usize,
}

/// Snapshot of every aggregate the statistics screen shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatistics {
    pub goal_count: usize,
    pub completed_milestones: usize,
    pub total_milestones: usize,
    pub overall_progress: f64,
    pub by_category: Vec<CategoryProgress>,
    pub timeline: Vec<TimelinePoint>,
}
