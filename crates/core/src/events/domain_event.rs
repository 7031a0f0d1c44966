//! Domain event types.

use serde::{Deserialize, Serialize};

/// Change notifications emitted by the goal store after each mutation that
/// changed the in-memory collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal was appended to the collection.
    GoalAdded { goal_id: String },

    /// A goal was replaced by an edited version.
    GoalUpdated { goal_id: String },

    /// A goal and its milestones were removed.
    GoalDeleted { goal_id: String },

    /// A milestone's completion flag flipped.
    MilestoneToggled {
        goal_id: String,
        milestone_id: String,
        is_completed: bool,
        /// Owning goal's progress after the toggle
        progress: f64,
    },
}

impl DomainEvent {
    /// Creates a GoalAdded event.
    pub fn goal_added(goal_id: impl Into<String>) -> Self {
        Self::GoalAdded {
            goal_id: goal_id.into(),
        }
    }

    /// Creates a GoalUpdated event.
    pub fn goal_updated(goal_id: impl Into<String>) -> Self {
        Self::GoalUpdated {
            goal_id: goal_id.into(),
        }
    }

    /// Creates a GoalDeleted event.
    pub fn goal_deleted(goal_id: impl Into<String>) -> Self {
        Self::GoalDeleted {
            goal_id: goal_id.into(),
        }
    }

    /// Creates a MilestoneToggled event.
    pub fn milestone_toggled(
        goal_id: impl Into<String>,
        milestone_id: impl Into<String>,
        is_completed: bool,
        progress: f64,
    ) -> Self {
        Self::MilestoneToggled {
            goal_id: goal_id.into(),
            milestone_id: milestone_id.into(),
            is_completed,
            progress,
        }
    }

    /// Id of the goal the event is about.
    pub fn goal_id(&self) -> &str {
        match self {
            Self::GoalAdded { goal_id }
            | Self::GoalUpdated { goal_id }
            | Self::GoalDeleted { goal_id }
            | Self::MilestoneToggled { goal_id, .. } => goal_id,
        }
    }
}
