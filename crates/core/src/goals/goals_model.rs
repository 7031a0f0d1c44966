//! Goals domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Error, ValidationError};

/// Closed set of goal classifications used for filtering and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum GoalCategory {
    #[default]
    #[serde(alias = "personal")]
    Personal,
    #[serde(alias = "work")]
    Work,
    #[serde(alias = "health")]
    Health,
    #[serde(alias = "education")]
    Education,
    #[serde(alias = "financial")]
    Financial,
}

impl GoalCategory {
    /// Every category, in display order.
    pub const ALL: [GoalCategory; 5] = [
        GoalCategory::Personal,
        GoalCategory::Work,
        GoalCategory::Health,
        GoalCategory::Education,
        GoalCategory::Financial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Personal => "Personal",
            GoalCategory::Work => "Work",
            GoalCategory::Health => "Health",
            GoalCategory::Education => "Education",
            GoalCategory::Financial => "Financial",
        }
    }

    /// Symbol name shown next to the category.
    pub fn icon(&self) -> &'static str {
        match self {
            GoalCategory::Personal => "person.fill",
            GoalCategory::Work => "briefcase.fill",
            GoalCategory::Health => "heart.fill",
            GoalCategory::Education => "book.fill",
            GoalCategory::Financial => "dollarsign.circle.fill",
        }
    }

    /// Accent color name used by the presentation layer.
    pub fn color(&self) -> &'static str {
        match self {
            GoalCategory::Personal => "blue",
            GoalCategory::Work => "purple",
            GoalCategory::Health => "green",
            GoalCategory::Education => "orange",
            GoalCategory::Financial => "mint",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation(ValidationError::UnknownCategory(s.to_string())))
    }
}

/// A dated sub-task of a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub is_completed: bool,
}

impl Milestone {
    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

/// Input model for a milestone that has not been assigned an id yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub is_completed: bool,
}

impl NewMilestone {
    pub fn new(title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            date,
            is_completed: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }
}

impl From<NewMilestone> for Milestone {
    fn from(new_milestone: NewMilestone) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: new_milestone.title,
            date: new_milestone.date,
            is_completed: new_milestone.is_completed,
        }
    }
}

/// Domain model representing a goal and the milestones it owns.
///
/// `progress` is derived: it equals the completed share of `milestones`
/// (0 when there are none) after every milestone mutation made through the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub target_date: DateTime<Utc>,
    #[serde(default)]
    pub category: GoalCategory,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Goal {
    pub fn completed_milestone_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.is_completed).count()
    }

    /// Completed share of milestones, 0 for a goal without milestones.
    pub fn milestone_progress(&self) -> f64 {
        if self.milestones.is_empty() {
            return 0.0;
        }
        self.completed_milestone_count() as f64 / self.milestones.len() as f64
    }

    pub fn recompute_progress(&mut self) {
        self.progress = self.milestone_progress();
    }

    pub fn find_milestone_mut(&mut self, milestone_id: &str) -> Option<&mut Milestone> {
        self.milestones.iter_mut().find(|m| m.id == milestone_id)
    }
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub target_date: DateTime<Utc>,
    #[serde(default)]
    pub category: GoalCategory,
    /// Initial progress. When absent it is derived from the milestones.
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub milestones: Vec<NewMilestone>,
}

impl NewGoal {
    pub fn new(
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        target_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            start_date,
            target_date,
            category: GoalCategory::default(),
            progress: None,
            milestones: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: GoalCategory) -> Self {
        self.category = category;
        self
    }

    pub fn seeded_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn milestone(mut self, milestone: NewMilestone) -> Self {
        self.milestones.push(milestone);
        self
    }

    /// Assigns fresh ids to the goal and its milestones.
    pub fn into_goal(self) -> Goal {
        let mut goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            target_date: self.target_date,
            category: self.category,
            progress: 0.0,
            milestones: self.milestones.into_iter().map(Milestone::from).collect(),
        };
        match self.progress {
            Some(seed) if seed.is_finite() => goal.progress = seed.clamp(0.0, 1.0),
            _ => goal.recompute_progress(),
        }
        goal
    }
}
