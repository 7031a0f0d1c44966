use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use std::sync::Arc;

use super::goals_model::{Goal, GoalCategory, NewGoal};
use super::goals_sample::sample_goals;
use super::goals_traits::{GoalRepositoryTrait, GoalsLoad};
use crate::config::TrackerConfig;
use crate::errors::{PersistenceError, Result};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::statistics::{self, CategoryProgress, GoalStatistics, TimelinePoint};

/// What the store found in storage when it was initialized.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Nothing was saved yet.
    FirstRun,
    /// This many goals were restored.
    Loaded(usize),
    /// Saved data exists but could not be decoded.
    Corrupted(String),
    /// The storage could not be read at all.
    Unavailable(String),
}

/// Result of a mutation that targets an existing goal or milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    /// No goal (or milestone) with the given id exists; nothing changed.
    NotFound,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

/// Sole owner and mutator of the goal collection.
///
/// Every mutation that changes the collection writes the whole collection
/// through the repository and then notifies the event sink. When the write
/// fails the in-memory change is kept and `Error::Persistence` is returned;
/// the next successful save carries it.
pub struct GoalStore {
    repository: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    config: TrackerConfig,
    goals: Vec<Goal>,
    load_status: LoadStatus,
}

impl GoalStore {
    /// Loads the saved collection, seeding the sample goals when it is empty.
    pub fn initialize(repository: Arc<dyn GoalRepositoryTrait>, config: TrackerConfig) -> Self {
        Self::initialize_at(repository, config, Utc::now())
    }

    /// Same as [`GoalStore::initialize`] with an explicit clock for the sample dates.
    pub fn initialize_at(
        repository: Arc<dyn GoalRepositoryTrait>,
        config: TrackerConfig,
        now: DateTime<Utc>,
    ) -> Self {
        let (mut goals, load_status) = match repository.load_goals() {
            Ok(GoalsLoad::Loaded(goals)) => {
                info!("Loaded {} saved goal(s)", goals.len());
                let count = goals.len();
                (goals, LoadStatus::Loaded(count))
            }
            Ok(GoalsLoad::Empty) => {
                debug!("No saved goals found");
                (Vec::new(), LoadStatus::FirstRun)
            }
            Ok(GoalsLoad::Corrupted(reason)) => {
                warn!("Saved goals are corrupted, starting empty: {}", reason);
                (Vec::new(), LoadStatus::Corrupted(reason))
            }
            Err(e) => {
                error!("Failed to read saved goals, starting empty: {}", e);
                (Vec::new(), LoadStatus::Unavailable(e.to_string()))
            }
        };

        if goals.is_empty() && config.seed_sample_goals {
            goals = sample_goals(now, config.timezone);
            info!("Seeded {} sample goal(s)", goals.len());
        }

        GoalStore {
            repository,
            event_sink: Arc::new(NoOpDomainEventSink),
            config,
            goals,
            load_status,
        }
    }

    /// Sets the domain event sink for this store.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get_goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    /// Appends a goal with freshly generated ids and saves the collection.
    ///
    /// On a persistence error the goal is still the last element of [`GoalStore::goals`].
    pub fn add_goal(&mut self, new_goal: NewGoal) -> Result<Goal> {
        let goal = new_goal.into_goal();
        debug!("Adding goal {} ({})", goal.id, goal.title);
        self.goals.push(goal.clone());
        self.commit(DomainEvent::goal_added(goal.id.clone()))?;
        Ok(goal)
    }

    /// Replaces the goal with the same id in place.
    ///
    /// Progress is recomputed only when the replacement's milestones differ
    /// from the stored ones (ids or completion flags); otherwise the stored
    /// progress, seeded or derived, carries over.
    pub fn update_goal(&mut self, mut goal: Goal) -> Result<MutationOutcome> {
        let Some(index) = self.goals.iter().position(|g| g.id == goal.id) else {
            debug!("Update ignored, goal {} not found", goal.id);
            return Ok(MutationOutcome::NotFound);
        };

        let current = &self.goals[index];
        if milestones_changed(current, &goal) {
            goal.recompute_progress();
        } else {
            goal.progress = current.progress;
        }
        let event = DomainEvent::goal_updated(goal.id.clone());
        self.goals[index] = goal;
        self.commit(event)?;
        Ok(MutationOutcome::Applied)
    }

    /// Removes every goal with the given id and saves the collection.
    ///
    /// An unknown id still saves the (unchanged) collection but emits no event.
    pub fn delete_goal(&mut self, goal_id: &str) -> Result<MutationOutcome> {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != goal_id);
        if self.goals.len() == before {
            debug!("Delete found no goal {}, saving unchanged collection", goal_id);
            self.persist()?;
            return Ok(MutationOutcome::NotFound);
        }

        self.commit(DomainEvent::goal_deleted(goal_id))?;
        Ok(MutationOutcome::Applied)
    }

    /// Flips a milestone's completion flag and recomputes its goal's progress.
    pub fn toggle_milestone(&mut self, goal_id: &str, milestone_id: &str) -> Result<MutationOutcome> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == goal_id) else {
            debug!("Toggle ignored, goal {} not found", goal_id);
            return Ok(MutationOutcome::NotFound);
        };
        let Some(milestone) = goal.find_milestone_mut(milestone_id) else {
            debug!(
                "Toggle ignored, milestone {} not found in goal {}",
                milestone_id, goal_id
            );
            return Ok(MutationOutcome::NotFound);
        };

        milestone.toggle();
        let is_completed = milestone.is_completed;
        goal.recompute_progress();
        let event =
            DomainEvent::milestone_toggled(goal_id, milestone_id, is_completed, goal.progress);

        self.commit(event)?;
        Ok(MutationOutcome::Applied)
    }

    /// All goals when `category` is None, otherwise only that category's, in collection order.
    pub fn filtered_goals(&self, category: Option<GoalCategory>) -> Vec<&Goal> {
        match category {
            None => self.goals.iter().collect(),
            Some(category) => self.goals.iter().filter(|g| g.category == category).collect(),
        }
    }

    pub fn completed_milestone_count(&self) -> usize {
        statistics::completed_milestone_count(&self.goals)
    }

    pub fn total_milestone_count(&self) -> usize {
        statistics::total_milestone_count(&self.goals)
    }

    pub fn overall_progress(&self) -> f64 {
        statistics::overall_progress(&self.goals)
    }

    pub fn category_progress(&self) -> Vec<CategoryProgress> {
        statistics::category_progress(&self.goals)
    }

    pub fn completion_timeline(&self) -> Vec<TimelinePoint> {
        statistics::completion_timeline(&self.goals, self.config.timezone)
    }

    pub fn statistics(&self) -> GoalStatistics {
        statistics::goal_statistics(&self.goals, self.config.timezone)
    }

    /// Saves the collection, then emits `event` whatever the save outcome.
    fn commit(&self, event: DomainEvent) -> Result<()> {
        let saved = self.persist();
        self.event_sink.emit(event);
        saved
    }

    fn persist(&self) -> Result<()> {
        let attempts = self.config.effective_save_attempts();
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            match self.repository.save_goals(&self.goals) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    warn!("Saving goals failed (attempt {}/{}): {}", attempt, attempts, e);
                    last_error = e.to_string();
                }
            }
        }

        error!(
            "Goals could not be saved, changes are kept in memory only: {}",
            last_error
        );
        Err(PersistenceError::WriteFailed {
            attempts,
            reason: last_error,
        }
        .into())
    }
}

fn milestones_changed(current: &Goal, replacement: &Goal) -> bool {
    current.milestones.len() != replacement.milestones.len()
        || current
            .milestones
            .iter()
            .zip(&replacement.milestones)
            .any(|(a, b)| a.id != b.id || a.is_completed != b.is_completed)
}
