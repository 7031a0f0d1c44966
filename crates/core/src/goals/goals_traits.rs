use crate::errors::Result;
use crate::goals::goals_model::Goal;

/// What a load from storage found.
///
/// Keeps first run and corrupted data apart while still letting callers
/// fall back to "nothing saved yet" through [`GoalsLoad::into_goals`].
#[derive(Debug, Clone, PartialEq)]
pub enum GoalsLoad {
    /// No prior state exists.
    Empty,
    /// A saved collection was decoded.
    Loaded(Vec<Goal>),
    /// A saved collection exists but could not be decoded.
    Corrupted(String),
}

impl GoalsLoad {
    pub fn into_goals(self) -> Vec<Goal> {
        match self {
            GoalsLoad::Loaded(goals) => goals,
            GoalsLoad::Empty | GoalsLoad::Corrupted(_) => Vec::new(),
        }
    }
}

/// Trait for bulk goal persistence.
///
/// The whole collection is read and written at once; there is no per-goal access.
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<GoalsLoad>;
    fn save_goals(&self, goals: &[Goal]) -> Result<()>;
}
