use std::collections::{BTreeMap, HashMap};

use chrono_tz::Tz;

use super::statistics_model::{CategoryProgress, GoalStatistics, TimelinePoint};
use crate::goals::{Goal, GoalCategory};
use crate::utils::time_utils::calendar_date_in_tz;

pub fn completed_milestone_count(goals: &[Goal]) -> usize {
    goals.iter().map(Goal::completed_milestone_count).sum()
}

pub fn total_milestone_count(goals: &[Goal]) -> usize {
    goals.iter().map(|g| g.milestones.len()).sum()
}

/// Completed share of all milestones across all goals, 0 when there are none.
pub fn overall_progress(goals: &[Goal]) -> f64 {
    let total = total_milestone_count(goals);
    if total == 0 {
        return 0.0;
    }
    completed_milestone_count(goals) as f64 / total as f64
}

/// Mean goal progress per category, highest first.
///
/// Categories without goals are omitted. Equal means keep `GoalCategory::ALL` order.
pub fn category_progress(goals: &[Goal]) -> Vec<CategoryProgress> {
    let mut sums: HashMap<GoalCategory, (usize, f64)> = HashMap::new();
    for goal in goals {
        let entry = sums.entry(goal.category).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += goal.progress;
    }

    let mut result: Vec<CategoryProgress> = GoalCategory::ALL
        .into_iter()
        .filter_map(|category| {
            sums.get(&category).map(|(count, sum)| CategoryProgress {
                category,
                goal_count: *count,
                average_progress: sum / *count as f64,
            })
        })
        .collect();

    // sort_by is stable, so ties stay in ALL order
    result.sort_by(|a, b| b.average_progress.total_cmp(&a.average_progress));
    result
}

/// Completed milestones counted per calendar day, earliest first.
///
/// Buckets use the milestone's own date, not the moment it was completed.
pub fn completion_timeline(goals: &[Goal], tz: Tz) -> Vec<TimelinePoint> {
    let mut by_day: BTreeMap<chrono::NaiveDate, usize> = BTreeMap::new();
    for milestone in goals
        .iter()
        .flat_map(|g| g.milestones.iter())
        .filter(|m| m.is_completed)
    {
        *by_day
            .entry(calendar_date_in_tz(milestone.date, tz))
            .or_insert(0) += 1;
    }

    by_day
        .into_iter()
        .map(|(date, completed)| TimelinePoint { date, completed })
        .collect()
}

pub fn goal_statistics(goals: &[Goal], tz: Tz) -> GoalStatistics {
    GoalStatistics {
        goal_count: goals.len(),
        completed_milestones: completed_milestone_count(goals),
        total_milestones: total_milestone_count(goals),
        overall_progress: overall_progress(goals),
        by_category: category_progress(goals),
        timeline: completion_timeline(goals, tz),
    }
}
