use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use super::goals_model::{Goal, NewGoal, NewMilestone};
use crate::constants::{
    SAMPLE_EXERCISE_MILESTONE_OFFSET_DAYS, SAMPLE_SWIFTUI_MILESTONE_OFFSET_DAYS,
};
use crate::utils::time_utils::year_bounds;

/// Goals a first-run store starts with.
///
/// Both span the whole year `now` falls in and carry a seeded progress that
/// is corrected on the first milestone toggle.
pub fn sample_goals(now: DateTime<Utc>, tz: Tz) -> Vec<Goal> {
    let (start_of_year, end_of_year) = year_bounds(now, tz);

    vec![
        NewGoal::new("Learn SwiftUI", start_of_year, end_of_year)
            .description("Master SwiftUI framework")
            .seeded_progress(0.3)
            .milestone(NewMilestone::new("Complete basics", now).completed())
            .milestone(NewMilestone::new(
                "Build first app",
                now + Duration::days(SAMPLE_SWIFTUI_MILESTONE_OFFSET_DAYS),
            ))
            .into_goal(),
        NewGoal::new("Exercise Routine", start_of_year, end_of_year)
            .description("Work out 3 times per week")
            .seeded_progress(0.5)
            .milestone(NewMilestone::new("First month completed", now).completed())
            .milestone(NewMilestone::new(
                "Run 5K",
                now + Duration::days(SAMPLE_EXERCISE_MILESTONE_OFFSET_DAYS),
            ))
            .into_goal(),
    ]
}
