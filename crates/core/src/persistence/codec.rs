//! JSON encoding of the goal collection.

use crate::errors::{PersistenceError, Result};
use crate::goals::Goal;

pub fn encode_goals(goals: &[Goal]) -> Result<String> {
    serde_json::to_string(goals).map_err(|e| PersistenceError::Encode(e.to_string()).into())
}

pub fn decode_goals(payload: &str) -> Result<Vec<Goal>> {
    serde_json::from_str(payload).map_err(|e| PersistenceError::Decode(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::goals::{GoalCategory, NewGoal, NewMilestone};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_round_trip_preserves_fields_and_order() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        let goals = vec![
            NewGoal::new("Ship side project", start, end)
                .description("One release per quarter")
                .category(GoalCategory::Work)
                .milestone(NewMilestone::new("Q1", start).completed())
                .milestone(NewMilestone::new("Q2", end))
                .milestone(NewMilestone::new("Q3", end))
                .into_goal(),
            NewGoal::new("Budget", start, end)
                .category(GoalCategory::Financial)
                .seeded_progress(0.3)
                .into_goal(),
        ];

        let payload = encode_goals(&goals).unwrap();
        let decoded = decode_goals(&payload).unwrap();
        assert_eq!(decoded, goals);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_goals("{not json").unwrap_err();
        assert!(matches!(err, Error::Persistence(PersistenceError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_goals("[]").unwrap().is_empty());
    }
}
