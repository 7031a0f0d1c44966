//! Tests for goal domain models including GoalCategory.

#[cfg(test)]
mod tests {
    use crate::goals::{Goal, GoalCategory, Milestone, NewGoal, NewMilestone};
    use chrono::{TimeZone, Utc};

    fn ts(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).unwrap()
    }

    fn create_test_goal(completed: &[bool]) -> Goal {
        Goal {
            id: "goal-1".to_string(),
            title: "Read more".to_string(),
            description: String::new(),
            start_date: ts(1),
            target_date: ts(31),
            category: GoalCategory::Personal,
            progress: 0.0,
            milestones: completed
                .iter()
                .enumerate()
                .map(|(i, done)| Milestone {
                    id: format!("m{}", i),
                    title: format!("Milestone {}", i),
                    date: ts(i as u32 + 1),
                    is_completed: *done,
                })
                .collect(),
        }
    }

    // ==================== GoalCategory Tests ====================

    #[test]
    fn test_category_serializes_as_string_tag() {
        assert_eq!(
            serde_json::to_string(&GoalCategory::Financial).unwrap(),
            "\"Financial\""
        );
        assert_eq!(
            serde_json::from_str::<GoalCategory>("\"Education\"").unwrap(),
            GoalCategory::Education
        );
        assert_eq!(
            serde_json::from_str::<GoalCategory>("\"work\"").unwrap(),
            GoalCategory::Work
        );
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("health".parse::<GoalCategory>().unwrap(), GoalCategory::Health);
        assert_eq!(" Work ".parse::<GoalCategory>().unwrap(), GoalCategory::Work);
        assert!("hobby".parse::<GoalCategory>().is_err());
    }

    #[test]
    fn test_every_category_has_display_metadata() {
        for category in GoalCategory::ALL {
            assert!(!category.icon().is_empty());
            assert!(!category.color().is_empty());
            assert_eq!(category.to_string(), category.as_str());
        }
        assert_eq!(GoalCategory::default(), GoalCategory::Personal);
    }

    // ==================== Progress Tests ====================

    #[test]
    fn test_progress_half_completed() {
        let mut goal = create_test_goal(&[true, false]);
        goal.recompute_progress();
        assert_eq!(goal.progress, 0.5);
        assert_eq!(goal.completed_milestone_count(), 1);
    }

    #[test]
    fn test_progress_without_milestones_is_zero() {
        let mut goal = create_test_goal(&[]);
        goal.progress = 0.7;
        goal.recompute_progress();
        assert_eq!(goal.progress, 0.0);
    }

    #[test]
    fn test_find_milestone_mut_and_toggle() {
        let mut goal = create_test_goal(&[false, false]);
        goal.find_milestone_mut("m1").unwrap().toggle();
        assert!(goal.milestones[1].is_completed);
        assert!(goal.find_milestone_mut("missing").is_none());
    }

    // ==================== NewGoal Tests ====================

    #[test]
    fn test_new_goal_derives_progress_from_milestones() {
        let goal = NewGoal::new("Run", ts(1), ts(31))
            .milestone(NewMilestone::new("5K", ts(5)).completed())
            .milestone(NewMilestone::new("10K", ts(20)))
            .milestone(NewMilestone::new("Half", ts(28)))
            .milestone(NewMilestone::new("Full", ts(30)))
            .into_goal();

        assert_eq!(goal.progress, 0.25);
        assert_eq!(goal.milestones.len(), 4);
        assert_eq!(goal.milestones[0].title, "5K");
        assert!(!goal.id.is_empty());
        assert_ne!(goal.milestones[0].id, goal.milestones[1].id);
    }

    #[test]
    fn test_new_goal_keeps_seeded_progress() {
        let goal = NewGoal::new("Save", ts(1), ts(31))
            .category(GoalCategory::Financial)
            .seeded_progress(0.3)
            .into_goal();
        assert_eq!(goal.progress, 0.3);

        let clamped = NewGoal::new("Save", ts(1), ts(31))
            .seeded_progress(4.0)
            .into_goal();
        assert_eq!(clamped.progress, 1.0);
    }

    #[test]
    fn test_goal_json_uses_camel_case() {
        let goal = create_test_goal(&[true]);
        let json = serde_json::to_value(&goal).unwrap();
        assert!(json.get("startDate").is_some());
        assert!(json.get("targetDate").is_some());
        assert_eq!(json["category"], "Personal");
        assert_eq!(json["milestones"][0]["isCompleted"], true);
    }

    #[test]
    fn test_goal_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": "g1",
            "title": "Legacy",
            "startDate": "2025-01-01T00:00:00Z",
            "targetDate": "2025-12-31T00:00:00Z"
        }"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.category, GoalCategory::Personal);
        assert_eq!(goal.progress, 0.0);
        assert!(goal.milestones.is_empty());
        assert!(goal.description.is_empty());
    }
}
