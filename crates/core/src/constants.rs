/// Key-value slot holding the serialized goal collection.
pub const GOALS_STORAGE_KEY: &str = "savedGoals";

/// Save attempts made before a persistence failure is reported.
pub const DEFAULT_SAVE_ATTEMPTS: u32 = 2;

/// Target-date offsets (in days) of the pending sample milestones.
pub const SAMPLE_SWIFTUI_MILESTONE_OFFSET_DAYS: i64 = 30;
pub const SAMPLE_EXERCISE_MILESTONE_OFFSET_DAYS: i64 = 60;
