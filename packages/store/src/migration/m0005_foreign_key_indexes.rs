use super::schema::index;
use super::{Migration, Operation};

pub const MIGRATION: Migration = Migration {
    name: "0005_foreign_key_indexes",
    depends_on: Some("0004_fix_the_code_exercises"),
    operations,
};

/// Postgres does not index referencing columns on its own. Junction tables
/// only need the second key column: the primary key already leads with the
/// first.
const INDEXED: &[(&str, &str)] = &[
    ("project", "creator_id"),
    ("award", "winner_id"),
    ("schedule_event", "event_link_id"),
    ("topic", "searchable_name"),
    ("project_exercise", "topic_id"),
    ("project_exercise", "difficulty_level_id"),
    ("quiz_exercise", "topic_id"),
    ("quiz_exercise", "difficulty_level_id"),
    ("mini_exercise", "topic_id"),
    ("mini_exercise", "difficulty_level_id"),
    ("research_exercise", "topic_id"),
    ("research_exercise", "difficulty_level_id"),
    ("fix_the_code_exercise", "topic_id"),
    ("fix_the_code_exercise", "difficulty_level_id"),
    ("completed_research_exercise", "research_exercise_id"),
    ("completed_fix_the_code_exercise", "fix_the_code_exercise_id"),
    ("profile_past_hackathon", "hackathon_id"),
    ("profile_project", "project_id"),
    ("profile_achievement", "achievement_id"),
    ("hackathon_schedule_event", "schedule_event_id"),
    ("hackathon_theme", "theme_id"),
    ("hackathon_award", "award_id"),
    ("hackathon_resource", "resource_link_id"),
    ("hackathon_competitor", "profile_id"),
    ("hackathon_submission", "project_id"),
    ("project_exercise_resource", "resource_link_id"),
    ("quiz_exercise_resource", "resource_link_id"),
    ("quiz_exercise_question", "quiz_question_id"),
    ("mini_exercise_resource", "resource_link_id"),
    ("research_exercise_resource", "resource_link_id"),
    ("fix_the_code_exercise_resource", "resource_link_id"),
];

fn operations() -> Vec<Operation> {
    INDEXED
        .iter()
        .map(|(table, column)| Operation::CreateIndex(index(table, column)))
        .collect()
}
