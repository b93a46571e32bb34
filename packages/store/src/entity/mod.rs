//! SeaORM entities, one module per table.
//!
//! Many-to-many relations are explicit junction entities keyed by both
//! foreign keys, so a pair can only be linked once.

pub mod account;
pub mod achievement;
pub mod award;
pub mod completed_fix_the_code_exercise;
pub mod completed_research_exercise;
pub mod difficulty_level;
pub mod fix_the_code_exercise;
pub mod hackathon;
pub mod mini_exercise;
pub mod profile;
pub mod project;
pub mod project_exercise;
pub mod quiz_exercise;
pub mod quiz_question;
pub mod research_exercise;
pub mod resource_link;
pub mod schedule_event;
pub mod theme;
pub mod topic;

// Junction tables
pub mod fix_the_code_exercise_resource;
pub mod hackathon_award;
pub mod hackathon_competitor;
pub mod hackathon_resource;
pub mod hackathon_schedule_event;
pub mod hackathon_submission;
pub mod hackathon_theme;
pub mod mini_exercise_resource;
pub mod profile_achievement;
pub mod profile_past_hackathon;
pub mod profile_project;
pub mod project_exercise_resource;
pub mod quiz_exercise_question;
pub mod quiz_exercise_resource;
pub mod research_exercise_resource;
