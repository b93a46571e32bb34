use serde::Deserialize;

use crate::error::StoreError;
use crate::models::shared::*;

/// The five exercise kinds. Each has its own table and resource junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Project,
    Quiz,
    Mini,
    Research,
    FixTheCode,
}

impl ExerciseKind {
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Project => "project_exercise",
            Self::Quiz => "quiz_exercise",
            Self::Mini => "mini_exercise",
            Self::Research => "research_exercise",
            Self::FixTheCode => "fix_the_code_exercise",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTopic {
    pub name: String,
    pub searchable_name: String,
    pub image: String,
}

pub fn validate_new_topic(payload: &NewTopic) -> Result<(), StoreError> {
    validate_required("name", &payload.name, 50)?;
    validate_required("searchable_name", &payload.searchable_name, 50)?;
    validate_required("image", &payload.image, 100)
}

pub fn validate_difficulty_level_name(name: &str) -> Result<(), StoreError> {
    validate_required("name", name, 10)
}

/// Fields shared by every exercise kind.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExercise {
    pub name: String,
    pub description: String,
    pub prerequisites: Option<Vec<String>>,
    pub topic_id: i32,
    pub difficulty_level_id: i32,
}

pub fn validate_new_exercise(payload: &NewExercise) -> Result<(), StoreError> {
    validate_required("name", &payload.name, 50)?;
    if payload.description.trim().is_empty() {
        return Err(StoreError::Validation("description must not be empty".into()));
    }
    validate_optional_items("prerequisites", payload.prerequisites.as_deref(), 50)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewQuizQuestion {
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer_index: i32,
}

pub fn validate_new_quiz_question(payload: &NewQuizQuestion) -> Result<(), StoreError> {
    validate_required("question", &payload.question, 100)?;
    if payload.answers.is_empty() {
        return Err(StoreError::Validation("answers must not be empty".into()));
    }
    validate_items("answers", &payload.answers, 100)?;
    let in_range = usize::try_from(payload.correct_answer_index)
        .is_ok_and(|i| i < payload.answers.len());
    if !in_range {
        return Err(StoreError::Validation(format!(
            "correct_answer_index must be between 0 and {}",
            payload.answers.len() - 1
        )));
    }
    Ok(())
}
