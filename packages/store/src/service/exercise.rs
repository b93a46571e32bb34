use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{
    completed_fix_the_code_exercise, completed_research_exercise, difficulty_level,
    fix_the_code_exercise, fix_the_code_exercise_resource, mini_exercise, mini_exercise_resource,
    project_exercise, project_exercise_resource, quiz_exercise, quiz_exercise_question,
    quiz_exercise_resource, quiz_question, research_exercise, research_exercise_resource, topic,
};
use crate::error::StoreError;
use crate::models::exercise::*;
use crate::models::shared::validate_required;
use crate::service::{find, insert_with_generated_id, link};

pub async fn create_topic<C: ConnectionTrait>(
    db: &C,
    payload: NewTopic,
) -> Result<topic::Model, StoreError> {
    validate_new_topic(&payload)?;
    topic::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        searchable_name: Set(payload.searchable_name.trim().to_string()),
        image: Set(payload.image.trim().to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| StoreError::on_write(e, "topic"))
}

pub async fn create_difficulty_level<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> Result<difficulty_level::Model, StoreError> {
    validate_difficulty_level_name(name)?;
    difficulty_level::ActiveModel {
        name: Set(name.trim().to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| StoreError::on_write(e, "difficulty_level"))
}

#[instrument(skip(db, payload), fields(name = %payload.name))]
pub async fn create_project_exercise<C: TransactionTrait>(
    db: &C,
    payload: NewExercise,
) -> Result<project_exercise::Model, StoreError> {
    validate_new_exercise(&payload)?;
    insert_with_generated_id(db, |id| project_exercise::ActiveModel {
        id: Set(id),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description.clone()),
        prerequisites: Set(payload.prerequisites.clone()),
        topic_id: Set(payload.topic_id),
        difficulty_level_id: Set(payload.difficulty_level_id),
    })
    .await
}

#[instrument(skip(db, payload), fields(name = %payload.name))]
pub async fn create_mini_exercise<C: TransactionTrait>(
    db: &C,
    payload: NewExercise,
) -> Result<mini_exercise::Model, StoreError> {
    validate_new_exercise(&payload)?;
    insert_with_generated_id(db, |id| mini_exercise::ActiveModel {
        id: Set(id),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description.clone()),
        prerequisites: Set(payload.prerequisites.clone()),
        topic_id: Set(payload.topic_id),
        difficulty_level_id: Set(payload.difficulty_level_id),
    })
    .await
}

#[instrument(skip(db, payload), fields(name = %payload.name))]
pub async fn create_research_exercise<C: TransactionTrait>(
    db: &C,
    payload: NewExercise,
) -> Result<research_exercise::Model, StoreError> {
    validate_new_exercise(&payload)?;
    insert_with_generated_id(db, |id| research_exercise::ActiveModel {
        id: Set(id),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description.clone()),
        prerequisites: Set(payload.prerequisites.clone()),
        topic_id: Set(payload.topic_id),
        difficulty_level_id: Set(payload.difficulty_level_id),
    })
    .await
}

#[instrument(skip(db, payload), fields(name = %payload.name))]
pub async fn create_fix_the_code_exercise<C: TransactionTrait>(
    db: &C,
    payload: NewExercise,
    repl_link: &str,
) -> Result<fix_the_code_exercise::Model, StoreError> {
    validate_new_exercise(&payload)?;
    validate_required("repl_link", repl_link, 100)?;
    insert_with_generated_id(db, |id| fix_the_code_exercise::ActiveModel {
        id: Set(id),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description.clone()),
        prerequisites: Set(payload.prerequisites.clone()),
        repl_link: Set(repl_link.trim().to_string()),
        topic_id: Set(payload.topic_id),
        difficulty_level_id: Set(payload.difficulty_level_id),
    })
    .await
}

/// Create a quiz together with its questions. Either everything is stored
/// or nothing is.
#[instrument(skip(db, payload, questions), fields(name = %payload.name, questions = questions.len()))]
pub async fn create_quiz_exercise<C: TransactionTrait>(
    db: &C,
    payload: NewExercise,
    questions: Vec<NewQuizQuestion>,
) -> Result<(quiz_exercise::Model, Vec<quiz_question::Model>), StoreError> {
    validate_new_exercise(&payload)?;
    for question in &questions {
        validate_new_quiz_question(question)?;
    }

    let txn = db.begin().await?;
    let quiz = insert_with_generated_id(&txn, |id| quiz_exercise::ActiveModel {
        id: Set(id),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description.clone()),
        prerequisites: Set(payload.prerequisites.clone()),
        topic_id: Set(payload.topic_id),
        difficulty_level_id: Set(payload.difficulty_level_id),
    })
    .await?;

    let mut stored = Vec::with_capacity(questions.len());
    for question in questions {
        let model = quiz_question::ActiveModel {
            question: Set(question.question.trim().to_string()),
            answers: Set(question.answers),
            correct_answer_index: Set(question.correct_answer_index),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| StoreError::on_write(e, "quiz_question"))?;

        link(
            &txn,
            quiz_exercise_question::ActiveModel {
                quiz_exercise_id: Set(quiz.id.clone()),
                quiz_question_id: Set(model.id),
            },
        )
        .await?;
        stored.push(model);
    }

    txn.commit().await?;
    info!(id = %quiz.id, "Quiz created");
    Ok((quiz, stored))
}

/// Attach a resource link to an exercise of any kind.
pub async fn add_resource<C: ConnectionTrait>(
    db: &C,
    kind: ExerciseKind,
    exercise_id: &str,
    resource_link_id: i32,
) -> Result<bool, StoreError> {
    let exercise_id = exercise_id.to_string();
    match kind {
        ExerciseKind::Project => {
            link(
                db,
                project_exercise_resource::ActiveModel {
                    project_exercise_id: Set(exercise_id),
                    resource_link_id: Set(resource_link_id),
                },
            )
            .await
        }
        ExerciseKind::Quiz => {
            link(
                db,
                quiz_exercise_resource::ActiveModel {
                    quiz_exercise_id: Set(exercise_id),
                    resource_link_id: Set(resource_link_id),
                },
            )
            .await
        }
        ExerciseKind::Mini => {
            link(
                db,
                mini_exercise_resource::ActiveModel {
                    mini_exercise_id: Set(exercise_id),
                    resource_link_id: Set(resource_link_id),
                },
            )
            .await
        }
        ExerciseKind::Research => {
            link(
                db,
                research_exercise_resource::ActiveModel {
                    research_exercise_id: Set(exercise_id),
                    resource_link_id: Set(resource_link_id),
                },
            )
            .await
        }
        ExerciseKind::FixTheCode => {
            link(
                db,
                fix_the_code_exercise_resource::ActiveModel {
                    fix_the_code_exercise_id: Set(exercise_id),
                    resource_link_id: Set(resource_link_id),
                },
            )
            .await
        }
    }
}

/// Questions of a quiz, in insertion order.
pub async fn quiz_questions<C: ConnectionTrait>(
    db: &C,
    quiz_id: &str,
) -> Result<Vec<quiz_question::Model>, StoreError> {
    let ids: Vec<i32> = quiz_exercise_question::Entity::find()
        .filter(quiz_exercise_question::Column::QuizExerciseId.eq(quiz_id))
        .select_only()
        .column(quiz_exercise_question::Column::QuizQuestionId)
        .into_tuple::<i32>()
        .all(db)
        .await?;

    Ok(quiz_question::Entity::find()
        .filter(quiz_question::Column::Id.is_in(ids))
        .order_by_asc(quiz_question::Column::Id)
        .all(db)
        .await?)
}

#[instrument(skip(db))]
pub async fn record_research_completion<C: ConnectionTrait>(
    db: &C,
    research_exercise_id: &str,
    research_link: &str,
) -> Result<completed_research_exercise::Model, StoreError> {
    validate_required("research_link", research_link, 200)?;
    completed_research_exercise::ActiveModel {
        research_link: Set(research_link.trim().to_string()),
        score: Set(None),
        research_exercise_id: Set(research_exercise_id.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| StoreError::on_write(e, "completed_research_exercise"))
}

#[instrument(skip(db))]
pub async fn record_fix_the_code_completion<C: ConnectionTrait>(
    db: &C,
    fix_the_code_exercise_id: &str,
    repl_link: &str,
) -> Result<completed_fix_the_code_exercise::Model, StoreError> {
    validate_required("repl_link", repl_link, 100)?;
    completed_fix_the_code_exercise::ActiveModel {
        repl_link: Set(repl_link.trim().to_string()),
        score: Set(None),
        fix_the_code_exercise_id: Set(fix_the_code_exercise_id.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| StoreError::on_write(e, "completed_fix_the_code_exercise"))
}

fn validate_score(score: i32) -> Result<(), StoreError> {
    if score < 0 {
        return Err(StoreError::Validation("score must be >= 0".into()));
    }
    Ok(())
}

#[instrument(skip(db))]
pub async fn score_research_completion<C: ConnectionTrait>(
    db: &C,
    completion_id: i32,
    score: i32,
) -> Result<completed_research_exercise::Model, StoreError> {
    validate_score(score)?;
    let mut active = find(db, completed_research_exercise::Entity, completion_id)
        .await?
        .into_active_model();
    active.score = Set(Some(score));
    Ok(active.update(db).await?)
}

#[instrument(skip(db))]
pub async fn score_fix_the_code_completion<C: ConnectionTrait>(
    db: &C,
    completion_id: i32,
    score: i32,
) -> Result<completed_fix_the_code_exercise::Model, StoreError> {
    validate_score(score)?;
    let mut active = find(db, completed_fix_the_code_exercise::Entity, completion_id)
        .await?
        .into_active_model();
    active.score = Set(Some(score));
    Ok(active.update(db).await?)
}
