use chrono::Utc;
use sea_orm::prelude::Expr;
use sea_orm::sea_query::ExprTrait;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{
    account, achievement, profile, profile_achievement, profile_past_hackathon, profile_project,
};
use crate::error::StoreError;
use crate::models::profile::*;
use crate::models::shared::normalize_optional;
use crate::service::{find, link};

#[instrument(skip(db, payload), fields(username = %payload.username))]
pub async fn create_account<C: ConnectionTrait>(
    db: &C,
    payload: NewAccount,
) -> Result<account::Model, StoreError> {
    validate_new_account(&payload)?;

    let new_account = account::ActiveModel {
        username: Set(payload.username.trim().to_string()),
        email: Set(payload.email.trim().to_string()),
        password: Set(payload.password_hash),
        first_name: Set(payload.first_name.trim().to_string()),
        last_name: Set(payload.last_name.trim().to_string()),
        is_active: Set(true),
        date_joined: Set(Utc::now()),
        ..Default::default()
    };

    new_account
        .insert(db)
        .await
        .map_err(|e| StoreError::on_write(e, "account"))
}

/// Attach the profile for `account_id`. An account has at most one.
#[instrument(skip(db, payload))]
pub async fn create_profile<C: ConnectionTrait>(
    db: &C,
    account_id: i32,
    payload: NewProfile,
) -> Result<profile::Model, StoreError> {
    validate_new_profile(&payload)?;

    let new_profile = profile::ActiveModel {
        account_id: Set(account_id),
        status: Set(normalize_optional(payload.status)),
        biography: Set(normalize_optional(payload.biography)),
        birthday: Set(payload.birthday),
        education: Set(normalize_optional(payload.education)),
        location: Set(normalize_optional(payload.location)),
        profile_picture: Set(normalize_optional(payload.profile_picture)),
        skills: Set(payload.skills),
        github_profile: Set(normalize_optional(payload.github_profile)),
        linkedin_profile: Set(normalize_optional(payload.linkedin_profile)),
        twitter_profile: Set(normalize_optional(payload.twitter_profile)),
        instagram_profile: Set(normalize_optional(payload.instagram_profile)),
        facebook_profile: Set(normalize_optional(payload.facebook_profile)),
        twitch_profile: Set(normalize_optional(payload.twitch_profile)),
        personal_website: Set(normalize_optional(payload.personal_website)),
        joined_date: Set(Utc::now().date_naive()),
        credits: Set(0),
        overall_ranking_points: Set(0),
        hackathon_ranking_points: Set(0),
        project_ranking_points: Set(0),
        quiz_ranking_points: Set(0),
        exercise_ranking_points: Set(0),
        ..Default::default()
    };

    new_profile
        .insert(db)
        .await
        .map_err(|e| StoreError::on_write(e, "profile"))
}

/// Grant an achievement and pay out its rewards.
///
/// Returns `false` without touching the counters when the profile already
/// holds the achievement.
#[instrument(skip(db))]
pub async fn grant_achievement<C: TransactionTrait>(
    db: &C,
    profile_id: i32,
    achievement_id: i32,
) -> Result<bool, StoreError> {
    let txn = db.begin().await?;
    let reward = find(&txn, achievement::Entity, achievement_id).await?;

    let granted = link(
        &txn,
        profile_achievement::ActiveModel {
            profile_id: Set(profile_id),
            achievement_id: Set(achievement_id),
        },
    )
    .await?;

    if granted {
        profile::Entity::update_many()
            .filter(profile::Column::Id.eq(profile_id))
            .col_expr(
                profile::Column::Credits,
                Expr::col(profile::Column::Credits).add(reward.credits),
            )
            .col_expr(
                profile::Column::OverallRankingPoints,
                Expr::col(profile::Column::OverallRankingPoints).add(reward.ranking_points),
            )
            .exec(&txn)
            .await?;
        info!(profile_id, achievement = %reward.name, "Achievement granted");
    }

    txn.commit().await?;
    Ok(granted)
}

fn ranking_column(category: RankingCategory) -> profile::Column {
    match category {
        RankingCategory::Hackathon => profile::Column::HackathonRankingPoints,
        RankingCategory::Project => profile::Column::ProjectRankingPoints,
        RankingCategory::Quiz => profile::Column::QuizRankingPoints,
        RankingCategory::Exercise => profile::Column::ExerciseRankingPoints,
    }
}

/// Add (or with a negative amount, remove) ranking points in one category.
/// The overall total moves by the same amount.
#[instrument(skip(db))]
pub async fn add_ranking_points<C: ConnectionTrait>(
    db: &C,
    profile_id: i32,
    category: RankingCategory,
    points: i32,
) -> Result<profile::Model, StoreError> {
    let column = ranking_column(category);
    let result = profile::Entity::update_many()
        .filter(profile::Column::Id.eq(profile_id))
        .col_expr(column, Expr::col(column).add(points))
        .col_expr(
            profile::Column::OverallRankingPoints,
            Expr::col(profile::Column::OverallRankingPoints).add(points),
        )
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(StoreError::not_found("profile"));
    }
    find(db, profile::Entity, profile_id).await
}

pub async fn add_past_hackathon<C: ConnectionTrait>(
    db: &C,
    profile_id: i32,
    hackathon_id: &str,
) -> Result<bool, StoreError> {
    link(
        db,
        profile_past_hackathon::ActiveModel {
            profile_id: Set(profile_id),
            hackathon_id: Set(hackathon_id.to_string()),
        },
    )
    .await
}

pub async fn add_project<C: ConnectionTrait>(
    db: &C,
    profile_id: i32,
    project_id: &str,
) -> Result<bool, StoreError> {
    link(
        db,
        profile_project::ActiveModel {
            profile_id: Set(profile_id),
            project_id: Set(project_id.to_string()),
        },
    )
    .await
}

/// The profile belonging to `account_id`.
pub async fn find_by_account<C: ConnectionTrait>(
    db: &C,
    account_id: i32,
) -> Result<profile::Model, StoreError> {
    profile::Entity::find()
        .filter(profile::Column::AccountId.eq(account_id))
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found("profile"))
}
