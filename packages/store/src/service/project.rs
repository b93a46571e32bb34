use common::id::is_valid_id;
use sea_orm::prelude::Expr;
use sea_orm::sea_query::ExprTrait;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::project;
use crate::error::StoreError;
use crate::models::project::*;
use crate::service::{find, insert_with_generated_id, profile};

/// Create a project and put it in its creator's project list.
#[instrument(skip(db, payload), fields(title = %payload.title))]
pub async fn create_project<C: TransactionTrait>(
    db: &C,
    payload: NewProject,
) -> Result<project::Model, StoreError> {
    validate_new_project(&payload)?;

    let txn = db.begin().await?;
    let model = insert_with_generated_id(&txn, |id| project::ActiveModel {
        id: Set(id),
        title: Set(payload.title.trim().to_string()),
        description: Set(payload.description.clone()),
        project_image: Set(payload.project_image.clone()),
        technologies_used: Set(payload.technologies_used.clone()),
        github_link: Set(payload.github_link.clone()),
        project_link: Set(payload.project_link.clone()),
        video_link: Set(payload.video_link.clone()),
        extra_files: Set(payload.extra_files.clone()),
        creator_id: Set(payload.creator_id),
        likes: Set(0),
    })
    .await?;

    profile::add_project(&txn, model.creator_id, &model.id).await?;
    txn.commit().await?;

    info!(id = %model.id, creator_id = model.creator_id, "Project created");
    Ok(model)
}

/// Increment the like counter in place and return the new count.
#[instrument(skip(db))]
pub async fn like_project<C: ConnectionTrait>(db: &C, id: &str) -> Result<i32, StoreError> {
    if !is_valid_id(id) {
        return Err(StoreError::not_found("project"));
    }
    let result = project::Entity::update_many()
        .filter(project::Column::Id.eq(id))
        .col_expr(
            project::Column::Likes,
            Expr::col(project::Column::Likes).add(1),
        )
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(StoreError::not_found("project"));
    }
    Ok(find(db, project::Entity, id.to_string()).await?.likes)
}
