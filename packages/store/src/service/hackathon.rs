use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{
    achievement, award, hackathon, hackathon_award, hackathon_competitor, hackathon_resource,
    hackathon_schedule_event, hackathon_submission, hackathon_theme, resource_link,
    schedule_event, theme,
};
use crate::error::StoreError;
use crate::models::hackathon::*;
use crate::models::profile::{NewAchievement, validate_new_achievement};
use crate::service::{find, insert_with_generated_id, link, unlink};

#[instrument(skip(db, payload), fields(title = %payload.title))]
pub async fn create_hackathon<C: TransactionTrait>(
    db: &C,
    payload: NewHackathon,
) -> Result<hackathon::Model, StoreError> {
    validate_new_hackathon(&payload)?;

    let model = insert_with_generated_id(db, |id| hackathon::ActiveModel {
        id: Set(id),
        title: Set(payload.title.trim().to_string()),
        description: Set(payload.description.clone()),
        start_datetime: Set(payload.start_datetime),
        end_datetime: Set(payload.end_datetime),
        submissions_open_datetime: Set(payload.submissions_open_datetime),
        submissions_close_datetime: Set(payload.submissions_close_datetime),
        winners_announced: Set(payload.winners_announced),
    })
    .await?;

    info!(id = %model.id, "Hackathon created");
    Ok(model)
}

pub async fn create_theme<C: ConnectionTrait>(
    db: &C,
    payload: NewTheme,
) -> Result<theme::Model, StoreError> {
    validate_new_theme(&payload)?;
    theme::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        description: Set(payload.description),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| StoreError::on_write(e, "theme"))
}

pub async fn create_award<C: ConnectionTrait>(
    db: &C,
    payload: NewAward,
) -> Result<award::Model, StoreError> {
    validate_new_award(&payload)?;
    award::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        description: Set(payload.description),
        prize: Set(payload.prize.trim().to_string()),
        winner_id: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| StoreError::on_write(e, "award"))
}

/// Record (or with `None`, clear) the winner of an award.
#[instrument(skip(db))]
pub async fn set_award_winner<C: ConnectionTrait>(
    db: &C,
    award_id: i32,
    winner_id: Option<i32>,
) -> Result<award::Model, StoreError> {
    let mut active = find(db, award::Entity, award_id).await?.into_active_model();
    active.winner_id = Set(winner_id);
    active
        .update(db)
        .await
        .map_err(|e| StoreError::on_write(e, "award"))
}

/// Resource links are addressed by their URL extension, which must be unique.
#[instrument(skip(db, payload), fields(url_extension = %payload.url_extension))]
pub async fn create_resource_link<C: ConnectionTrait>(
    db: &C,
    payload: NewResourceLink,
) -> Result<resource_link::Model, StoreError> {
    validate_new_resource_link(&payload)?;
    resource_link::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        url_extension: Set(payload.url_extension.trim().to_string()),
        link: Set(payload.link.trim().to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| StoreError::on_write(e, "resource_link"))
}

pub async fn create_schedule_event<C: ConnectionTrait>(
    db: &C,
    payload: NewScheduleEvent,
) -> Result<schedule_event::Model, StoreError> {
    validate_new_schedule_event(&payload)?;
    schedule_event::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        description: Set(payload.description),
        event_link_id: Set(payload.event_link_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| StoreError::on_write(e, "schedule_event"))
}

pub async fn create_achievement<C: ConnectionTrait>(
    db: &C,
    payload: NewAchievement,
) -> Result<achievement::Model, StoreError> {
    validate_new_achievement(&payload)?;
    achievement::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        requirement: Set(payload.requirement),
        credits: Set(payload.credits),
        ranking_points: Set(payload.ranking_points),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| StoreError::on_write(e, "achievement"))
}

/// Sign a profile up as competitor. Signing up twice is a no-op.
#[instrument(skip(db))]
pub async fn add_competitor<C: ConnectionTrait>(
    db: &C,
    hackathon_id: &str,
    profile_id: i32,
) -> Result<bool, StoreError> {
    link(
        db,
        hackathon_competitor::ActiveModel {
            hackathon_id: Set(hackathon_id.to_string()),
            profile_id: Set(profile_id),
        },
    )
    .await
}

#[instrument(skip(db))]
pub async fn remove_competitor<C: ConnectionTrait>(
    db: &C,
    hackathon_id: &str,
    profile_id: i32,
) -> Result<bool, StoreError> {
    unlink(
        db,
        hackathon_competitor::Entity,
        (hackathon_id.to_string(), profile_id),
    )
    .await
}

#[instrument(skip(db))]
pub async fn add_submission<C: ConnectionTrait>(
    db: &C,
    hackathon_id: &str,
    project_id: &str,
) -> Result<bool, StoreError> {
    link(
        db,
        hackathon_submission::ActiveModel {
            hackathon_id: Set(hackathon_id.to_string()),
            project_id: Set(project_id.to_string()),
        },
    )
    .await
}

pub async fn add_theme<C: ConnectionTrait>(
    db: &C,
    hackathon_id: &str,
    theme_id: i32,
) -> Result<bool, StoreError> {
    link(
        db,
        hackathon_theme::ActiveModel {
            hackathon_id: Set(hackathon_id.to_string()),
            theme_id: Set(theme_id),
        },
    )
    .await
}

pub async fn add_award<C: ConnectionTrait>(
    db: &C,
    hackathon_id: &str,
    award_id: i32,
) -> Result<bool, StoreError> {
    link(
        db,
        hackathon_award::ActiveModel {
            hackathon_id: Set(hackathon_id.to_string()),
            award_id: Set(award_id),
        },
    )
    .await
}

pub async fn add_schedule_event<C: ConnectionTrait>(
    db: &C,
    hackathon_id: &str,
    schedule_event_id: i32,
) -> Result<bool, StoreError> {
    link(
        db,
        hackathon_schedule_event::ActiveModel {
            hackathon_id: Set(hackathon_id.to_string()),
            schedule_event_id: Set(schedule_event_id),
        },
    )
    .await
}

pub async fn add_resource<C: ConnectionTrait>(
    db: &C,
    hackathon_id: &str,
    resource_link_id: i32,
) -> Result<bool, StoreError> {
    link(
        db,
        hackathon_resource::ActiveModel {
            hackathon_id: Set(hackathon_id.to_string()),
            resource_link_id: Set(resource_link_id),
        },
    )
    .await
}
