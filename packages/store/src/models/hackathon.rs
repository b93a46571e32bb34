use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::StoreError;
use crate::models::shared::*;

#[derive(Debug, Clone, Deserialize)]
pub struct NewHackathon {
    pub title: String,
    pub description: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub submissions_open_datetime: DateTime<Utc>,
    pub submissions_close_datetime: DateTime<Utc>,
    pub winners_announced: DateTime<Utc>,
}

pub fn validate_new_hackathon(payload: &NewHackathon) -> Result<(), StoreError> {
    validate_required("title", &payload.title, 50)?;
    validate_required("description", &payload.description, 300)?;
    if payload.end_datetime <= payload.start_datetime {
        return Err(StoreError::Validation(
            "end_datetime must be after start_datetime".into(),
        ));
    }
    if payload.submissions_close_datetime <= payload.submissions_open_datetime {
        return Err(StoreError::Validation(
            "submissions_close_datetime must be after submissions_open_datetime".into(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTheme {
    pub title: String,
    pub description: String,
}

pub fn validate_new_theme(payload: &NewTheme) -> Result<(), StoreError> {
    validate_required("title", &payload.title, 50)?;
    validate_required("description", &payload.description, 300)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAward {
    pub title: String,
    pub description: String,
    pub prize: String,
}

pub fn validate_new_award(payload: &NewAward) -> Result<(), StoreError> {
    validate_required("title", &payload.title, 50)?;
    validate_required("description", &payload.description, 300)?;
    validate_required("prize", &payload.prize, 100)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewResourceLink {
    pub title: String,
    pub url_extension: String,
    pub link: String,
}

pub fn validate_new_resource_link(payload: &NewResourceLink) -> Result<(), StoreError> {
    validate_required("title", &payload.title, 50)?;
    validate_required("url_extension", &payload.url_extension, 50)?;
    if payload.url_extension.contains(char::is_whitespace) {
        return Err(StoreError::Validation(
            "url_extension must not contain whitespace".into(),
        ));
    }
    validate_required("link", &payload.link, 200)
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewScheduleEvent {
    pub title: String,
    pub description: String,
    pub event_link_id: i32,
}

pub fn validate_new_schedule_event(payload: &NewScheduleEvent) -> Result<(), StoreError> {
    validate_required("title", &payload.title, 50)?;
    validate_required("description", &payload.description, 300)
}
