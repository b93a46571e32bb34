use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::StoreError;
use crate::models::shared::*;

#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    /// Already hashed by the auth layer.
    pub password_hash: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

pub fn validate_new_account(payload: &NewAccount) -> Result<(), StoreError> {
    validate_required("username", &payload.username, 150)?;
    validate_required("email", &payload.email, 254)?;
    if !payload.email.contains('@') {
        return Err(StoreError::Validation("email must contain '@'".into()));
    }
    // Stored verbatim, so the limit applies to the untrimmed hash.
    if payload.password_hash.trim().is_empty() || payload.password_hash.chars().count() > 128 {
        return Err(StoreError::Validation("password_hash must be 1-128 characters".into()));
    }
    validate_optional("first_name", Some(&payload.first_name), 150)?;
    validate_optional("last_name", Some(&payload.last_name), 150)?;
    Ok(())
}

/// Optional profile details. Everything may be filled in later.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProfile {
    pub status: Option<String>,
    pub biography: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub profile_picture: Option<String>,
    pub skills: Option<Vec<String>>,
    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub twitter_profile: Option<String>,
    pub instagram_profile: Option<String>,
    pub facebook_profile: Option<String>,
    pub twitch_profile: Option<String>,
    pub personal_website: Option<String>,
}

pub fn validate_new_profile(payload: &NewProfile) -> Result<(), StoreError> {
    validate_optional("status", payload.status.as_deref(), 20)?;
    validate_optional("biography", payload.biography.as_deref(), 200)?;
    validate_optional("education", payload.education.as_deref(), 100)?;
    validate_optional("location", payload.location.as_deref(), 50)?;
    validate_optional("profile_picture", payload.profile_picture.as_deref(), 100)?;
    validate_optional_items("skills", payload.skills.as_deref(), 50)?;

    let links = [
        ("github_profile", &payload.github_profile),
        ("linkedin_profile", &payload.linkedin_profile),
        ("twitter_profile", &payload.twitter_profile),
        ("instagram_profile", &payload.instagram_profile),
        ("facebook_profile", &payload.facebook_profile),
        ("twitch_profile", &payload.twitch_profile),
        ("personal_website", &payload.personal_website),
    ];
    for (field, value) in links {
        validate_optional(field, value.as_deref(), 100)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAchievement {
    pub name: String,
    pub requirement: String,
    pub credits: i32,
    pub ranking_points: i32,
}

pub fn validate_new_achievement(payload: &NewAchievement) -> Result<(), StoreError> {
    validate_required("name", &payload.name, 50)?;
    if payload.requirement.trim().is_empty() {
        return Err(StoreError::Validation("requirement must not be empty".into()));
    }
    if payload.credits < 0 || payload.ranking_points < 0 {
        return Err(StoreError::Validation(
            "credits and ranking_points must be >= 0".into(),
        ));
    }
    Ok(())
}

/// Ranking point buckets. Every bucket also feeds the overall total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingCategory {
    Hackathon,
    Project,
    Quiz,
    Exercise,
}
