use serde::Deserialize;

use crate::error::StoreError;
use crate::models::shared::*;

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub project_image: Option<String>,
    pub technologies_used: Option<Vec<String>>,
    pub github_link: Option<String>,
    pub project_link: Option<String>,
    pub video_link: Option<String>,
    pub extra_files: Option<Vec<String>>,
    /// Profile id of the author.
    pub creator_id: i32,
}

pub fn validate_new_project(payload: &NewProject) -> Result<(), StoreError> {
    validate_required("title", &payload.title, 50)?;
    validate_required("description", &payload.description, 500)?;
    validate_optional("project_image", payload.project_image.as_deref(), 100)?;
    validate_optional_items("technologies_used", payload.technologies_used.as_deref(), 30)?;
    validate_optional("github_link", payload.github_link.as_deref(), 200)?;
    validate_optional("project_link", payload.project_link.as_deref(), 200)?;
    validate_optional("video_link", payload.video_link.as_deref(), 200)?;
    validate_optional_items("extra_files", payload.extra_files.as_deref(), 100)?;
    Ok(())
}
