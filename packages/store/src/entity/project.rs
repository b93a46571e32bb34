use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    /// Generated 8-character identifier, see [`common::id::generate_id`].
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub project_image: Option<String>,
    pub technologies_used: Option<Vec<String>>,
    pub github_link: Option<String>,
    pub project_link: Option<String>,
    pub video_link: Option<String>,
    /// Storage paths of files submitted with the project.
    pub extra_files: Option<Vec<String>>,

    /// A profile cannot be deleted while it still owns projects.
    pub creator_id: i32,
    #[sea_orm(belongs_to, from = "creator_id", to = "id", on_delete = "Restrict")]
    pub creator: HasOne<super::profile::Entity>,

    #[sea_orm(default_value = 0)]
    pub likes: i32,
}

impl ActiveModelBehavior for ActiveModel {}
