use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "research_exercise")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Names of what should be known before starting.
    pub prerequisites: Option<Vec<String>>,

    pub topic_id: i32,
    #[sea_orm(belongs_to, from = "topic_id", to = "id", on_delete = "Restrict")]
    pub topic: HasOne<super::topic::Entity>,

    pub difficulty_level_id: i32,
    #[sea_orm(belongs_to, from = "difficulty_level_id", to = "id", on_delete = "Restrict")]
    pub difficulty_level: HasOne<super::difficulty_level::Entity>,

    #[sea_orm(has_many, via = "research_exercise_resource")]
    pub resources: HasMany<super::resource_link::Entity>,

    #[sea_orm(has_many)]
    pub completions: HasMany<super::completed_research_exercise::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
