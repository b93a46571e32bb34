use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lookup record grouping exercises. Protected while any exercise uses it.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "topic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    /// Form used in URL extensions and query parameters.
    pub searchable_name: String,
    pub image: String,

    #[sea_orm(has_many)]
    pub project_exercises: HasMany<super::project_exercise::Entity>,
    #[sea_orm(has_many)]
    pub quiz_exercises: HasMany<super::quiz_exercise::Entity>,
    #[sea_orm(has_many)]
    pub mini_exercises: HasMany<super::mini_exercise::Entity>,
    #[sea_orm(has_many)]
    pub research_exercises: HasMany<super::research_exercise::Entity>,
    #[sea_orm(has_many)]
    pub fix_the_code_exercises: HasMany<super::fix_the_code_exercise::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
