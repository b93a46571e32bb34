use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "completed_research_exercise")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub research_link: String,
    /// NULL until graded.
    pub score: Option<i32>,

    pub research_exercise_id: String,
    #[sea_orm(belongs_to, from = "research_exercise_id", to = "id", on_delete = "Restrict")]
    pub research_exercise: HasOne<super::research_exercise::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
