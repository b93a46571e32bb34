use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "completed_fix_the_code_exercise")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub repl_link: String,
    pub score: Option<i32>,

    pub fix_the_code_exercise_id: String,
    #[sea_orm(
        belongs_to,
        from = "fix_the_code_exercise_id",
        to = "id",
        on_delete = "Restrict"
    )]
    pub fix_the_code_exercise: HasOne<super::fix_the_code_exercise::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
