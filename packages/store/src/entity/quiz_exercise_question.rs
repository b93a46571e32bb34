use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quiz_exercise_question")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub quiz_exercise_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub quiz_question_id: i32,
    #[sea_orm(belongs_to, from = "quiz_exercise_id", to = "id", on_delete = "Cascade")]
    pub quiz_exercise: HasOne<super::quiz_exercise::Entity>,
    #[sea_orm(belongs_to, from = "quiz_question_id", to = "id", on_delete = "Cascade")]
    pub quiz_question: HasOne<super::quiz_question::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
