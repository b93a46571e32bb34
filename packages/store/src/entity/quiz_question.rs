use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quiz_question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub question: String,
    pub answers: Vec<String>,
    /// Index into `answers`.
    pub correct_answer_index: i32,
}

impl Model {
    pub fn correct_answer(&self) -> Option<&str> {
        usize::try_from(self.correct_answer_index)
            .ok()
            .and_then(|i| self.answers.get(i))
            .map(String::as_str)
    }
}

impl ActiveModelBehavior for ActiveModel {}
