use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fix_the_code_exercise_resource")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fix_the_code_exercise_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub resource_link_id: i32,
    #[sea_orm(belongs_to, from = "fix_the_code_exercise_id", to = "id", on_delete = "Cascade")]
    pub fix_the_code_exercise: HasOne<super::fix_the_code_exercise::Entity>,
    #[sea_orm(belongs_to, from = "resource_link_id", to = "id", on_delete = "Cascade")]
    pub resource_link: HasOne<super::resource_link::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
