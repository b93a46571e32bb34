use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mini_exercise_resource")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mini_exercise_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub resource_link_id: i32,
    #[sea_orm(belongs_to, from = "mini_exercise_id", to = "id", on_delete = "Cascade")]
    pub mini_exercise: HasOne<super::mini_exercise::Entity>,
    #[sea_orm(belongs_to, from = "resource_link_id", to = "id", on_delete = "Cascade")]
    pub resource_link: HasOne<super::resource_link::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
