use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hackathon_award")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub hackathon_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub award_id: i32,
    #[sea_orm(belongs_to, from = "hackathon_id", to = "id", on_delete = "Cascade")]
    pub hackathon: HasOne<super::hackathon::Entity>,
    #[sea_orm(belongs_to, from = "award_id", to = "id", on_delete = "Cascade")]
    pub award: HasOne<super::award::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
