use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile_achievement")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub profile_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub achievement_id: i32,
    #[sea_orm(belongs_to, from = "profile_id", to = "id", on_delete = "Cascade")]
    pub profile: HasOne<super::profile::Entity>,
    #[sea_orm(belongs_to, from = "achievement_id", to = "id", on_delete = "Cascade")]
    pub achievement: HasOne<super::achievement::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
