use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub requirement: String,
    pub credits: i32,        // granted when achieved
    pub ranking_points: i32, // granted when achieved
}

impl ActiveModelBehavior for ActiveModel {}
