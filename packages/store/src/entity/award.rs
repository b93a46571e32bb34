use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "award")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub prize: String,

    /// NULL until a winner is announced.
    pub winner_id: Option<i32>,
    #[sea_orm(belongs_to, from = "winner_id", to = "id", on_delete = "Restrict")]
    pub winner: HasOne<super::profile::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
