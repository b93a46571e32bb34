use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resource_link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,
    /// Path segment the link is served under.
    #[sea_orm(unique)]
    pub url_extension: String,
    pub link: String,
}

impl ActiveModelBehavior for ActiveModel {}
