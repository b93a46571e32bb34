use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The user-account record a [`super::profile`] extends. Username and email
/// are both unique.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Opaque password hash; hashing belongs to the auth layer.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(default_value = true)]
    pub is_active: bool,

    #[sea_orm(has_one)]
    pub profile: HasOne<super::profile::Entity>,

    pub date_joined: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
