use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hackathon")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_datetime: DateTimeUtc,
    pub end_datetime: DateTimeUtc,
    pub submissions_open_datetime: DateTimeUtc,
    pub submissions_close_datetime: DateTimeUtc,
    pub winners_announced: DateTimeUtc,

    #[sea_orm(has_many, via = "hackathon_schedule_event")]
    pub schedule: HasMany<super::schedule_event::Entity>,

    #[sea_orm(has_many, via = "hackathon_theme")]
    pub themes: HasMany<super::theme::Entity>,

    #[sea_orm(has_many, via = "hackathon_award")]
    pub awards: HasMany<super::award::Entity>,

    #[sea_orm(has_many, via = "hackathon_resource")]
    pub resources: HasMany<super::resource_link::Entity>,

    /// Empty until people sign up.
    #[sea_orm(has_many, via = "hackathon_competitor")]
    pub competitors: HasMany<super::profile::Entity>,

    #[sea_orm(has_many, via = "hackathon_submission")]
    pub submissions: HasMany<super::project::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
