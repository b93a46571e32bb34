use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Removing the account removes its profile.
    #[sea_orm(unique)]
    pub account_id: i32,
    #[sea_orm(belongs_to, from = "account_id", to = "id", on_delete = "Cascade")]
    pub account: HasOne<super::account::Entity>,

    pub status: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub biography: Option<String>,
    pub birthday: Option<Date>,
    pub education: Option<String>,
    pub location: Option<String>,
    /// Storage path of the uploaded picture.
    pub profile_picture: Option<String>,
    pub skills: Option<Vec<String>>,

    pub github_profile: Option<String>,
    pub linkedin_profile: Option<String>,
    pub twitter_profile: Option<String>,
    pub instagram_profile: Option<String>,
    pub facebook_profile: Option<String>,
    pub twitch_profile: Option<String>,
    pub personal_website: Option<String>,

    #[sea_orm(has_many, via = "profile_past_hackathon")]
    pub past_hackathons: HasMany<super::hackathon::Entity>,

    #[sea_orm(has_many, via = "profile_project")]
    pub projects: HasMany<super::project::Entity>,

    #[sea_orm(has_many, via = "profile_achievement")]
    pub achievements: HasMany<super::achievement::Entity>,

    pub joined_date: Date,
    #[sea_orm(default_value = 0)]
    pub credits: i32,
    #[sea_orm(default_value = 0)]
    pub overall_ranking_points: i32,
    #[sea_orm(default_value = 0)]
    pub hackathon_ranking_points: i32,
    #[sea_orm(default_value = 0)]
    pub project_ranking_points: i32,
    #[sea_orm(default_value = 0)]
    pub quiz_ranking_points: i32,
    #[sea_orm(default_value = 0)]
    pub exercise_ranking_points: i32,
}

impl ActiveModelBehavior for ActiveModel {}
