use common::DeletePolicy::{Cascade, Protect};
use sea_orm::sea_query::{Alias, ColumnDef, Expr, Table};

use super::schema::KeyKind::{Generated, Serial};
use super::schema::*;
use super::{Migration, Operation};

pub const MIGRATION: Migration = Migration {
    name: "0001_initial",
    depends_on: None,
    operations,
};

fn operations() -> Vec<Operation> {
    let account = Table::create()
        .table(Alias::new("account"))
        .col(serial_id())
        .col(varchar("username", 150).unique_key())
        .col(varchar("email", 254).unique_key())
        .col(varchar("password", 128))
        .col(varchar("first_name", 150).default(""))
        .col(varchar("last_name", 150).default(""))
        .col(
            ColumnDef::new(Alias::new("is_active"))
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            timestamp("date_joined")
                .default(Expr::current_timestamp())
                .to_owned(),
        )
        .to_owned();

    let profile = Table::create()
        .table(Alias::new("profile"))
        .col(serial_id())
        .col(reference("account_id", Serial, false).unique_key())
        .col(varchar_null("status", 20))
        .col(ColumnDef::new(Alias::new("biography")).text().null())
        .col(ColumnDef::new(Alias::new("birthday")).date().null())
        .col(varchar_null("education", 100))
        .col(varchar_null("location", 50))
        .col(varchar_null("profile_picture", 100))
        .col(varchar_array("skills", 50, true))
        .col(varchar_null("github_profile", 100))
        .col(varchar_null("linkedin_profile", 100))
        .col(varchar_null("twitter_profile", 100))
        .col(varchar_null("instagram_profile", 100))
        .col(varchar_null("facebook_profile", 100))
        .col(varchar_null("twitch_profile", 100))
        .col(varchar_null("personal_website", 100))
        .col(date_today("joined_date"))
        .col(counter("credits"))
        .col(counter("overall_ranking_points"))
        .col(counter("hackathon_ranking_points"))
        .col(counter("project_ranking_points"))
        .col(counter("quiz_ranking_points"))
        .col(counter("exercise_ranking_points"))
        .foreign_key(&mut foreign_key("profile", "account_id", "account", Cascade))
        .to_owned();

    let achievement = Table::create()
        .table(Alias::new("achievement"))
        .col(serial_id())
        .col(varchar("name", 50))
        .col(text("requirement"))
        .col(integer("credits"))
        .col(integer("ranking_points"))
        .to_owned();

    let theme = Table::create()
        .table(Alias::new("theme"))
        .col(serial_id())
        .col(varchar("title", 50))
        .col(text("description"))
        .to_owned();

    let resource_link = Table::create()
        .table(Alias::new("resource_link"))
        .col(serial_id())
        .col(varchar("title", 50))
        .col(varchar("url_extension", 50).unique_key())
        .col(varchar("link", 200))
        .to_owned();

    let project = Table::create()
        .table(Alias::new("project"))
        .col(generated_id())
        .col(varchar("title", 50))
        .col(text("description"))
        .col(varchar_null("project_image", 100))
        .col(varchar_array("technologies_used", 30, true))
        .col(varchar_null("github_link", 200))
        .col(varchar_null("project_link", 200))
        .col(varchar_null("video_link", 200))
        .col(varchar_array("extra_files", 100, true))
        .col(reference("creator_id", Serial, false))
        .col(counter("likes"))
        .foreign_key(&mut foreign_key("project", "creator_id", "profile", Protect))
        .to_owned();

    let award = Table::create()
        .table(Alias::new("award"))
        .col(serial_id())
        .col(varchar("title", 50))
        .col(text("description"))
        .col(varchar("prize", 100))
        .col(reference("winner_id", Serial, true))
        .foreign_key(&mut foreign_key("award", "winner_id", "profile", Protect))
        .to_owned();

    let schedule_event = Table::create()
        .table(Alias::new("schedule_event"))
        .col(serial_id())
        .col(varchar("title", 50))
        .col(text("description"))
        .col(reference("event_link_id", Serial, false))
        .foreign_key(&mut foreign_key(
            "schedule_event",
            "event_link_id",
            "resource_link",
            Cascade,
        ))
        .to_owned();

    let hackathon = Table::create()
        .table(Alias::new("hackathon"))
        .col(generated_id())
        .col(varchar("title", 50))
        .col(text("description"))
        .col(timestamp("start_datetime"))
        .col(timestamp("end_datetime"))
        .col(timestamp("submissions_open_datetime"))
        .col(timestamp("submissions_close_datetime"))
        .col(timestamp("winners_announced"))
        .to_owned();

    let junctions = [
        join_table(
            "profile_past_hackathon",
            ("profile", Serial),
            ("hackathon", Generated),
        ),
        join_table(
            "profile_project",
            ("profile", Serial),
            ("project", Generated),
        ),
        join_table(
            "profile_achievement",
            ("profile", Serial),
            ("achievement", Serial),
        ),
        join_table(
            "hackathon_schedule_event",
            ("hackathon", Generated),
            ("schedule_event", Serial),
        ),
        join_table(
            "hackathon_theme",
            ("hackathon", Generated),
            ("theme", Serial),
        ),
        join_table(
            "hackathon_award",
            ("hackathon", Generated),
            ("award", Serial),
        ),
        join_table(
            "hackathon_resource",
            ("hackathon", Generated),
            ("resource_link", Serial),
        ),
        join_table(
            "hackathon_competitor",
            ("hackathon", Generated),
            ("profile", Serial),
        ),
        join_table(
            "hackathon_submission",
            ("hackathon", Generated),
            ("project", Generated),
        ),
    ];

    [
        account,
        profile,
        achievement,
        theme,
        resource_link,
        project,
        award,
        schedule_event,
        hackathon,
    ]
    .into_iter()
    .chain(junctions)
    .map(Operation::CreateTable)
    .collect()
}
