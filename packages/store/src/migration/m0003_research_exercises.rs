use sea_orm::sea_query::{Alias, Table};

use common::DeletePolicy;

use super::schema::KeyKind::{Generated, Serial};
use super::schema::*;
use super::{Migration, Operation};

pub const MIGRATION: Migration = Migration {
    name: "0003_research_exercises",
    depends_on: Some("0002_exercises"),
    operations,
};

fn operations() -> Vec<Operation> {
    let completed = Table::create()
        .table(Alias::new("completed_research_exercise"))
        .col(serial_id())
        .col(varchar("research_link", 200))
        .col(integer_null("score"))
        .col(reference("research_exercise_id", Generated, false))
        .foreign_key(&mut foreign_key(
            "completed_research_exercise",
            "research_exercise_id",
            "research_exercise",
            DeletePolicy::Protect,
        ))
        .to_owned();

    vec![
        Operation::CreateTable(exercise_table("research_exercise")),
        Operation::CreateTable(join_table(
            "research_exercise_resource",
            ("research_exercise", Generated),
            ("resource_link", Serial),
        )),
        Operation::CreateTable(completed),
    ]
}
