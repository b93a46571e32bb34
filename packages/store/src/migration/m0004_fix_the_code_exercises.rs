use sea_orm::sea_query::{Alias, Table};

use common::DeletePolicy;

use super::schema::KeyKind::{Generated, Serial};
use super::schema::*;
use super::{Migration, Operation};

pub const MIGRATION: Migration = Migration {
    name: "0004_fix_the_code_exercises",
    depends_on: Some("0003_research_exercises"),
    operations,
};

fn operations() -> Vec<Operation> {
    let exercise = exercise_table("fix_the_code_exercise")
        .col(varchar("repl_link", 100))
        .to_owned();

    let completed = Table::create()
        .table(Alias::new("completed_fix_the_code_exercise"))
        .col(serial_id())
        .col(varchar("repl_link", 100))
        .col(integer_null("score"))
        .col(reference("fix_the_code_exercise_id", Generated, false))
        .foreign_key(&mut foreign_key(
            "completed_fix_the_code_exercise",
            "fix_the_code_exercise_id",
            "fix_the_code_exercise",
            DeletePolicy::Protect,
        ))
        .to_owned();

    vec![
        Operation::CreateTable(exercise),
        Operation::CreateTable(join_table(
            "fix_the_code_exercise_resource",
            ("fix_the_code_exercise", Generated),
            ("resource_link", Serial),
        )),
        Operation::CreateTable(completed),
    ]
}
