use sea_orm::sea_query::{Alias, Table};

use super::schema::KeyKind::{Generated, Serial};
use super::schema::*;
use super::{Migration, Operation};

pub const MIGRATION: Migration = Migration {
    name: "0002_exercises",
    depends_on: Some("0001_initial"),
    operations,
};

fn operations() -> Vec<Operation> {
    let topic = Table::create()
        .table(Alias::new("topic"))
        .col(serial_id())
        .col(varchar("name", 50))
        .col(varchar("searchable_name", 50))
        .col(varchar("image", 100))
        .to_owned();

    let difficulty_level = Table::create()
        .table(Alias::new("difficulty_level"))
        .col(serial_id())
        .col(varchar("name", 10).unique_key())
        .to_owned();

    let quiz_question = Table::create()
        .table(Alias::new("quiz_question"))
        .col(serial_id())
        .col(varchar("question", 100))
        .col(varchar_array("answers", 100, false))
        .col(integer("correct_answer_index"))
        .to_owned();

    vec![
        Operation::CreateTable(topic),
        Operation::CreateTable(difficulty_level),
        Operation::CreateTable(quiz_question),
        Operation::CreateTable(exercise_table("project_exercise")),
        Operation::CreateTable(exercise_table("quiz_exercise")),
        Operation::CreateTable(exercise_table("mini_exercise")),
        Operation::CreateTable(join_table(
            "project_exercise_resource",
            ("project_exercise", Generated),
            ("resource_link", Serial),
        )),
        Operation::CreateTable(join_table(
            "quiz_exercise_resource",
            ("quiz_exercise", Generated),
            ("resource_link", Serial),
        )),
        Operation::CreateTable(join_table(
            "quiz_exercise_question",
            ("quiz_exercise", Generated),
            ("quiz_question", Serial),
        )),
        Operation::CreateTable(join_table(
            "mini_exercise_resource",
            ("mini_exercise", Generated),
            ("resource_link", Serial),
        )),
    ]
}
