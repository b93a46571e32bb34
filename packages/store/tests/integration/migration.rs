use std::collections::{BTreeSet, HashSet};

use ::common::DeletePolicy::{self, Cascade, Protect};
use sea_orm::{
    ConnectionTrait, DbBackend, EntityTrait, FromQueryResult, IdenStatic, Iterable, Statement,
};

use store::entity::*;
use store::error::MigrationError;
use store::migration::{self, MIGRATIONS};

use crate::common::TestDb;

#[derive(Debug, FromQueryResult)]
struct ColumnRow {
    column_name: String,
}

#[derive(Debug, FromQueryResult)]
struct ColumnShapeRow {
    table_name: String,
    column_name: String,
    column_type: String,
    not_null: bool,
    column_default: Option<String>,
    identity: String,
}

impl ColumnShapeRow {
    /// `table.column type [NOT NULL] [DEFAULT x]`, with sequence-backed keys
    /// shown as `DEFAULT serial` and literal casts dropped.
    fn render(&self) -> String {
        let mut line = format!("{}.{} {}", self.table_name, self.column_name, self.column_type);
        if self.not_null {
            line.push_str(" NOT NULL");
        }
        let default = match self.column_default.as_deref() {
            _ if !self.identity.is_empty() => Some("serial"),
            Some(d) if d.starts_with("nextval(") => Some("serial"),
            Some(d) => Some(d.split("::").next().unwrap_or(d)),
            None => None,
        };
        if let Some(default) = default {
            line.push_str(" DEFAULT ");
            line.push_str(default);
        }
        line
    }
}

#[derive(Debug, FromQueryResult)]
struct ForeignKeyRow {
    table_name: String,
    column_name: String,
    delete_rule: String,
}

async fn table_columns(test: &TestDb, table: &str) -> BTreeSet<String> {
    ColumnRow::find_by_statement(Statement::from_sql_and_values(
        DbBackend::Postgres,
        "SELECT column_name::text AS column_name FROM information_schema.columns \
         WHERE table_schema = 'public' AND table_name = $1",
        [table.into()],
    ))
    .all(&test.db)
    .await
    .expect("column query failed")
    .into_iter()
    .map(|r| r.column_name)
    .collect()
}

async fn assert_columns_match<E: EntityTrait>(test: &TestDb, entity: E) {
    let table = entity.table_name();
    let expected: BTreeSet<String> = E::Column::iter()
        .map(|c| c.as_str().to_string())
        .collect();
    assert_eq!(
        table_columns(test, table).await,
        expected,
        "columns of {table} differ from its entity"
    );
}

const SERIAL_ID: &str = "id integer NOT NULL DEFAULT serial";
const GENERATED_ID: &str = "id character varying(8) NOT NULL";

/// Every non-junction column of the replayed schema, by table.
const TABLE_SHAPES: &[(&str, &[&str])] = &[
    (
        "account",
        &[
            SERIAL_ID,
            "username character varying(150) NOT NULL",
            "email character varying(254) NOT NULL",
            "password character varying(128) NOT NULL",
            "first_name character varying(150) NOT NULL DEFAULT ''",
            "last_name character varying(150) NOT NULL DEFAULT ''",
            "is_active boolean NOT NULL DEFAULT true",
            "date_joined timestamp with time zone NOT NULL DEFAULT CURRENT_TIMESTAMP",
        ],
    ),
    (
        "profile",
        &[
            SERIAL_ID,
            "account_id integer NOT NULL",
            "status character varying(20)",
            "biography text",
            "birthday date",
            "education character varying(100)",
            "location character varying(50)",
            "profile_picture character varying(100)",
            "skills character varying(50)[]",
            "github_profile character varying(100)",
            "linkedin_profile character varying(100)",
            "twitter_profile character varying(100)",
            "instagram_profile character varying(100)",
            "facebook_profile character varying(100)",
            "twitch_profile character varying(100)",
            "personal_website character varying(100)",
            "joined_date date NOT NULL DEFAULT CURRENT_DATE",
            "credits integer NOT NULL DEFAULT 0",
            "overall_ranking_points integer NOT NULL DEFAULT 0",
            "hackathon_ranking_points integer NOT NULL DEFAULT 0",
            "project_ranking_points integer NOT NULL DEFAULT 0",
            "quiz_ranking_points integer NOT NULL DEFAULT 0",
            "exercise_ranking_points integer NOT NULL DEFAULT 0",
        ],
    ),
    (
        "achievement",
        &[
            SERIAL_ID,
            "name character varying(50) NOT NULL",
            "requirement text NOT NULL",
            "credits integer NOT NULL",
            "ranking_points integer NOT NULL",
        ],
    ),
    (
        "theme",
        &[
            SERIAL_ID,
            "title character varying(50) NOT NULL",
            "description text NOT NULL",
        ],
    ),
    (
        "resource_link",
        &[
            SERIAL_ID,
            "title character varying(50) NOT NULL",
            "url_extension character varying(50) NOT NULL",
            "link character varying(200) NOT NULL",
        ],
    ),
    (
        "project",
        &[
            GENERATED_ID,
            "title character varying(50) NOT NULL",
            "description text NOT NULL",
            "project_image character varying(100)",
            "technologies_used character varying(30)[]",
            "github_link character varying(200)",
            "project_link character varying(200)",
            "video_link character varying(200)",
            "extra_files character varying(100)[]",
            "creator_id integer NOT NULL",
            "likes integer NOT NULL DEFAULT 0",
        ],
    ),
    (
        "award",
        &[
            SERIAL_ID,
            "title character varying(50) NOT NULL",
            "description text NOT NULL",
            "prize character varying(100) NOT NULL",
            "winner_id integer",
        ],
    ),
    (
        "schedule_event",
        &[
            SERIAL_ID,
            "title character varying(50) NOT NULL",
            "description text NOT NULL",
            "event_link_id integer NOT NULL",
        ],
    ),
    (
        "hackathon",
        &[
            GENERATED_ID,
            "title character varying(50) NOT NULL",
            "description text NOT NULL",
            "start_datetime timestamp with time zone NOT NULL",
            "end_datetime timestamp with time zone NOT NULL",
            "submissions_open_datetime timestamp with time zone NOT NULL",
            "submissions_close_datetime timestamp with time zone NOT NULL",
            "winners_announced timestamp with time zone NOT NULL",
        ],
    ),
    (
        "topic",
        &[
            SERIAL_ID,
            "name character varying(50) NOT NULL",
            "searchable_name character varying(50) NOT NULL",
            "image character varying(100) NOT NULL",
        ],
    ),
    (
        "difficulty_level",
        &[SERIAL_ID, "name character varying(10) NOT NULL"],
    ),
    (
        "quiz_question",
        &[
            SERIAL_ID,
            "question character varying(100) NOT NULL",
            "answers character varying(100)[] NOT NULL",
            "correct_answer_index integer NOT NULL",
        ],
    ),
    (
        "fix_the_code_exercise",
        &["repl_link character varying(100) NOT NULL"],
    ),
    (
        "completed_research_exercise",
        &[
            SERIAL_ID,
            "research_link character varying(200) NOT NULL",
            "score integer",
            "research_exercise_id character varying(8) NOT NULL",
        ],
    ),
    (
        "completed_fix_the_code_exercise",
        &[
            SERIAL_ID,
            "repl_link character varying(100) NOT NULL",
            "score integer",
            "fix_the_code_exercise_id character varying(8) NOT NULL",
        ],
    ),
];

const EXERCISE_TABLES: [&str; 5] = [
    "project_exercise",
    "quiz_exercise",
    "mini_exercise",
    "research_exercise",
    "fix_the_code_exercise",
];

const INT: &str = "integer";
const KEY: &str = "character varying(8)";

/// Junction tables with the key type of each side.
const JUNCTION_SHAPES: &[(&str, (&str, &str), (&str, &str))] = &[
    ("profile_past_hackathon", ("profile_id", INT), ("hackathon_id", KEY)),
    ("profile_project", ("profile_id", INT), ("project_id", KEY)),
    ("profile_achievement", ("profile_id", INT), ("achievement_id", INT)),
    ("hackathon_schedule_event", ("hackathon_id", KEY), ("schedule_event_id", INT)),
    ("hackathon_theme", ("hackathon_id", KEY), ("theme_id", INT)),
    ("hackathon_award", ("hackathon_id", KEY), ("award_id", INT)),
    ("hackathon_resource", ("hackathon_id", KEY), ("resource_link_id", INT)),
    ("hackathon_competitor", ("hackathon_id", KEY), ("profile_id", INT)),
    ("hackathon_submission", ("hackathon_id", KEY), ("project_id", KEY)),
    ("project_exercise_resource", ("project_exercise_id", KEY), ("resource_link_id", INT)),
    ("quiz_exercise_resource", ("quiz_exercise_id", KEY), ("resource_link_id", INT)),
    ("quiz_exercise_question", ("quiz_exercise_id", KEY), ("quiz_question_id", INT)),
    ("mini_exercise_resource", ("mini_exercise_id", KEY), ("resource_link_id", INT)),
    ("research_exercise_resource", ("research_exercise_id", KEY), ("resource_link_id", INT)),
    (
        "fix_the_code_exercise_resource",
        ("fix_the_code_exercise_id", KEY),
        ("resource_link_id", INT),
    ),
];

fn expected_column_shapes() -> BTreeSet<String> {
    let mut shapes = BTreeSet::new();
    for (table, columns) in TABLE_SHAPES {
        shapes.extend(columns.iter().map(|c| format!("{table}.{c}")));
    }
    for table in EXERCISE_TABLES {
        shapes.extend(
            [
                GENERATED_ID,
                "name character varying(50) NOT NULL",
                "description text NOT NULL",
                "prerequisites character varying(50)[]",
                "topic_id integer NOT NULL",
                "difficulty_level_id integer NOT NULL",
            ]
            .map(|c| format!("{table}.{c}")),
        );
    }
    for (table, (left, left_type), (right, right_type)) in JUNCTION_SHAPES {
        shapes.insert(format!("{table}.{left} {left_type} NOT NULL"));
        shapes.insert(format!("{table}.{right} {right_type} NOT NULL"));
    }
    shapes
}

fn junction(
    table: &'static str,
    left: &'static str,
    right: &'static str,
) -> [(&'static str, &'static str, DeletePolicy); 2] {
    [(table, left, Cascade), (table, right, Cascade)]
}

fn expected_foreign_keys() -> HashSet<(String, String, &'static str)> {
    let mut keys = vec![
        ("profile", "account_id", Cascade),
        ("project", "creator_id", Protect),
        ("award", "winner_id", Protect),
        ("schedule_event", "event_link_id", Cascade),
        ("completed_research_exercise", "research_exercise_id", Protect),
        ("completed_fix_the_code_exercise", "fix_the_code_exercise_id", Protect),
    ];
    for table in [
        "project_exercise",
        "quiz_exercise",
        "mini_exercise",
        "research_exercise",
        "fix_the_code_exercise",
    ] {
        keys.push((table, "topic_id", Protect));
        keys.push((table, "difficulty_level_id", Protect));
    }
    let junctions = [
        junction("profile_past_hackathon", "profile_id", "hackathon_id"),
        junction("profile_project", "profile_id", "project_id"),
        junction("profile_achievement", "profile_id", "achievement_id"),
        junction("hackathon_schedule_event", "hackathon_id", "schedule_event_id"),
        junction("hackathon_theme", "hackathon_id", "theme_id"),
        junction("hackathon_award", "hackathon_id", "award_id"),
        junction("hackathon_resource", "hackathon_id", "resource_link_id"),
        junction("hackathon_competitor", "hackathon_id", "profile_id"),
        junction("hackathon_submission", "hackathon_id", "project_id"),
        junction("project_exercise_resource", "project_exercise_id", "resource_link_id"),
        junction("quiz_exercise_resource", "quiz_exercise_id", "resource_link_id"),
        junction("quiz_exercise_question", "quiz_exercise_id", "quiz_question_id"),
        junction("mini_exercise_resource", "mini_exercise_id", "resource_link_id"),
        junction("research_exercise_resource", "research_exercise_id", "resource_link_id"),
        junction(
            "fix_the_code_exercise_resource",
            "fix_the_code_exercise_id",
            "resource_link_id",
        ),
    ];
    keys.extend(junctions.into_iter().flatten());

    keys.into_iter()
        .map(|(t, c, p)| (t.to_string(), c.to_string(), p.sql_rule()))
        .collect()
}

mod replay {
    use super::*;

    #[tokio::test]
    async fn replay_on_an_empty_database_applies_the_whole_log() {
        let test = TestDb::empty().await;

        let applied = migration::run(&test.db).await.unwrap();

        let all: Vec<_> = MIGRATIONS.iter().map(|m| m.name).collect();
        assert_eq!(applied, all);
        assert_eq!(test.count("schema_migration").await, MIGRATIONS.len() as i64);
    }

    #[tokio::test]
    async fn second_replay_applies_nothing() {
        let test = TestDb::empty().await;
        migration::run(&test.db).await.unwrap();

        let applied = migration::run(&test.db).await.unwrap();

        assert!(applied.is_empty());
        assert_eq!(test.count("schema_migration").await, MIGRATIONS.len() as i64);
    }

    #[tokio::test]
    async fn status_reports_pending_then_applied() {
        let test = TestDb::empty().await;

        let before = migration::status(&test.db).await.unwrap();
        assert_eq!(before.len(), MIGRATIONS.len());
        assert!(before.iter().all(|s| s.applied_at.is_none()));

        migration::run(&test.db).await.unwrap();

        let after = migration::status(&test.db).await.unwrap();
        assert!(after.iter().all(|s| s.applied_at.is_some()));
    }

    #[tokio::test]
    async fn partial_history_replays_only_the_rest() {
        let test = TestDb::empty().await;
        migration::run_log(&test.db, &MIGRATIONS[..2]).await.unwrap();

        let applied = migration::run(&test.db).await.unwrap();

        let rest: Vec<_> = MIGRATIONS[2..].iter().map(|m| m.name).collect();
        assert_eq!(applied, rest);
    }

    #[tokio::test]
    async fn unknown_history_is_rejected() {
        let test = TestDb::spawn().await;
        test.db
            .execute_unprepared(
                "INSERT INTO schema_migration (name, applied_at) VALUES ('9999_rogue', now())",
            )
            .await
            .unwrap();

        let err = migration::run(&test.db).await.unwrap_err();

        assert!(
            matches!(err, MigrationError::UnknownApplied { ref name } if name == "9999_rogue"),
            "{err}"
        );
    }

    #[tokio::test]
    async fn out_of_order_history_is_rejected_without_applying_anything() {
        let test = TestDb::empty().await;
        migration::run_log(&test.db, &MIGRATIONS[..1]).await.unwrap();
        test.db
            .execute_unprepared(&format!(
                "INSERT INTO schema_migration (name, applied_at) VALUES ('{}', now())",
                MIGRATIONS[2].name
            ))
            .await
            .unwrap();

        let err = migration::run(&test.db).await.unwrap_err();

        assert!(matches!(err, MigrationError::OutOfOrder { position: 1, .. }), "{err}");
        assert!(table_columns(&test, "topic").await.is_empty());
    }
}

mod schema {
    use super::*;

    #[tokio::test]
    async fn every_entity_matches_its_table() {
        let test = TestDb::spawn().await;

        assert_columns_match(&test, account::Entity).await;
        assert_columns_match(&test, profile::Entity).await;
        assert_columns_match(&test, project::Entity).await;
        assert_columns_match(&test, hackathon::Entity).await;
        assert_columns_match(&test, achievement::Entity).await;
        assert_columns_match(&test, theme::Entity).await;
        assert_columns_match(&test, resource_link::Entity).await;
        assert_columns_match(&test, award::Entity).await;
        assert_columns_match(&test, schedule_event::Entity).await;
        assert_columns_match(&test, topic::Entity).await;
        assert_columns_match(&test, difficulty_level::Entity).await;
        assert_columns_match(&test, quiz_question::Entity).await;
        assert_columns_match(&test, project_exercise::Entity).await;
        assert_columns_match(&test, quiz_exercise::Entity).await;
        assert_columns_match(&test, mini_exercise::Entity).await;
        assert_columns_match(&test, research_exercise::Entity).await;
        assert_columns_match(&test, fix_the_code_exercise::Entity).await;
        assert_columns_match(&test, completed_research_exercise::Entity).await;
        assert_columns_match(&test, completed_fix_the_code_exercise::Entity).await;

        assert_columns_match(&test, profile_past_hackathon::Entity).await;
        assert_columns_match(&test, profile_project::Entity).await;
        assert_columns_match(&test, profile_achievement::Entity).await;
        assert_columns_match(&test, hackathon_schedule_event::Entity).await;
        assert_columns_match(&test, hackathon_theme::Entity).await;
        assert_columns_match(&test, hackathon_award::Entity).await;
        assert_columns_match(&test, hackathon_resource::Entity).await;
        assert_columns_match(&test, hackathon_competitor::Entity).await;
        assert_columns_match(&test, hackathon_submission::Entity).await;
        assert_columns_match(&test, project_exercise_resource::Entity).await;
        assert_columns_match(&test, quiz_exercise_resource::Entity).await;
        assert_columns_match(&test, quiz_exercise_question::Entity).await;
        assert_columns_match(&test, mini_exercise_resource::Entity).await;
        assert_columns_match(&test, research_exercise_resource::Entity).await;
        assert_columns_match(&test, fix_the_code_exercise_resource::Entity).await;
    }

    #[tokio::test]
    async fn every_column_has_its_type_nullability_and_default() {
        let test = TestDb::spawn().await;

        let rows = ColumnShapeRow::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            "SELECT c.relname::text AS table_name, \
                    a.attname::text AS column_name, \
                    format_type(a.atttypid, a.atttypmod) AS column_type, \
                    a.attnotnull AS not_null, \
                    pg_get_expr(d.adbin, d.adrelid) AS column_default, \
                    a.attidentity::text AS identity \
             FROM pg_attribute a \
             JOIN pg_class c ON c.oid = a.attrelid \
             JOIN pg_namespace n ON n.oid = c.relnamespace \
             LEFT JOIN pg_attrdef d ON d.adrelid = a.attrelid AND d.adnum = a.attnum \
             WHERE n.nspname = 'public' AND c.relkind = 'r' \
               AND a.attnum > 0 AND NOT a.attisdropped \
               AND c.relname <> 'schema_migration'",
        ))
        .all(&test.db)
        .await
        .unwrap();

        let actual: BTreeSet<String> = rows.iter().map(ColumnShapeRow::render).collect();
        let expected = expected_column_shapes();

        let missing: Vec<_> = expected.difference(&actual).collect();
        let unexpected: Vec<_> = actual.difference(&expected).collect();
        assert!(
            missing.is_empty() && unexpected.is_empty(),
            "missing: {missing:#?}\nunexpected: {unexpected:#?}"
        );
    }

    #[tokio::test]
    async fn every_relationship_has_its_delete_policy() {
        let test = TestDb::spawn().await;

        let rows = ForeignKeyRow::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            "SELECT tc.table_name::text AS table_name, \
                    kcu.column_name::text AS column_name, \
                    rc.delete_rule::text AS delete_rule \
             FROM information_schema.referential_constraints rc \
             JOIN information_schema.table_constraints tc \
               ON tc.constraint_name = rc.constraint_name \
              AND tc.constraint_schema = rc.constraint_schema \
             JOIN information_schema.key_column_usage kcu \
               ON kcu.constraint_name = rc.constraint_name \
              AND kcu.constraint_schema = rc.constraint_schema \
             WHERE tc.table_schema = 'public'",
        ))
        .all(&test.db)
        .await
        .unwrap();

        let actual: HashSet<(String, String, String)> = rows
            .into_iter()
            .map(|r| (r.table_name, r.column_name, r.delete_rule))
            .collect();
        let expected: HashSet<(String, String, String)> = expected_foreign_keys()
            .into_iter()
            .map(|(t, c, rule)| (t, c, rule.to_string()))
            .collect();

        assert_eq!(actual, expected);
    }
}
