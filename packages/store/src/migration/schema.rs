//! Builders shared by the migration descriptors.
//!
//! Descriptors name tables and columns with literals instead of going through
//! the entities, so an applied descriptor keeps producing the same SQL after
//! the entities move on.

use common::DeletePolicy;
use common::id::ID_LENGTH;
use sea_orm::sea_query::{
    Alias, ColumnDef, ColumnType, Expr, ForeignKey, ForeignKeyAction, ForeignKeyCreateStatement,
    Index, IndexCreateStatement, StringLen, Table, TableCreateStatement,
};

/// Primary key shape of a referenced table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    /// Auto-incrementing integer.
    Serial,
    /// Generated 8-character string.
    Generated,
}

pub fn serial_id() -> ColumnDef {
    ColumnDef::new(Alias::new("id"))
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

pub fn generated_id() -> ColumnDef {
    ColumnDef::new(Alias::new("id"))
        .string_len(ID_LENGTH as u32)
        .not_null()
        .primary_key()
        .to_owned()
}

pub fn varchar(name: &str, len: u32) -> ColumnDef {
    ColumnDef::new(Alias::new(name))
        .string_len(len)
        .not_null()
        .to_owned()
}

pub fn varchar_null(name: &str, len: u32) -> ColumnDef {
    ColumnDef::new(Alias::new(name))
        .string_len(len)
        .null()
        .to_owned()
}

pub fn text(name: &str) -> ColumnDef {
    ColumnDef::new(Alias::new(name)).text().not_null().to_owned()
}

pub fn integer(name: &str) -> ColumnDef {
    ColumnDef::new(Alias::new(name)).integer().not_null().to_owned()
}

pub fn integer_null(name: &str) -> ColumnDef {
    ColumnDef::new(Alias::new(name)).integer().null().to_owned()
}

pub fn counter(name: &str) -> ColumnDef {
    ColumnDef::new(Alias::new(name))
        .integer()
        .not_null()
        .default(0)
        .to_owned()
}

pub fn timestamp(name: &str) -> ColumnDef {
    ColumnDef::new(Alias::new(name))
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

pub fn date_today(name: &str) -> ColumnDef {
    ColumnDef::new(Alias::new(name))
        .date()
        .not_null()
        .default(Expr::current_date())
        .to_owned()
}

/// A `varchar(len)[]` column.
pub fn varchar_array(name: &str, len: u32, nullable: bool) -> ColumnDef {
    let mut col = ColumnDef::new(Alias::new(name));
    col.array(ColumnType::String(StringLen::N(len)));
    if nullable {
        col.null();
    } else {
        col.not_null();
    }
    col
}

/// Foreign key column pointing at a table whose key has the given shape.
pub fn reference(name: &str, kind: KeyKind, nullable: bool) -> ColumnDef {
    let mut col = ColumnDef::new(Alias::new(name));
    match kind {
        KeyKind::Serial => col.integer(),
        KeyKind::Generated => col.string_len(ID_LENGTH as u32),
    };
    if nullable {
        col.null();
    } else {
        col.not_null();
    }
    col
}

/// `table.column -> target.id` with an explicit delete policy.
pub fn foreign_key(
    table: &str,
    column: &str,
    target: &str,
    policy: DeletePolicy,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(format!("fk_{table}_{column}"))
        .from(Alias::new(table), Alias::new(column))
        .to(Alias::new(target), Alias::new("id"))
        .on_delete(policy.into())
        .on_update(ForeignKeyAction::NoAction)
        .to_owned()
}

/// Junction table for a many-to-many relation.
///
/// The composite primary key makes membership a set; rows go away with
/// either side.
pub fn join_table(
    table: &str,
    (left, left_kind): (&str, KeyKind),
    (right, right_kind): (&str, KeyKind),
) -> TableCreateStatement {
    let left_col = format!("{left}_id");
    let right_col = format!("{right}_id");
    Table::create()
        .table(Alias::new(table))
        .col(reference(&left_col, left_kind, false))
        .col(reference(&right_col, right_kind, false))
        .primary_key(
            Index::create()
                .name(format!("pk_{table}"))
                .col(Alias::new(left_col.as_str()))
                .col(Alias::new(right_col.as_str())),
        )
        .foreign_key(&mut foreign_key(table, &left_col, left, DeletePolicy::Cascade))
        .foreign_key(&mut foreign_key(
            table,
            &right_col,
            right,
            DeletePolicy::Cascade,
        ))
        .to_owned()
}

/// Columns every exercise kind shares. Callers add their own extras.
pub fn exercise_table(table: &str) -> TableCreateStatement {
    Table::create()
        .table(Alias::new(table))
        .col(generated_id())
        .col(varchar("name", 50))
        .col(text("description"))
        .col(varchar_array("prerequisites", 50, true))
        .col(reference("topic_id", KeyKind::Serial, false))
        .col(reference("difficulty_level_id", KeyKind::Serial, false))
        .foreign_key(&mut foreign_key(
            table,
            "topic_id",
            "topic",
            DeletePolicy::Protect,
        ))
        .foreign_key(&mut foreign_key(
            table,
            "difficulty_level_id",
            "difficulty_level",
            DeletePolicy::Protect,
        ))
        .to_owned()
}

/// Plain index over one column.
pub fn index(table: &str, column: &str) -> IndexCreateStatement {
    Index::create()
        .name(format!("idx_{table}_{column}"))
        .table(Alias::new(table))
        .col(Alias::new(column))
        .to_owned()
}
