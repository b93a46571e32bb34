//! Bookkeeping of applied migrations. The runner creates this table itself.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{ColumnDef, PostgresQueryBuilder, Table};
use sea_orm::{QueryOrder, QuerySelect, Set};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schema_migration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub applied_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

pub(super) async fn ensure_table<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let stmt = Table::create()
        .table(Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Column::Name)
                .string_len(255)
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(Column::AppliedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_string(PostgresQueryBuilder);

    db.execute_unprepared(&stmt).await?;
    Ok(())
}

/// Names of applied migrations, in the order they were applied.
pub(super) async fn applied_names<C: ConnectionTrait>(db: &C) -> Result<Vec<String>, DbErr> {
    Entity::find()
        .order_by_asc(Column::Id)
        .select_only()
        .column(Column::Name)
        .into_tuple()
        .all(db)
        .await
}

pub(super) async fn insert<C: ConnectionTrait>(db: &C, name: &str) -> Result<(), DbErr> {
    ActiveModel {
        name: Set(name.to_string()),
        applied_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}
