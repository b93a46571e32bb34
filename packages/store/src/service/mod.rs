//! CRUD helpers shared by the collaborators that read and write the schema.
//!
//! Every write classifies database errors into [`StoreError`]: unique
//! violations become `Conflict`, dangling foreign keys `MissingReference`,
//! and deletes blocked by a protected reference `Protected`.

pub mod exercise;
pub mod hackathon;
pub mod profile;
pub mod project;

use common::generate_id;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Fresh identifiers drawn before an insert gives up with `Conflict`.
pub const MAX_ID_ATTEMPTS: usize = 5;

/// Insert a row whose primary key comes from [`generate_id`].
///
/// Each attempt runs in its own savepoint; a collision rolls it back and
/// retries with a newly drawn identifier.
pub async fn insert_with_generated_id<C, A, F>(
    db: &C,
    mut build: F,
) -> Result<<A::Entity as EntityTrait>::Model, StoreError>
where
    C: TransactionTrait,
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    F: FnMut(String) -> A,
{
    let table = A::Entity::default().table_name().to_owned();

    for attempt in 1..=MAX_ID_ATTEMPTS {
        let id = generate_id();
        let savepoint = db.begin().await?;
        match build(id.clone()).insert(&savepoint).await {
            Ok(model) => {
                savepoint.commit().await?;
                return Ok(model);
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                savepoint.rollback().await?;
                warn!(%table, %id, attempt, "Generated id already taken, drawing another");
            }
            Err(err) => return Err(StoreError::on_write(err, table)),
        }
    }

    Err(StoreError::Conflict {
        entity: table,
        detail: format!("no free identifier after {MAX_ID_ATTEMPTS} attempts"),
    })
}

/// Add a junction row. Returns `false` when the pair was already linked.
pub async fn link<C, A>(db: &C, row: A) -> Result<bool, StoreError>
where
    C: ConnectionTrait,
    A: ActiveModelTrait + Send,
{
    let table = A::Entity::default().table_name().to_owned();
    let result = A::Entity::insert(row)
        .on_conflict(OnConflict::new().do_nothing().to_owned())
        .exec_without_returning(db)
        .await;

    match result {
        Ok(rows) if rows > 0 => Ok(true),
        Ok(_) | Err(DbErr::RecordNotInserted) => {
            debug!(%table, "Pair already linked");
            Ok(false)
        }
        Err(err) => Err(StoreError::on_write(err, table)),
    }
}

/// Remove a junction row by its composite key. Returns `false` when absent.
pub async fn unlink<C, E>(
    db: &C,
    entity: E,
    key: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
) -> Result<bool, StoreError>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let result = E::delete_by_id(key)
        .exec(db)
        .await
        .map_err(|e| StoreError::on_delete(e, entity.table_name()))?;
    Ok(result.rows_affected > 0)
}

pub async fn find<C, E>(
    db: &C,
    entity: E,
    id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
) -> Result<E::Model, StoreError>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| StoreError::not_found(entity.table_name()))
}

/// Delete one row by primary key.
///
/// Dependents behind a cascade relationship go with it; a protected
/// dependent rejects the whole delete with [`StoreError::Protected`].
pub async fn delete<C, E>(
    db: &C,
    entity: E,
    id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
) -> Result<(), StoreError>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let table = entity.table_name();
    let result = E::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| StoreError::on_delete(e, table))?;

    if result.rows_affected == 0 {
        return Err(StoreError::not_found(table));
    }
    debug!(%table, "Row deleted");
    Ok(())
}
