//! The migration log.
//!
//! An append-only chain of descriptors, each naming the one before it.
//! [`run`] replays whatever suffix of the chain the database has not seen
//! yet, one transaction per descriptor. A history that does not match the
//! log is fatal: nothing is applied.

mod m0001_initial;
mod m0002_exercises;
mod m0003_research_exercises;
mod m0004_fix_the_code_exercises;
mod m0005_foreign_key_indexes;
pub mod record;
pub mod schema;

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::sea_query::{IndexCreateStatement, PostgresQueryBuilder, TableCreateStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::MigrationError;

/// The log, oldest first. Only ever append to this.
pub const MIGRATIONS: &[Migration] = &[
    m0001_initial::MIGRATION,
    m0002_exercises::MIGRATION,
    m0003_research_exercises::MIGRATION,
    m0004_fix_the_code_exercises::MIGRATION,
    m0005_foreign_key_indexes::MIGRATION,
];

/// One schema-change descriptor.
#[derive(Clone, Copy, Debug)]
pub struct Migration {
    pub name: &'static str,
    /// The descriptor this one builds on. `None` only for the first.
    pub depends_on: Option<&'static str>,
    pub operations: fn() -> Vec<Operation>,
}

impl Migration {
    /// Postgres DDL for this descriptor, in execution order.
    pub fn statements(&self) -> Vec<String> {
        (self.operations)().iter().map(Operation::to_sql).collect()
    }
}

#[derive(Clone, Debug)]
pub enum Operation {
    CreateTable(TableCreateStatement),
    CreateIndex(IndexCreateStatement),
}

impl Operation {
    pub fn to_sql(&self) -> String {
        match self {
            Self::CreateTable(stmt) => stmt.to_string(PostgresQueryBuilder),
            Self::CreateIndex(stmt) => stmt.to_string(PostgresQueryBuilder),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MigrationStatus {
    pub name: &'static str,
    /// `None` while pending.
    pub applied_at: Option<DateTime<Utc>>,
}

/// Check that `log` is a single linear chain with unique names.
pub fn validate_log(log: &[Migration]) -> Result<(), MigrationError> {
    let mut seen = HashSet::new();
    let mut previous = None;
    for migration in log {
        if !seen.insert(migration.name) {
            return Err(MigrationError::DuplicateName {
                name: migration.name,
            });
        }
        if migration.depends_on != previous {
            return Err(MigrationError::BrokenChain {
                name: migration.name,
                expected: previous,
                found: migration.depends_on,
            });
        }
        previous = Some(migration.name);
    }
    Ok(())
}

/// Work out which descriptors still have to run.
///
/// `applied` must be a prefix of `log`, in order.
pub fn plan<'a>(
    log: &'a [Migration],
    applied: &[String],
) -> Result<&'a [Migration], MigrationError> {
    validate_log(log)?;

    for (position, name) in applied.iter().enumerate() {
        match log.get(position) {
            Some(expected) if expected.name == name => {}
            Some(expected) if log.iter().any(|m| m.name == name) => {
                return Err(MigrationError::OutOfOrder {
                    position,
                    expected: expected.name,
                    found: name.clone(),
                });
            }
            _ => {
                return Err(MigrationError::UnknownApplied { name: name.clone() });
            }
        }
    }

    Ok(&log[applied.len()..])
}

/// Replay [`MIGRATIONS`]. Returns the names applied by this call.
pub async fn run(db: &DatabaseConnection) -> Result<Vec<&'static str>, MigrationError> {
    run_log(db, MIGRATIONS).await
}

/// Replay an arbitrary log. Returns the names applied by this call.
pub async fn run_log(
    db: &DatabaseConnection,
    log: &[Migration],
) -> Result<Vec<&'static str>, MigrationError> {
    record::ensure_table(db).await?;
    let applied = record::applied_names(db).await?;
    let pending = plan(log, &applied)?;

    if pending.is_empty() {
        info!(applied = applied.len(), "Schema is up to date");
        return Ok(Vec::new());
    }

    let mut newly_applied = Vec::with_capacity(pending.len());
    for migration in pending {
        apply(db, migration).await?;
        newly_applied.push(migration.name);
    }

    info!(count = newly_applied.len(), "Applied migrations");
    Ok(newly_applied)
}

async fn apply(db: &DatabaseConnection, migration: &Migration) -> Result<(), MigrationError> {
    let failed = |source| MigrationError::Failed {
        name: migration.name,
        source,
    };

    info!(migration = migration.name, "Applying migration");

    let txn = db.begin().await.map_err(failed)?;
    for sql in migration.statements() {
        debug!(migration = migration.name, %sql, "Executing");
        txn.execute_unprepared(&sql).await.map_err(failed)?;
    }
    record::insert(&txn, migration.name)
        .await
        .map_err(failed)?;
    txn.commit().await.map_err(failed)?;

    Ok(())
}

/// Applied/pending state of every descriptor in [`MIGRATIONS`].
pub async fn status(db: &DatabaseConnection) -> Result<Vec<MigrationStatus>, MigrationError> {
    record::ensure_table(db).await?;
    let applied: HashMap<String, DateTime<Utc>> = record::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|r| (r.name, r.applied_at))
        .collect();

    Ok(MIGRATIONS
        .iter()
        .map(|m| MigrationStatus {
            name: m.name,
            applied_at: applied.get(m.name).copied(),
        })
        .collect())
}
