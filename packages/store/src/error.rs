use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced to collaborators performing CRUD against the schema.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{entity} not found")]
    NotFound { entity: String },

    /// A unique constraint rejected the write (identifier, URL extension,
    /// username, email, ...).
    #[error("Conflict on {entity}: {detail}")]
    Conflict { entity: String, detail: String },

    /// A protect-on-delete relationship rejected the delete.
    #[error("{entity} is still referenced by other records: {detail}")]
    Protected { entity: String, detail: String },

    /// A foreign key points at a row that does not exist.
    #[error("{entity} references a missing record: {detail}")]
    MissingReference { entity: String, detail: String },

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    /// Classify an error raised by an insert or update of `entity`.
    pub fn on_write(err: DbErr, entity: impl Into<String>) -> Self {
        let entity = entity.into();
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Conflict { entity, detail },
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::MissingReference { entity, detail }
            }
            _ => Self::Database(err),
        }
    }

    /// Classify an error raised by a delete of `entity`.
    pub fn on_delete(err: DbErr, entity: impl Into<String>) -> Self {
        let entity = entity.into();
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::debug!(%entity, "Delete rejected by protected reference");
                Self::Protected { entity, detail }
            }
            _ => Self::Database(err),
        }
    }

    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Protected { .. })
    }
}

/// Fatal errors while validating or replaying the migration log.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Migration '{name}' appears more than once in the log")]
    DuplicateName { name: &'static str },

    #[error(
        "Migration '{name}' depends on {found:?}, but the previous migration in the log is {expected:?}"
    )]
    BrokenChain {
        name: &'static str,
        expected: Option<&'static str>,
        found: Option<&'static str>,
    },

    #[error("Database records migration '{name}', which is not in the log")]
    UnknownApplied { name: String },

    #[error("Migration history out of order at position {position}: expected '{expected}', found '{found}'")]
    OutOfOrder {
        position: usize,
        expected: &'static str,
        found: String,
    },

    #[error("Migration '{name}' failed: {source}")]
    Failed {
        name: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("Migration bookkeeping failed: {0}")]
    Database(#[from] DbErr),
}
