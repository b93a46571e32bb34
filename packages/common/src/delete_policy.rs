#[cfg(feature = "sea-orm")]
use sea_orm::sea_query::ForeignKeyAction;

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens to a referencing row when the row it points at is deleted.
///
/// Every relationship in the schema names one of these explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Reject the delete while dependents exist.
    Protect,
    /// Delete dependents together with the referenced row.
    Cascade,
}

impl DeletePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Protect => "protect",
            Self::Cascade => "cascade",
        }
    }

    /// The `delete_rule` Postgres reports in `information_schema.referential_constraints`.
    pub fn sql_rule(&self) -> &'static str {
        match self {
            Self::Protect => "RESTRICT",
            Self::Cascade => "CASCADE",
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "sea-orm")]
impl From<DeletePolicy> for ForeignKeyAction {
    fn from(policy: DeletePolicy) -> Self {
        match policy {
            DeletePolicy::Protect => ForeignKeyAction::Restrict,
            DeletePolicy::Cascade => ForeignKeyAction::Cascade,
        }
    }
}
