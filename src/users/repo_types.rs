use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,      // assigned by the store
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime, // assigned at insertion
}

/// Result of a delete-by-id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row existed; carries its former values.
    Deleted(User),
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }

    pub fn record(&self) -> Option<&User> {
        match self {
            DeleteOutcome::Deleted(user) => Some(user),
            DeleteOutcome::NotFound => None,
        }
    }
}
