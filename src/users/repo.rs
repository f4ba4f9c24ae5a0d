use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::repo_types::{DeleteOutcome, User};

/// Storage seam for the users collection.
///
/// Every method runs exactly one statement; implementations must not hold a
/// connection between calls.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, most recently created first.
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    async fn create(&self, name: &str) -> anyhow::Result<User>;
    async fn delete(&self, id: i64) -> anyhow::Result<DeleteOutcome>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, created_at
            FROM users
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn create(&self, name: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<DeleteOutcome> {
        let removed = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, name, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(match removed {
            Some(user) => DeleteOutcome::Deleted(user),
            None => DeleteOutcome::NotFound,
        })
    }
}
