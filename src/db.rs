use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

// duplicate_object / unique_violation raised when two processes race on
// CREATE TABLE IF NOT EXISTS.
const ALREADY_EXISTS_CODES: [&str; 2] = ["42P07", "23505"];

pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;
    info!(max_connections = config.max_connections, "connected to database");
    Ok(db)
}

/// Creates the users table when absent. Safe to run on every start.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    let result = sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         BIGSERIAL PRIMARY KEY,
            name       TEXT NOT NULL CHECK (name <> ''),
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(db)
    .await;

    match result {
        Ok(_) => {}
        Err(sqlx::Error::Database(e))
            if e.code().is_some_and(|c| ALREADY_EXISTS_CODES.contains(&c.as_ref())) => {}
        Err(e) => return Err(e).context("create users table"),
    }
    info!("users table ready");
    Ok(())
}

/// Inserts `name` only when the table holds no users yet.
pub async fn seed_if_empty(db: &PgPool, name: &str) -> anyhow::Result<bool> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO users (name)
        SELECT $1
        WHERE NOT EXISTS (SELECT 1 FROM users)
        "#,
    )
    .bind(name)
    .execute(db)
    .await
    .context("seed users table")?
    .rows_affected()
        > 0;
    if inserted {
        info!(%name, "seeded initial user");
    }
    Ok(inserted)
}
