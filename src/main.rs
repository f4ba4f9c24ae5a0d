use std::sync::Arc;

use anyhow::Context;

mod app;
mod config;
mod db;
mod error;
mod state;
mod users;

use crate::{config::AppConfig, state::AppState, users::PgUserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "utenti_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr()?;

    let db = db::connect(&config).await?;
    // Nothing is served until the table exists.
    db::ensure_schema(&db)
        .await
        .context("schema initialization failed; refusing to start")?;
    if let Some(name) = config.seed_user_name.as_deref() {
        db::seed_if_empty(&db, name).await?;
    }

    let state = AppState::new(Arc::new(PgUserStore::new(db.clone())));
    let served = app::serve(app::build_app(state), addr).await;

    db.close().await;
    tracing::info!("database pool closed, exiting");
    served
}
