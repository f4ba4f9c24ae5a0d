pub mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

#[cfg(test)]
pub(crate) mod memory;

use crate::state::AppState;
use axum::Router;

pub use repo::{PgUserStore, UserStore};

pub fn router() -> Router<AppState> {
    handlers::users_routes()
}
