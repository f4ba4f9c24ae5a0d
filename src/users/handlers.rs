use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderName, StatusCode},
    routing::{delete, get},
    Json, Router,
};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{parse_user_id, CreateUserInput, CreateUserRequest},
        repo_types::User,
    },
};

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/api/utenti", get(list_users).post(create_user))
        .route("/api/utenti/:id", delete(delete_user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await.map_err(|e| {
        error!(error = %e, op = "list_users", "store failure");
        ApiError::Internal(e)
    })?;
    Ok(Json(users))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<User>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "rejected create_user body");
        ApiError::from(rejection)
    })?;
    let input = CreateUserInput::try_from(body)?;

    let user = state.users.create(&input.name).await.map_err(|e| {
        error!(error = %e, op = "create_user", name = %input.name, "store failure");
        ApiError::Internal(e)
    })?;

    info!(user_id = user.id, name = %user.name, "user created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/utenti/{}", user.id))],
        Json(user),
    ))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_user_id(&raw_id)?;

    let outcome = state.users.delete(id).await.map_err(|e| {
        error!(error = %e, op = "delete_user", user_id = id, "store failure");
        ApiError::Internal(e)
    })?;
    debug!(user_id = id, deleted = outcome.is_deleted(), "delete_user outcome");

    match outcome.record() {
        Some(user) => {
            info!(user_id = user.id, name = %user.name, "user deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::NotFound("User not found".into())),
    }
}
