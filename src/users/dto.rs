use serde::Deserialize;

use crate::error::ApiError;

/// Raw body of `POST /api/utenti`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserInput {
    pub name: String,
}

impl TryFrom<CreateUserRequest> for CreateUserInput {
    type Error = ApiError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        match req.name {
            Some(name) if !name.is_empty() => Ok(Self { name }),
            _ => Err(ApiError::BadRequest("name is required".into())),
        }
    }
}

/// Parses the `:id` path segment of `DELETE /api/utenti/:id`.
pub fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("invalid user id: {raw}")))
}
