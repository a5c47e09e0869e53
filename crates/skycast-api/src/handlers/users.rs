//! User administration handlers
//!
//! Admin-only CRUD over user accounts.

use axum::{
    extract::{Path, State},
    Json,
};
use skycast_service::{UpdateUserRequest, UserResponse, UserService};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List all users
///
/// GET /auth/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_users().await?;
    Ok(Json(response))
}

/// Partially update a user (email, password, role)
///
/// PATCH /auth/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    let response = service.update_user(user_id, request).await?;
    Ok(Json(response))
}

/// Delete a user
///
/// DELETE /auth/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<String>,
) -> ApiResult<NoContent> {
    let user_id = parse_user_id(&user_id)?;

    let service = UserService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(NoContent)
}

fn parse_user_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| crate::response::ApiError::invalid_path("Invalid user_id format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert!(parse_user_id("forty-two").is_err());
    }
}
