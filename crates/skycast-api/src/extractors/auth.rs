//! Authentication extractors
//!
//! Extract and validate JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use skycast_common::{AppError, Claims};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a bearer JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token subject
    pub user_id: i64,
    /// Admin flag from the verified claims
    pub is_admin: bool,
    /// Full verified claims
    pub claims: Claims,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A protected route without a bearer token is an auth-required
        // failure, not a malformed request
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::AuthRequired))?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .decode_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::App(e)
        })?;

        Ok(AuthUser {
            user_id,
            is_admin: claims.is_admin,
            claims,
        })
    }
}

/// Authenticated admin user
///
/// Wraps `AuthUser` and additionally requires the `is_admin` claim,
/// rejecting with an authorization failure otherwise.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin {
            tracing::warn!(user_id = user.user_id, "Admin route denied");
            return Err(ApiError::App(AppError::AuthorizationFailed));
        }

        Ok(AdminUser(user))
    }
}
