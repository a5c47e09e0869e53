//! Refresh token cookie extractor
//!
//! Pulls the opaque refresh token out of the configured HTTP-only cookie.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use skycast_common::AppError;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw refresh token taken from the request cookie
#[derive(Debug, Clone)]
pub struct RefreshTokenCookie(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RefreshTokenCookie
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|err| -> ApiError { match err {} })?;

        let app_state = AppState::from_ref(state);
        let cookie_name = app_state.cookie_config().name.clone();

        let token = jar
            .get(&cookie_name)
            .map(|cookie| cookie.value().to_string())
            .ok_or(ApiError::App(AppError::RefreshTokenRequired))?;

        Ok(RefreshTokenCookie(token))
    }
}
