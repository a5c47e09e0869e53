//! Authentication handlers
//!
//! Endpoints for registration, login, token refresh, logout, and the
//! current account. The refresh token travels in an HTTP-only cookie;
//! login and refresh set it, logout clears it.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use skycast_service::{
    dto, AccessTokenResponse, AuthService, LoginRequest, RegisterRequest, TokenInfoResponse,
    UserResponse, UserService,
};

use crate::extractors::{AuthUser, RefreshTokenCookie, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Get the current account
///
/// GET /auth/users/me
pub async fn my_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Echo the verified token claims
///
/// GET /auth/users/tokeninfo
pub async fn token_info(auth: AuthUser) -> ApiResult<Json<TokenInfoResponse>> {
    let response = dto::mappers::token_info(&auth.claims)?;
    Ok(Json(response))
}

/// Login with email and password
///
/// POST /auth/users/tokens
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AccessTokenResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;

    let jar = jar.add(refresh_cookie(&state, response.refresh_token.clone()));
    Ok((jar, Json(response)))
}

/// Rotate the refresh token and mint a new access token
///
/// PUT /auth/users/tokens
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
    RefreshTokenCookie(token): RefreshTokenCookie,
) -> ApiResult<(CookieJar, Json<AccessTokenResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(&token).await?;

    let jar = jar.add(refresh_cookie(&state, response.refresh_token.clone()));
    Ok((jar, Json(response)))
}

/// Logout: expire the refresh token and clear its cookie
///
/// DELETE /auth/users/tokens
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    RefreshTokenCookie(token): RefreshTokenCookie,
) -> ApiResult<(CookieJar, NoContent)> {
    let service = AuthService::new(state.service_context());
    service.logout(&token).await?;

    let jar = jar.remove(removal_cookie(&state));
    Ok((jar, NoContent))
}

/// Build the refresh-token cookie with the configured attributes
fn refresh_cookie(state: &AppState, value: String) -> Cookie<'static> {
    let config = state.cookie_config();
    let mut builder = Cookie::build((config.name.clone(), value))
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site))
        .max_age(time::Duration::seconds(state.refresh_token_expiry()));

    if let Some(domain) = &config.domain {
        builder = builder.domain(domain.clone());
    }

    builder.build()
}

/// Cookie with matching attributes but no value, used for removal
fn removal_cookie(state: &AppState) -> Cookie<'static> {
    let config = state.cookie_config();
    let mut builder = Cookie::build(config.name.clone())
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(parse_same_site(&config.same_site));

    if let Some(domain) = &config.domain {
        builder = builder.domain(domain.clone());
    }

    builder.build()
}

fn parse_same_site(value: &str) -> SameSite {
    match value.to_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "lax" => SameSite::Lax,
        _ => SameSite::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_same_site() {
        assert_eq!(parse_same_site("strict"), SameSite::Strict);
        assert_eq!(parse_same_site("Lax"), SameSite::Lax);
        assert_eq!(parse_same_site("none"), SameSite::None);
        assert_eq!(parse_same_site("anything"), SameSite::None);
    }
}
