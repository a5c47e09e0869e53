//! Authentication service
//!
//! Handles user registration, login, refresh-token rotation, and logout.

use chrono::{Duration, Utc};
use skycast_common::auth::{
    generate_opaque_token, hash_password, validate_password_strength, verify_password,
};
use skycast_common::AppError;
use skycast_core::entities::{RefreshToken, User};
use skycast_core::traits::NewRefreshToken;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AccessTokenResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        // Validate password strength before touching the database
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::App(AppError::EmailTaken));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .create(&request.email, &password_hash, false)
            .await?;

        info!(user_id = user.id, "User registered successfully");

        Ok(UserResponse::from(&user))
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password produce the same error so callers
    /// cannot probe which addresses are registered.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AccessTokenResponse> {
        let user = self.authenticate_user(&request.email, &request.password).await?;
        self.issue_tokens(&user).await
    }

    /// Verify credentials and return the user
    async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        Ok(user)
    }

    /// Mint an access token plus a fresh refresh token for a user
    pub async fn issue_tokens(&self, user: &User) -> ServiceResult<AccessTokenResponse> {
        let access_token = self
            .ctx
            .jwt_service()
            .create_access_token(user)
            .map_err(ServiceError::from)?;

        let refresh_token = self.create_refresh_token(user.id).await?;

        info!(user_id = user.id, "Issued token pair");

        Ok(AccessTokenResponse::new(access_token, refresh_token))
    }

    /// Generate and persist an opaque refresh token, returning the raw value
    ///
    /// The raw token is never re-derivable from storage once this call
    /// returns.
    #[instrument(skip(self))]
    pub async fn create_refresh_token(&self, user_id: i64) -> ServiceResult<String> {
        let config = self.ctx.refresh_token_config();
        let token = generate_opaque_token(config.token_bytes);

        let record = NewRefreshToken {
            uuid: Uuid::new_v4(),
            user_id,
            token: token.clone(),
            expires_at: Utc::now() + Duration::seconds(config.expiry),
        };
        self.ctx.refresh_token_repo().create(&record).await?;

        Ok(token)
    }

    /// Validate a raw refresh token and load its owning user
    ///
    /// Missing rows report that a token is required; expired tokens and
    /// orphaned users report an invalid token.
    #[instrument(skip(self, token))]
    pub async fn validate_refresh_token(&self, token: &str) -> ServiceResult<(RefreshToken, User)> {
        let record = self
            .ctx
            .refresh_token_repo()
            .find_by_token(token)
            .await?
            .ok_or(ServiceError::App(AppError::RefreshTokenRequired))?;

        if !record.is_valid() {
            return Err(ServiceError::App(AppError::RefreshTokenNotValid));
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(record.user_id)
            .await?
            .ok_or(ServiceError::App(AppError::RefreshTokenNotValid))?;

        Ok((record, user))
    }

    /// Rotate a refresh token: issue a new pair and expire the old token
    ///
    /// The old token is expired in place (not deleted), so a rotated token
    /// is never accepted again while the row remains for auditing.
    #[instrument(skip(self, token))]
    pub async fn refresh(&self, token: &str) -> ServiceResult<AccessTokenResponse> {
        let (old_token, user) = self.validate_refresh_token(token).await?;

        let response = self.issue_tokens(&user).await?;

        self.ctx.refresh_token_repo().expire(old_token.uuid).await?;

        info!(user_id = user.id, "Tokens rotated");

        Ok(response)
    }

    /// Logout by expiring the presented refresh token
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> ServiceResult<()> {
        let (record, user) = self.validate_refresh_token(token).await?;

        self.ctx.refresh_token_repo().expire(record.uuid).await?;

        info!(user_id = user.id, "User logged out");

        Ok(())
    }
}
