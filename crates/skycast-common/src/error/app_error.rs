//! Application error types
//!
//! Unified error handling for the entire application.

use serde::Serialize;
use skycast_core::DomainError;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Authentication required")]
    AuthRequired,

    #[error("Refresh token is required either in the body or cookie")]
    RefreshTokenRequired,

    #[error("Refresh token is not valid")]
    RefreshTokenNotValid,

    // Authorization errors
    #[error("Authorization failed")]
    AuthorizationFailed,

    // Bad request errors
    #[error("Email is already taken")]
    EmailTaken,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Validation errors (field-level, surfaced with detail)
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Requested information not found: {0}")]
    NotFound(String),

    // Upstream errors
    #[error("Remote client authentication issue")]
    RemoteAuthFailed,

    #[error("Remote error, try later: {0}")]
    RemoteError(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Redis errors
    #[error("Cache error: {0}")]
    Cache(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::EmailTaken | Self::InvalidInput(_) | Self::RemoteError(_) => 400,

            // 401 Unauthorized
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::AuthRequired
            | Self::RefreshTokenRequired
            | Self::RefreshTokenNotValid
            | Self::RemoteAuthFailed => 401,

            // 403 Forbidden
            Self::AuthorizationFailed => 403,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 422 Unprocessable Entity
            Self::Validation(_) => 422,

            // 500 Internal Server Error
            Self::Database(_) | Self::Cache(_) | Self::Internal(_) | Self::Config(_) => 500,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_conflict() || e.is_validation() {
                    400
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::AuthRequired => "AUTHENTICATION_REQUIRED",
            Self::RefreshTokenRequired => "REFRESH_TOKEN_REQUIRED",
            Self::RefreshTokenNotValid => "REFRESH_TOKEN_NOT_VALID",
            Self::AuthorizationFailed => "AUTHORIZATION_FAILED",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::RemoteAuthFailed => "REMOTE_AUTH_FAILED",
            Self::RemoteError(_) => "REMOTE_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Single error item inside the response envelope
#[derive(Debug, Serialize)]
pub struct ErrorItem {
    pub error_code: String,
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<serde_json::Value>,
}

/// Error envelope: `{"error": {...}}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorItem,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            error: ErrorItem {
                error_code: err.error_code().to_string(),
                error_message: err.to_string(),
                error_detail: None,
            },
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
