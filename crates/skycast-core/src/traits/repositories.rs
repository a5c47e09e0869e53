//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{RefreshToken, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Partial update to a user record; only supplied fields change
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_admin: Option<bool>,
}

impl UserChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password_hash.is_none() && self.is_admin.is_none()
    }
}

/// Data required to persist a new refresh token
#[derive(Debug, Clone)]
pub struct NewRefreshToken {
    pub uuid: Uuid,
    pub user_id: i64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user and return the persisted row
    async fn create(&self, email: &str, password_hash: &str, is_admin: bool) -> RepoResult<User>;

    /// Apply a partial update and return the updated row
    async fn update(&self, id: i64, changes: &UserChanges) -> RepoResult<User>;

    /// Delete a user (refresh tokens cascade)
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// List all users
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a newly issued token
    async fn create(&self, token: &NewRefreshToken) -> RepoResult<()>;

    /// Look up a token row by its opaque token string
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>>;

    /// Soft-revoke a token by moving its expiry into the past
    async fn expire(&self, uuid: Uuid) -> RepoResult<()>;
}
