//! Refresh token entity - long-lived opaque credential

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted refresh token
///
/// Revocation is soft: `expires_at` is moved into the past instead of
/// deleting the row, so issued tokens leave an audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub uuid: Uuid,
    pub user_id: i64,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Check if the token is expired
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// A token is valid iff the current time has not passed `expires_at`
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }
}
