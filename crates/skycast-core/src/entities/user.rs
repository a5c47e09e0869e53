//! User entity - a registered account

use chrono::{DateTime, Utc};

/// A registered user account
///
/// The id is assigned by the database (identity column); the password
/// hash lives only in the persistence layer and never crosses into
/// this entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: i64, email: String) -> Self {
        Self {
            id,
            email,
            is_admin: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Check if the account carries the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
