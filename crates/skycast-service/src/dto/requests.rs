//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Full password-strength checking happens in the service
//! layer; the validators here catch shape errors early.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Admin partial update of a user; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 128, message = "Password must be 6-128 characters"))]
    pub password: Option<String>,

    pub is_admin: Option<bool>,
}

// ============================================================================
// Weather Queries
// ============================================================================

/// Location lookup query (state is used only for US locations)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LocationQuery {
    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: String,

    pub state: Option<String>,

    #[serde(default = "default_country")]
    #[validate(length(min = 2, max = 2, message = "Country must be a two-letter code"))]
    pub country: String,
}

fn default_country() -> String {
    "RU".to_string()
}

/// Coordinate pair query
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct CoordinatesQuery {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within -90..90"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be within -180..180"))]
    pub lon: f64,
}
