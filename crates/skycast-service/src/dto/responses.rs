//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Optional
//! fields are omitted when absent, matching the upstream wire format.

use chrono::{DateTime, Utc};
use serde::Serialize;
use skycast_weather::{Clouds, Coordinates, MainTemp, Precipitation, Wind};

// ============================================================================
// Auth Responses
// ============================================================================

/// Public user representation; the internal id is not exposed
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub email: String,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Token pair returned by login and refresh
#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl AccessTokenResponse {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
        }
    }
}

/// Decoded claims echoed back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct TokenInfoResponse {
    pub user_id: i64,
    pub is_admin: bool,
    pub expired_at: String,
}

// ============================================================================
// Weather Responses
// ============================================================================

/// Geocoding matches for a location query
#[derive(Debug, Clone, Serialize)]
pub struct GeocodingResponse {
    pub entries: Vec<skycast_weather::GeocodingEntry>,
    pub count: usize,
}

impl GeocodingResponse {
    pub fn new(entries: Vec<skycast_weather::GeocodingEntry>) -> Self {
        let count = entries.len();
        Self { entries, count }
    }
}

/// Sun times rendered in the location's local offset
#[derive(Debug, Clone, Serialize)]
pub struct SunTimes {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub sunrise: String,
    pub sunset: String,
}

/// Current weather report with timestamps rendered in local time
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub coord: Coordinates,
    pub base: String,
    pub main: MainTemp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<i64>,
    pub wind: Wind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clouds: Option<Clouds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<Precipitation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snow: Option<Precipitation>,
    /// Observation time in the location's local offset
    pub dt: String,
    pub sys: SunTimes,
    pub offset_seconds: i64,
    pub offset_utc: String,
    pub id: i64,
    pub name: String,
    pub cod: i64,
}

/// Weather reports for every resolved geocoding match
#[derive(Debug, Clone, Serialize)]
pub struct WeatherListResponse {
    pub entries: Vec<WeatherReport>,
    pub count: usize,
}

impl WeatherListResponse {
    pub fn new(entries: Vec<WeatherReport>) -> Self {
        let count = entries.len();
        Self { entries, count }
    }
}
