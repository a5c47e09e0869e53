//! Typed records for the upstream geocoding and current-weather endpoints.
//!
//! Timestamps (`dt`, `sys.sunrise`, `sys.sunset`) arrive as unix seconds
//! in UTC; `timezone` is the location's offset from UTC in seconds. The
//! service layer renders them into local-time strings.

use serde::{Deserialize, Serialize};

/// A location query: city plus optional state (US only) and country code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub state: Option<String>,
    pub country: String,
}

impl Location {
    /// Query string fragment for the geocoding endpoint (`city,country`)
    #[must_use]
    pub fn query(&self) -> String {
        format!("{},{}", self.city, self.country)
    }
}

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

/// Localized names attached to a geocoding match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalNames {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

/// A single geocoding match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_names: Option<LocalNames>,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl GeocodingEntry {
    /// Coordinates of this match
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

/// Wind conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deg: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gust: Option<f64>,
}

/// Temperature and pressure block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainTemp {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sea_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grnd_level: Option<i64>,
}

/// Cloud cover percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Clouds {
    pub all: i64,
}

/// Rain or snow volume over the last one and three hours
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h", skip_serializing_if = "Option::is_none", default)]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", skip_serializing_if = "Option::is_none", default)]
    pub three_hour: Option<f64>,
}

/// System block: country and sun times (unix seconds, UTC)
#[derive(Debug, Clone, Deserialize)]
pub struct SysInfo {
    #[serde(rename = "type")]
    pub kind: Option<i64>,
    pub id: Option<i64>,
    pub country: Option<String>,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Current weather at one location, as returned by the upstream API
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub coord: Coordinates,
    pub base: String,
    pub main: MainTemp,
    pub visibility: Option<i64>,
    pub wind: Wind,
    pub clouds: Option<Clouds>,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
    /// Observation time, unix seconds UTC
    pub dt: i64,
    pub sys: SysInfo,
    /// Shift from UTC in seconds
    pub timezone: i64,
    pub id: i64,
    pub name: String,
    pub cod: i64,
}
