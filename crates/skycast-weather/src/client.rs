//! HTTP client for the upstream geocoding and current-weather endpoints

use std::time::Duration;

use reqwest::StatusCode;
use skycast_common::WeatherConfig;
use tracing::{debug, instrument};

use crate::error::WeatherError;
use crate::types::{Coordinates, CurrentWeather, GeocodingEntry, Location};

/// Client for the third-party weather/geocoding API (API-key authenticated)
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    /// Create a client with the configured per-call timeout
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Resolve a location name to up to `geocoding_limit` matches
    #[instrument(skip(self), fields(city = %location.city, country = %location.country))]
    pub async fn get_location(&self, location: &Location) -> Result<Vec<GeocodingEntry>, WeatherError> {
        let limit = self.config.geocoding_limit.to_string();
        let response = self
            .http
            .get(&self.config.geocoding_url)
            .query(&[
                ("q", location.query().as_str()),
                ("limit", limit.as_str()),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let entries = response.json::<Vec<GeocodingEntry>>().await?;

        debug!(matches = entries.len(), "Geocoding lookup completed");

        Ok(entries)
    }

    /// Fetch current weather for a coordinate pair
    #[instrument(skip(self), fields(lat = coordinates.lat, lon = coordinates.lon))]
    pub async fn get_weather(&self, coordinates: &Coordinates) -> Result<CurrentWeather, WeatherError> {
        let lat = coordinates.lat.to_string();
        let lon = coordinates.lon.to_string();
        let response = self
            .http
            .get(&self.config.weather_url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("units", self.config.units.as_str()),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json::<CurrentWeather>().await?)
    }

    /// Map upstream non-success statuses: 401 is an auth failure, anything
    /// else carries the upstream body
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, WeatherError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(WeatherError::UpstreamAuth);
        }

        let body = response.text().await.unwrap_or_default();
        Err(WeatherError::UpstreamStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WeatherConfig {
        WeatherConfig {
            api_key: "test-key".to_string(),
            weather_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            geocoding_url: "http://api.openweathermap.org/geo/1.0/direct".to_string(),
            timeout_secs: 5,
            geocoding_limit: 5,
            cache_ttl: 60,
            units: "metric".to_string(),
        }
    }

    #[test]
    fn test_client_builds() {
        assert!(WeatherClient::new(test_config()).is_ok());
    }
}
