//! Weather proxy service
//!
//! Wraps the upstream client: geocoding lookups, weather by coordinates,
//! and the per-match concurrent fan-out for weather by name.

use futures::future::join_all;
use skycast_common::AppError;
use skycast_weather::{Coordinates, Location, WeatherError};
use tracing::{instrument, warn};

use crate::dto::mappers::weather_report;
use crate::dto::{
    CoordinatesQuery, GeocodingResponse, LocationQuery, WeatherListResponse, WeatherReport,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Weather proxy service
pub struct WeatherService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WeatherService<'a> {
    /// Create a new WeatherService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a location name to geocoding matches
    #[instrument(skip(self), fields(city = %query.city))]
    pub async fn get_location(&self, query: LocationQuery) -> ServiceResult<GeocodingResponse> {
        let entries = self
            .ctx
            .weather_client()
            .get_location(&location_from(query))
            .await
            .map_err(map_weather_error)?;

        Ok(GeocodingResponse::new(entries))
    }

    /// Current weather for a coordinate pair
    #[instrument(skip(self), fields(lat = query.lat, lon = query.lon))]
    pub async fn get_weather(&self, query: CoordinatesQuery) -> ServiceResult<WeatherReport> {
        let weather = self
            .ctx
            .weather_client()
            .get_weather(&Coordinates {
                lat: query.lat,
                lon: query.lon,
            })
            .await
            .map_err(map_weather_error)?;

        Ok(weather_report(weather))
    }

    /// Resolve a location to its geocoding matches and fetch weather for
    /// each match concurrently
    ///
    /// Results keep the geocoding order. Individual upstream failures are
    /// logged and skipped rather than aborting the whole aggregation;
    /// zero obtainable results is a not-found error.
    #[instrument(skip(self), fields(city = %query.city))]
    pub async fn get_weather_by_name(
        &self,
        query: LocationQuery,
    ) -> ServiceResult<WeatherListResponse> {
        let client = self.ctx.weather_client();

        let entries = client
            .get_location(&location_from(query))
            .await
            .map_err(map_weather_error)?;

        let lookups = entries.iter().map(|entry| {
            let coordinates = entry.coordinates();
            async move { client.get_weather(&coordinates).await }
        });
        let results = join_all(lookups).await;

        let mut reports = Vec::with_capacity(results.len());
        for (entry, result) in entries.iter().zip(results) {
            match result {
                Ok(weather) => reports.push(weather_report(weather)),
                Err(e) => {
                    warn!(
                        lat = entry.lat,
                        lon = entry.lon,
                        error = %e,
                        "Weather lookup failed for geocoding match"
                    );
                }
            }
        }

        if reports.is_empty() {
            return Err(ServiceError::App(AppError::NotFound(
                "Remote server doesn't provide any results".to_string(),
            )));
        }

        Ok(WeatherListResponse::new(reports))
    }
}

fn location_from(query: LocationQuery) -> Location {
    Location {
        city: query.city,
        state: query.state,
        country: query.country,
    }
}

/// Translate upstream failures into the boundary taxonomy: auth failures
/// surface as 401, anything else as a remote error
fn map_weather_error(err: WeatherError) -> ServiceError {
    match err {
        WeatherError::UpstreamAuth => ServiceError::App(AppError::RemoteAuthFailed),
        WeatherError::UpstreamStatus { body, .. } => ServiceError::App(AppError::RemoteError(body)),
        WeatherError::Request(e) => ServiceError::App(AppError::RemoteError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_upstream_auth_error() {
        let err = map_weather_error(WeatherError::UpstreamAuth);
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "REMOTE_AUTH_FAILED");
    }

    #[test]
    fn test_map_upstream_status_error() {
        let err = map_weather_error(WeatherError::UpstreamStatus {
            status: 502,
            body: "bad gateway".to_string(),
        });
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "REMOTE_ERROR");
    }
}
