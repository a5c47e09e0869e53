//! Weather proxy handlers
//!
//! Each route is wrapped by the response cache: a prior hit (keyed by
//! endpoint name + query string) short-circuits the upstream call; a miss
//! runs the lookup and stores the serialized body in a spawned task
//! without blocking the response. Cache read failures count as a miss.

use std::future::Future;

use axum::{
    extract::{RawQuery, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use skycast_cache::ResponseCache;
use skycast_service::{CoordinatesQuery, LocationQuery, WeatherService};
use tracing::warn;

use crate::extractors::{AuthUser, ValidatedQuery};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Resolve a location name to geocoding matches
///
/// GET /weather-service/geocoding
pub async fn geocoding(
    State(state): State<AppState>,
    _auth: AuthUser,
    RawQuery(raw_query): RawQuery,
    ValidatedQuery(query): ValidatedQuery<LocationQuery>,
) -> ApiResult<Response> {
    let ctx = state.service_context().clone();
    cached_json(&state, "geocoding", raw_query, move || async move {
        let service = WeatherService::new(&ctx);
        Ok(service.get_location(query).await?)
    })
    .await
}

/// Current weather for a coordinate pair
///
/// GET /weather-service/location
pub async fn weather_by_coordinates(
    State(state): State<AppState>,
    _auth: AuthUser,
    RawQuery(raw_query): RawQuery,
    ValidatedQuery(query): ValidatedQuery<CoordinatesQuery>,
) -> ApiResult<Response> {
    let ctx = state.service_context().clone();
    cached_json(&state, "location", raw_query, move || async move {
        let service = WeatherService::new(&ctx);
        Ok(service.get_weather(query).await?)
    })
    .await
}

/// Weather for every geocoding match of a location name
///
/// GET /weather-service/weather
pub async fn weather_by_name(
    State(state): State<AppState>,
    _auth: AuthUser,
    RawQuery(raw_query): RawQuery,
    ValidatedQuery(query): ValidatedQuery<LocationQuery>,
) -> ApiResult<Response> {
    let ctx = state.service_context().clone();
    cached_json(&state, "weather", raw_query, move || async move {
        let service = WeatherService::new(&ctx);
        Ok(service.get_weather_by_name(query).await?)
    })
    .await
}

/// Read-through cache wrapper around a JSON-producing handler body
async fn cached_json<T, F, Fut>(
    state: &AppState,
    endpoint: &str,
    raw_query: Option<String>,
    produce: F,
) -> ApiResult<Response>
where
    T: Serialize,
    F: FnOnce() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    let cache = state.service_context().response_cache();
    let key = ResponseCache::key(endpoint, raw_query.as_deref().unwrap_or(""));

    match cache.get(&key).await {
        Ok(Some(body)) => return Ok(json_body(body)),
        Ok(None) => {}
        // A cache failure must not take the route down; treat it as a miss
        Err(e) => warn!(key = %key, error = %e, "Response cache read failed"),
    }

    let value = produce().await?;
    let body = serde_json::to_vec(&value).map_err(ApiError::internal)?;

    let cache = cache.clone();
    let body_for_cache = body.clone();
    tokio::spawn(async move {
        if let Err(e) = cache.store(&key, &body_for_cache).await {
            warn!(key = %key, error = %e, "Response cache write failed");
        }
    });

    Ok(json_body(body))
}

/// Serve stored bytes back verbatim as JSON
fn json_body(body: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
