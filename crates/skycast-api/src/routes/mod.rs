//! Route definitions
//!
//! Auth routes follow the original service paths under /auth; the weather
//! proxy lives under /weather-service.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, health, users, weather};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(auth_routes()).merge(weather_routes())
}

/// Health check routes (exported separately to bypass the middleware stack)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication and user administration routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        // Registration and account
        .route("/auth/users", post(auth::register))
        .route("/auth/users/me", get(auth::my_account))
        .route("/auth/users/tokeninfo", get(auth::token_info))
        // Token lifecycle: login, rotate, logout
        .route("/auth/users/tokens", post(auth::login))
        .route("/auth/users/tokens", put(auth::refresh_token))
        .route("/auth/users/tokens", delete(auth::logout))
        // Admin user CRUD
        .route("/auth/users", get(users::list_users))
        .route("/auth/users/:user_id", patch(users::update_user))
        .route("/auth/users/:user_id", delete(users::delete_user))
}

/// Weather proxy routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/weather-service/geocoding", get(weather::geocoding))
        .route("/weather-service/location", get(weather::weather_by_coordinates))
        .route("/weather-service/weather", get(weather::weather_by_name))
}
