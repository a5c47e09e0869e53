//! # skycast-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    generate_opaque_token, hash_password, validate_password_strength, verify_password, Claims,
    JwtService,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CookieConfig, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, RateLimitConfig, RedisConfig, RefreshTokenConfig, ServerConfig, WeatherConfig,
};
pub use error::{AppError, AppResult, ErrorItem, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
