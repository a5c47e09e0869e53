//! Application configuration structs
//!
//! Loads configuration from environment variables and an optional .env file.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub refresh_token: RefreshTokenConfig,
    pub weather: WeatherConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_jwt_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
}

/// Refresh token and cookie configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenConfig {
    /// Token lifetime in seconds (21 days by default)
    #[serde(default = "default_refresh_token_expiry")]
    pub expiry: i64,
    /// Entropy of the opaque token in bytes (hex doubles the length)
    #[serde(default = "default_refresh_token_bytes")]
    pub token_bytes: usize,
    pub cookie: CookieConfig,
}

/// Refresh token cookie attributes
#[derive(Debug, Clone, Deserialize)]
pub struct CookieConfig {
    #[serde(default = "default_cookie_name")]
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default = "default_true")]
    pub secure: bool,
    #[serde(default = "default_same_site")]
    pub same_site: String,
    #[serde(default = "default_true")]
    pub http_only: bool,
}

/// Upstream weather API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub api_key: String,
    #[serde(default = "default_weather_url")]
    pub weather_url: String,
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Per-call network timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
    /// Maximum number of geocoding matches to resolve
    #[serde(default = "default_geocoding_limit")]
    pub geocoding_limit: u32,
    /// Response cache TTL in seconds
    #[serde(default = "default_weather_cache_ttl")]
    pub cache_ttl: u64,
    #[serde(default = "default_units")]
    pub units: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "skycast".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_token_expiry() -> i64 {
    300 // 5 minutes
}

fn default_refresh_token_expiry() -> i64 {
    60 * 60 * 24 * 21 // 21 days
}

fn default_refresh_token_bytes() -> usize {
    32
}

fn default_cookie_name() -> String {
    "refreshToken".to_string()
}

fn default_true() -> bool {
    true
}

fn default_same_site() -> String {
    "none".to_string()
}

fn default_weather_url() -> String {
    "https://api.openweathermap.org/data/2.5/weather".to_string()
}

fn default_geocoding_url() -> String {
    "http://api.openweathermap.org/geo/1.0/direct".to_string()
}

fn default_weather_timeout() -> u64 {
    5
}

fn default_geocoding_limit() -> u32 {
    5
}

fn default_weather_cache_ttl() -> u64 {
    60
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_port),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env_parse("DATABASE_MAX_CONNECTIONS", default_max_connections),
                min_connections: env_parse("DATABASE_MIN_CONNECTIONS", default_min_connections),
            },
            redis: RedisConfig {
                url: env::var("REDIS_URL").map_err(|_| ConfigError::MissingVar("REDIS_URL"))?,
                max_connections: env_parse("REDIS_MAX_CONNECTIONS", default_redis_max_connections),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                algorithm: env::var("JWT_ALG").unwrap_or_else(|_| default_jwt_algorithm()),
                access_token_expiry: env_parse("JWT_ACCESS_TOKEN_EXPIRY", default_access_token_expiry),
            },
            refresh_token: RefreshTokenConfig {
                expiry: env_parse("REFRESH_TOKEN_EXPIRY", default_refresh_token_expiry),
                token_bytes: env_parse("REFRESH_TOKEN_BYTES", default_refresh_token_bytes),
                cookie: CookieConfig {
                    name: env::var("REFRESH_TOKEN_COOKIE_NAME")
                        .unwrap_or_else(|_| default_cookie_name()),
                    domain: env::var("COOKIE_DOMAIN").ok(),
                    secure: env_parse("SECURE_COOKIES", default_true),
                    same_site: env::var("SAMESITE_COOKIES").unwrap_or_else(|_| default_same_site()),
                    http_only: env_parse("HTTPONLY_COOKIES", default_true),
                },
            },
            weather: WeatherConfig {
                api_key: env::var("WEATHER_SERVICE_APIKEY")
                    .map_err(|_| ConfigError::MissingVar("WEATHER_SERVICE_APIKEY"))?,
                weather_url: env::var("WEATHER_API_URL").unwrap_or_else(|_| default_weather_url()),
                geocoding_url: env::var("GEOCODING_API_URL")
                    .unwrap_or_else(|_| default_geocoding_url()),
                timeout_secs: env_parse("WEATHER_TIMEOUT_SECS", default_weather_timeout),
                geocoding_limit: env_parse("GEOCODING_LIMIT", default_geocoding_limit),
                cache_ttl: env_parse("WEATHER_CACHE_TTL", default_weather_cache_ttl),
                units: env::var("WEATHER_UNITS").unwrap_or_else(|_| default_units()),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env_parse(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                ),
                burst: env_parse("RATE_LIMIT_BURST", default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Parse an optional env var, falling back to the supplied default
fn env_parse<T: std::str::FromStr>(var: &str, default: fn() -> T) -> T {
    env::var(var)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(default)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
