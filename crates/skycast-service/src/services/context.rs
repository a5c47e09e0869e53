//! Service context - dependency container for services
//!
//! Holds the repositories, cache stores, upstream client, and other
//! dependencies needed by services.

use std::sync::Arc;

use skycast_cache::{ResponseCache, SharedRedisPool};
use skycast_common::auth::JwtService;
use skycast_common::RefreshTokenConfig;
use skycast_core::traits::{RefreshTokenRepository, UserRepository};
use skycast_db::PgPool;
use skycast_weather::WeatherClient;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    refresh_token_repo: Arc<dyn RefreshTokenRepository>,

    // Cache stores
    response_cache: ResponseCache,

    // Upstream client
    weather_client: WeatherClient,

    // Services
    jwt_service: Arc<JwtService>,

    // Settings
    refresh_token_config: RefreshTokenConfig,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the refresh token repository
    pub fn refresh_token_repo(&self) -> &dyn RefreshTokenRepository {
        self.refresh_token_repo.as_ref()
    }

    /// Get the weather response cache
    pub fn response_cache(&self) -> &ResponseCache {
        &self.response_cache
    }

    /// Get the upstream weather client
    pub fn weather_client(&self) -> &WeatherClient {
        &self.weather_client
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get refresh token settings (expiry, cookie attributes)
    pub fn refresh_token_config(&self) -> &RefreshTokenConfig {
        &self.refresh_token_config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    response_cache: Option<ResponseCache>,
    weather_client: Option<WeatherClient>,
    jwt_service: Option<Arc<JwtService>>,
    refresh_token_config: Option<RefreshTokenConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            user_repo: None,
            refresh_token_repo: None,
            response_cache: None,
            weather_client: None,
            jwt_service: None,
            refresh_token_config: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn response_cache(mut self, cache: ResponseCache) -> Self {
        self.response_cache = Some(cache);
        self
    }

    pub fn weather_client(mut self, client: WeatherClient) -> Self {
        self.weather_client = Some(client);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn refresh_token_config(mut self, config: RefreshTokenConfig) -> Self {
        self.refresh_token_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            pool: self
                .pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            redis_pool: self
                .redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            refresh_token_repo: self
                .refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            response_cache: self
                .response_cache
                .ok_or_else(|| ServiceError::validation("response_cache is required"))?,
            weather_client: self
                .weather_client
                .ok_or_else(|| ServiceError::validation("weather_client is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            refresh_token_config: self
                .refresh_token_config
                .ok_or_else(|| ServiceError::validation("refresh_token_config is required"))?,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
