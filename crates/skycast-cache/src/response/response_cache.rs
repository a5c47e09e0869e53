//! Response cache for the weather proxy.
//!
//! Memoizes serialized response bodies keyed by endpoint name and query
//! string, with a fixed TTL. Values are opaque bytes; the HTTP layer
//! serves them back verbatim as `application/json`.

use crate::pool::{RedisPool, RedisResult};

/// Key prefix for cached weather responses
const RESPONSE_CACHE_PREFIX: &str = "weather:";

/// Default TTL for cached responses (60 seconds)
const DEFAULT_RESPONSE_TTL: u64 = 60;

/// TTL-bound cache of serialized responses
#[derive(Clone)]
pub struct ResponseCache {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl ResponseCache {
    /// Create a new response cache with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_RESPONSE_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Cache key for an endpoint + query string pair
    #[must_use]
    pub fn key(endpoint: &str, query: &str) -> String {
        format!("{RESPONSE_CACHE_PREFIX}{endpoint}:{query}")
    }

    /// TTL applied to stored entries, in seconds
    #[must_use]
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Look up a previously stored response body
    pub async fn get(&self, key: &str) -> RedisResult<Option<Vec<u8>>> {
        self.pool.get_bytes(key).await
    }

    /// Store a response body under the given key
    pub async fn store(&self, key: &str, body: &[u8]) -> RedisResult<()> {
        self.pool.set_bytes(key, body, self.ttl_seconds).await?;

        tracing::debug!(key = %key, bytes = body.len(), "Stored cached response");

        Ok(())
    }

    /// Remove a cached response
    pub async fn invalidate(&self, key: &str) -> RedisResult<bool> {
        self.pool.delete(key).await
    }
}
