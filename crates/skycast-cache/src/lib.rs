//! # skycast-cache
//!
//! Redis caching layer for memoized upstream responses.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Response Cache**: TTL-bound storage of serialized response bodies,
//!   keyed by endpoint name + query string

pub mod pool;
pub mod response;

// Re-export pool types
pub use pool::{create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool};

// Re-export cache types
pub use response::ResponseCache;
