//! Redis and pool error mapping to CacheError.

use deadpool_redis::{CreatePoolError, PoolError};
use reminders_core::cache::CacheError;

/// Maps Redis errors to CacheError.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    if err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped() {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}

/// Maps connection checkout failures to CacheError.
pub fn map_pool_error(err: PoolError) -> CacheError {
    match err {
        PoolError::Backend(redis_err) => map_redis_error(redis_err),
        other => CacheError::ConnectionFailed(other.to_string()),
    }
}

/// Maps pool construction failures (bad URL or config) to CacheError.
pub fn map_create_pool_error(err: CreatePoolError) -> CacheError {
    CacheError::ConnectionFailed(err.to_string())
}
