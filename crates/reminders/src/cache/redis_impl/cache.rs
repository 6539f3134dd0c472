//! Redis cache implementation.
//!
//! Every operation checks a connection out of a bounded pool and returns it
//! when the guard drops, on success and error paths alike. Connections that
//! have sat idle longer than the configured timeout are pruned before each
//! checkout so a long-quiet process never reuses a connection the server has
//! already closed.

use std::time::Duration;

use async_trait::async_trait;
use deadpool_redis::{Config, Connection, Pool, PoolConfig, Runtime};
use redis::AsyncCommands;

use reminders_core::cache::{Cache, Result};

use super::error::{map_create_pool_error, map_pool_error, map_redis_error};

/// Sizing and lifetime settings for the Redis connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedisPoolSettings {
    /// Maximum number of open connections.
    pub max_size: usize,
    /// Idle connections older than this are discarded before checkout.
    pub idle_timeout: Duration,
    /// How long to wait for a free connection; `None` waits indefinitely.
    pub wait_timeout: Option<Duration>,
}

impl Default for RedisPoolSettings {
    fn default() -> Self {
        Self {
            max_size: 10,
            idle_timeout: Duration::from_secs(240),
            wait_timeout: None,
        }
    }
}

/// Redis cache backend using a `deadpool-redis` connection pool.
///
/// Values are stored with plain `SET`, without expiration.
pub struct RedisCache {
    pool: Pool,
    idle_timeout: Duration,
}

impl RedisCache {
    /// Creates a new Redis cache and verifies the server is reachable.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    /// * `settings` - Pool sizing and timeouts
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the pool cannot be built or
    /// the initial `PING` fails.
    pub async fn new(url: &str, settings: RedisPoolSettings) -> Result<Self> {
        let mut pool_config = PoolConfig::new(settings.max_size);
        pool_config.timeouts.wait = settings.wait_timeout;

        let mut config = Config::from_url(url);
        config.pool = Some(pool_config);

        let pool = config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(map_create_pool_error)?;

        let cache = Self {
            pool,
            idle_timeout: settings.idle_timeout,
        };
        cache.ping().await?;

        tracing::info!(
            max_size = settings.max_size,
            idle_timeout_secs = settings.idle_timeout.as_secs(),
            "Redis cache connected"
        );

        Ok(cache)
    }

    /// Prunes stale idle connections, then checks one out.
    async fn connection(&self) -> Result<Connection> {
        let idle_timeout = self.idle_timeout;
        let pruned = self
            .pool
            .retain(|_, metrics| metrics.last_used() < idle_timeout)
            .removed
            .len();
        if pruned > 0 {
            tracing::trace!(pruned, "Pruned idle Redis connections");
        }

        self.pool.get().await.map_err(map_pool_error)
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(map_redis_error)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key).await.map_err(map_redis_error)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }
}
