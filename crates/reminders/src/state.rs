//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The reminder repository is always the cache-aside
//! decorator over the selected store; the cache itself is also kept for the
//! readiness probe.

use std::sync::Arc;

use reminders_core::cache::Cache;
use reminders_core::storage::ReminderRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. Both handles point at pools built once
/// at startup and dropped when the last clone goes away.
#[derive(Clone)]
pub struct AppState {
    /// Reminder repository (cached, wraps underlying storage).
    pub reminder_repo: Arc<dyn ReminderRepository>,
    /// Cache backend, used directly only for health checks.
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    fn build(reminder_repo: Arc<dyn ReminderRepository>, cache: Arc<dyn Cache>) -> Self {
        Self {
            reminder_repo,
            cache,
        }
    }
}

#[cfg(feature = "redis")]
fn redis_settings(config: &Config) -> crate::cache::RedisPoolSettings {
    crate::cache::RedisPoolSettings {
        max_size: config.cache_pool_max_size,
        idle_timeout: config.cache_pool_idle_timeout(),
        wait_timeout: config.cache_pool_wait_timeout(),
    }
}

// ============================================================================
// Feature-specific constructors
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::{CachedReminderRepository, SqliteRepository};

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache =
                Arc::new(RedisCache::new(&config.redis_url, redis_settings(config)).await?);

            let cached_repo = Arc::new(CachedReminderRepository::new(
                sqlite_repo,
                redis_cache.clone(),
            ));

            Ok(Self::build(cached_repo, redis_cache))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::{CachedReminderRepository, SqliteRepository};

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let cached_repo = Arc::new(CachedReminderRepository::new(
                sqlite_repo,
                memory_cache.clone(),
            ));

            Ok(Self::build(cached_repo, memory_cache))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::{CachedReminderRepository, InMemoryRepository};

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache =
                Arc::new(RedisCache::new(&config.redis_url, redis_settings(config)).await?);

            let cached_repo = Arc::new(CachedReminderRepository::new(
                inmemory_repo,
                redis_cache.clone(),
            ));

            Ok(Self::build(cached_repo, redis_cache))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::{CachedReminderRepository, InMemoryRepository};

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for local runs without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let cached_repo = Arc::new(CachedReminderRepository::new(
                inmemory_repo,
                memory_cache.clone(),
            ));

            Ok(Self::build(cached_repo, memory_cache))
        }
    }
}
