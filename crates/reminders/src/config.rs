use std::{env, str::FromStr, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "reminders.db")
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Maximum pooled cache connections (default: 10)
    pub cache_pool_max_size: usize,
    /// Idle connections older than this are pruned (default: 240)
    pub cache_pool_idle_timeout_seconds: u64,
    /// How long to wait for a pooled connection; `None` waits indefinitely
    pub cache_pool_wait_timeout_ms: Option<u64>,
    /// Maximum number of in-memory cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Drain period for in-flight requests on shutdown (default: 5)
    pub shutdown_grace_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "reminders.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `CACHE_POOL_MAX_SIZE` - Cache connection pool size (default: 10)
    /// - `CACHE_POOL_IDLE_TIMEOUT_SECONDS` - Idle connection lifetime (default: 240)
    /// - `CACHE_POOL_WAIT_TIMEOUT_MS` - Pool checkout timeout (default: unset)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 10,000)
    /// - `REQUEST_TIMEOUT_SECONDS` - Per-request timeout (default: 10)
    /// - `SHUTDOWN_GRACE_SECONDS` - Shutdown drain period (default: 5)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "reminders.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            cache_pool_max_size: parse_var("CACHE_POOL_MAX_SIZE").unwrap_or(10),
            cache_pool_idle_timeout_seconds: parse_var("CACHE_POOL_IDLE_TIMEOUT_SECONDS")
                .unwrap_or(240),
            cache_pool_wait_timeout_ms: parse_var("CACHE_POOL_WAIT_TIMEOUT_MS"),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES").unwrap_or(10_000),
            request_timeout_seconds: parse_var("REQUEST_TIMEOUT_SECONDS").unwrap_or(10),
            shutdown_grace_seconds: parse_var("SHUTDOWN_GRACE_SECONDS").unwrap_or(5),
        }
    }

    /// Get the cache pool idle timeout as a Duration.
    #[allow(dead_code)]
    pub fn cache_pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.cache_pool_idle_timeout_seconds)
    }

    /// Get the cache pool wait timeout as a Duration, if bounded.
    #[allow(dead_code)]
    pub fn cache_pool_wait_timeout(&self) -> Option<Duration> {
        self.cache_pool_wait_timeout_ms.map(Duration::from_millis)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Get the shutdown grace period as a Duration.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Reads and parses an environment variable; unset or unparsable is `None`.
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
