//! Cache backend implementations.
//!
//! This module provides concrete implementations of the [`Cache`] trait
//! defined in `reminders_core::cache`. The active backend is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `redis` (default): Redis cache over a `deadpool-redis` connection pool
//! - `memory`: In-process LRU cache for local development
//!
//! These features are mutually exclusive. The in-memory cache is also
//! compiled for tests regardless of the selected backend.
//!
//! [`Cache`]: reminders_core::cache::Cache

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p reminders --no-default-features --features sqlite,memory"
);

#[cfg(any(test, feature = "memory"))]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::{RedisCache, RedisPoolSettings};
