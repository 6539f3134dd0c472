//! Redis cache backend implementation.
//!
//! Provides a shared cache over a bounded `deadpool-redis` connection pool
//! for multi-instance deployments.

mod cache;
mod error;

pub use cache::{RedisCache, RedisPoolSettings};
