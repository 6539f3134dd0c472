//! Cached repository decorators.
//!
//! The decorator implements the cache-aside pattern over any
//! [`ReminderRepository`](reminders_core::storage::ReminderRepository):
//!
//! - **Reads**: Check cache first, on miss fetch from repository and populate cache
//! - **Writes**: Persist to repository, then refresh the cache entry
//! - **Deletes**: Invalidate the cache entry, then delete from the repository
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::new("reminders.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let cached_repo = CachedReminderRepository::new(repo, cache);
//! ```

mod reminder;

pub use reminder::CachedReminderRepository;
