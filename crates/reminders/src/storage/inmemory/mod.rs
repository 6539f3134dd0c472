//! In-memory storage backend.
//!
//! Stores reminders in a `HashMap` behind `Arc<RwLock<_>>`. Useful for tests
//! and for running the service without a database file.
//!
//! # Example
//!
//! ```rust,ignore
//! use reminders::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let reminder = repo.create_reminder(&payload).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
