//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `reminders_core::storage`. The active backend is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: Non-persistent storage backed by a `HashMap`
//!
//! These features are mutually exclusive. The in-memory backend is also
//! compiled for tests regardless of the selected backend.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p reminders
//! ```
//!
//! Build fully in-process:
//! ```bash
//! cargo build -p reminders --no-default-features --features inmemory,memory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p reminders --no-default-features --features inmemory,redis"
);

pub mod cached;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use cached::CachedReminderRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
