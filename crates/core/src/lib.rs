//! Functional core for the reminders service.
//!
//! Pure domain types and functions with no I/O: the reminder model and its
//! validation, cache key derivation and serialization, the cache and
//! repository traits implemented by the server crate, and the error
//! taxonomy with its HTTP status mapping.

pub mod cache;
pub mod reminder;
pub mod serde;
pub mod storage;
