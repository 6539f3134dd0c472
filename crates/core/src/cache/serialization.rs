//! Pure functions for serializing/deserializing reminders to/from cache bytes.
//!
//! Cache values are JSON, so entries stay human-readable when inspected with
//! `redis-cli`.

use thiserror::Error;

use crate::reminder::Reminder;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a reminder to JSON bytes.
pub fn serialize_reminder(reminder: &Reminder) -> Result<Vec<u8>> {
    serde_json::to_vec(reminder).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a reminder.
///
/// Corrupt or foreign cache values fail here; callers treat that as a miss.
pub fn deserialize_reminder(bytes: &[u8]) -> Result<Reminder> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
