//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! Reads and writes map some variants differently: a write that matched no
//! row (including one blocked by the status guard) is a bad request, while a
//! read of a missing row is a 404.

use super::RepositoryError;

/// Maps a [`RepositoryError`] raised by a read to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `InvalidArgument` -> 400 (Bad Request)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use reminders_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::reminder_not_found("abc-123");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::InvalidArgument(_) => 400,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::InvalidData(_) => 400,
    }
}

/// Maps a [`RepositoryError`] raised by a write to an HTTP status code.
///
/// - `NotFound` -> 400 (no row, or the reminder is already complete)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - everything else -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use reminders_core::storage::{RepositoryError, write_error_to_status_code};
///
/// let error = RepositoryError::reminder_not_found("abc-123");
/// assert_eq!(write_error_to_status_code(&error), 400);
/// ```
pub fn write_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::NotFound { .. }
        | RepositoryError::InvalidArgument(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_)
        | RepositoryError::InvalidData(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404_on_read() {
        let error = RepositoryError::reminder_not_found("r-123");
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_not_found_maps_to_400_on_write() {
        let error = RepositoryError::reminder_not_found("r-123");
        assert_eq!(write_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_already_exists_maps_to_409() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Reminder",
            id: "r-456".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 409);
        assert_eq!(write_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_invalid_argument_maps_to_400() {
        let error = RepositoryError::InvalidArgument("bad status".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
        assert_eq!(write_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("database is locked".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
        assert_eq!(write_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_failed_depends_on_operation() {
        let error = RepositoryError::QueryFailed("invalid query syntax".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
        assert_eq!(write_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_serialization_depends_on_operation() {
        let error = RepositoryError::Serialization("bad timestamp".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
        assert_eq!(write_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_invalid_data_maps_to_400() {
        let error = RepositoryError::InvalidData("latitude out of range".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
        assert_eq!(write_error_to_status_code(&error), 400);
    }
}
