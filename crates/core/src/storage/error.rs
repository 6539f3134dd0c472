use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No row matched, or a status guard blocked the write.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    /// Caller-supplied query arguments were rejected before store access.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// A stored value violated a constraint or could not be decoded.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a missing reminder.
    pub fn reminder_not_found(id: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            entity_type: "Reminder",
            id: id.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::reminder_not_found("abc-123");
        assert_eq!(error.to_string(), "Reminder not found: abc-123");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Reminder",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Reminder already exists: abc-123");
    }

    #[test]
    fn test_repository_error_invalid_argument_display() {
        let error = RepositoryError::InvalidArgument("limit must be positive".to_string());
        assert_eq!(error.to_string(), "Invalid argument: limit must be positive");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("CHECK constraint failed".to_string());
        assert_eq!(error.to_string(), "Invalid data: CHECK constraint failed");
    }
}
