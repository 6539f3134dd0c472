use thiserror::Error;

/// Errors raised by a reminder cache backend.
///
/// Never surfaced to clients: the cached repository logs and absorbs them,
/// then falls back to the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The backend could not be reached or no pooled connection was free.
    #[error("reminder cache unreachable: {0}")]
    ConnectionFailed(String),
    /// The backend answered with an error.
    #[error("reminder cache command rejected: {0}")]
    OperationFailed(String),
    #[error("reminder cache entry could not be encoded: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
