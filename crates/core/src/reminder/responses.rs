//! Response envelopes shared by every reminder endpoint.

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub total: u64,
}

/// Success envelope: `{"data": ..., "pagination": ...}`.
///
/// `pagination` is only present on list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            pagination: None,
        }
    }

    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Self {
            data,
            pagination: Some(pagination),
        }
    }
}

/// Error envelope: `{"error": ...}`.
///
/// `E` is a plain message for most failures and a field-keyed map for
/// validation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody<E = String> {
    pub error: E,
}

impl<E> ErrorBody<E> {
    pub fn new(error: E) -> Self {
        Self { error }
    }
}

/// Data returned by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub success: bool,
}

impl Default for Deleted {
    fn default() -> Self {
        Self { success: true }
    }
}
