use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use reminders_core::reminder::{ErrorBody, ValidationErrors};
use reminders_core::storage::{
    repository_error_to_status_code, write_error_to_status_code, QueryError, RepositoryError,
};

/// Errors returned by the reminder handlers.
///
/// Store failures are tagged by the kind of operation that raised them,
/// since a missing row is a 404 on reads but a 400 on writes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Read(RepositoryError),
    #[error(transparent)]
    Write(RepositoryError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            ApiError::Read(err) => repository_error_to_status_code(err),
            ApiError::Write(err) => write_error_to_status_code(err),
            ApiError::Validation(_) | ApiError::BadRequest(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "API error");
        } else {
            tracing::warn!(status = %status, error = %self, "API error");
        }

        match self {
            ApiError::Validation(errors) => (status, Json(ErrorBody::new(errors))).into_response(),
            other => (status, Json(ErrorBody::new(other.to_string()))).into_response(),
        }
    }
}
