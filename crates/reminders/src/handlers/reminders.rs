//! Reminder CRUD handlers.
//!
//! Handlers validate input, call the cached repository held in [`AppState`],
//! and wrap results in the shared response envelopes. Cache behaviour lives
//! entirely in the repository decorator.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use reminders_core::reminder::{
    validate_request, ApiResponse, Deleted, Reminder, ReminderPayload, ReminderRequest,
};
use reminders_core::storage::ListRemindersQuery;

use crate::{handlers::ApiError, state::AppState};

/// Raw query parameters for listing reminders.
///
/// Kept as strings so bad values produce the API's own error messages.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

fn parse_body(
    body: Result<Json<ReminderRequest>, JsonRejection>,
) -> Result<ReminderPayload, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    Ok(validate_request(&request)?)
}

// ============================================================================
// Create Reminder
// ============================================================================

/// Create a new reminder (POST /api/v1/reminders).
pub async fn create_reminder(
    State(state): State<AppState>,
    body: Result<Json<ReminderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Reminder>>), ApiError> {
    let payload = parse_body(body)?;

    let reminder = state
        .reminder_repo
        .create_reminder(&payload)
        .await
        .map_err(ApiError::Write)?;

    tracing::info!(reminder_id = %reminder.id, "Created new reminder");

    Ok((StatusCode::CREATED, Json(ApiResponse::new(reminder))))
}

// ============================================================================
// Get Reminder
// ============================================================================

/// Get a single reminder by ID (GET /api/v1/reminders/{id}).
pub async fn get_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Reminder>>, ApiError> {
    let reminder = state
        .reminder_repo
        .get_reminder(&id)
        .await
        .map_err(ApiError::Read)?;

    Ok(Json(ApiResponse::new(reminder)))
}

// ============================================================================
// List Reminders
// ============================================================================

/// List reminders (GET /api/v1/reminders?status=&limit=&offset=).
pub async fn list_reminders(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Reminder>>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let query = ListRemindersQuery::parse(
        params.status.as_deref(),
        params.limit.as_deref(),
        params.offset.as_deref(),
    )?;

    let page = state
        .reminder_repo
        .list_reminders(&query)
        .await
        .map_err(ApiError::Read)?;

    Ok(Json(ApiResponse::paginated(
        page.items,
        query.pagination(page.total),
    )))
}

// ============================================================================
// Update Reminder
// ============================================================================

/// Replace a reminder's fields (PUT /api/v1/reminders/{id}).
///
/// Completed reminders cannot be updated; that case answers like a missing id.
pub async fn update_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ReminderRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Reminder>>, ApiError> {
    let payload = parse_body(body)?;

    let reminder = state
        .reminder_repo
        .update_reminder(&id, &payload)
        .await
        .map_err(ApiError::Write)?;

    tracing::info!(reminder_id = %id, "Updated reminder");

    Ok(Json(ApiResponse::new(reminder)))
}

// ============================================================================
// Mark Complete
// ============================================================================

/// Mark a reminder complete (PATCH /api/v1/reminders/{id}/status/complete).
pub async fn complete_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Reminder>>, ApiError> {
    let reminder = state
        .reminder_repo
        .mark_complete(&id)
        .await
        .map_err(ApiError::Write)?;

    tracing::info!(reminder_id = %id, "Completed reminder");

    Ok(Json(ApiResponse::new(reminder)))
}

// ============================================================================
// Delete Reminder
// ============================================================================

/// Delete a reminder (DELETE /api/v1/reminders/{id}).
///
/// Succeeds for ids that do not exist.
pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Deleted>>, ApiError> {
    state
        .reminder_repo
        .delete_reminder(&id)
        .await
        .map_err(ApiError::Write)?;

    tracing::info!(reminder_id = %id, "Deleted reminder");

    Ok(Json(ApiResponse::new(Deleted::default())))
}
