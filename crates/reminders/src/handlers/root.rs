//! Welcome message for the service root.

use axum::Json;
use serde_json::{json, Value};

/// Handler for GET / and GET /api/v1
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to A-Reminder-APP API" }))
}
