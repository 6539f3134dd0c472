use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a reminder.
///
/// `Complete` is terminal: no operation moves a reminder out of it, and
/// status-guarded writes refuse to touch completed rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    #[default]
    Incomplete,
    Complete,
}

impl ReminderStatus {
    /// Returns the stored/wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderStatus::Incomplete => "incomplete",
            ReminderStatus::Complete => "complete",
        }
    }

    /// Returns true if no further mutation is allowed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReminderStatus::Complete)
    }
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("status can either be incomplete or complete")]
pub struct UnknownStatus(pub String);

impl FromStr for ReminderStatus {
    type Err = UnknownStatus;

    /// Parses a status, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "incomplete" => Ok(ReminderStatus::Incomplete),
            "complete" => Ok(ReminderStatus::Complete),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// A time and location stamped reminder, as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub message: String,
    pub time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub status: ReminderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reminder {
    /// Builds a fresh `incomplete` reminder from a validated payload.
    ///
    /// Assigns a new identifier and stamps both timestamps with `now`.
    pub fn from_payload(payload: &ReminderPayload, now: DateTime<Utc>) -> Self {
        Self {
            id: new_reminder_id(),
            message: payload.message.clone(),
            time: payload.time,
            latitude: payload.latitude,
            longitude: payload.longitude,
            status: ReminderStatus::Incomplete,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the mutable fields with the payload and bumps `updated_at`.
    pub fn apply_payload(&mut self, payload: &ReminderPayload, now: DateTime<Utc>) {
        self.message = payload.message.clone();
        self.time = payload.time;
        self.latitude = payload.latitude;
        self.longitude = payload.longitude;
        self.updated_at = now;
    }

    /// Moves the reminder to `complete` and bumps `updated_at`.
    pub fn mark_complete(&mut self, now: DateTime<Utc>) {
        self.status = ReminderStatus::Complete;
        self.updated_at = now;
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the status (useful for testing).
    pub fn with_status(mut self, status: ReminderStatus) -> Self {
        self.status = status;
        self
    }
}

/// The validated, mutable subset of a reminder accepted from clients.
///
/// Never carries an identifier or a status; those are owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderPayload {
    pub message: String,
    pub time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

impl ReminderPayload {
    pub fn new(
        message: impl Into<String>,
        time: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            message: message.into(),
            time,
            latitude,
            longitude,
        }
    }
}

/// Generates a new opaque reminder identifier.
pub fn new_reminder_id() -> String {
    Uuid::new_v4().to_string()
}
