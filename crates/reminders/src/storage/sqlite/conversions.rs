//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

use reminders_core::reminder::{Reminder, ReminderStatus};

/// Convert a SQLite row to a Reminder.
///
/// Expected columns: id, message, time, latitude, longitude, status, created_at, updated_at
pub fn row_to_reminder(row: &Row) -> rusqlite::Result<Reminder> {
    let id: String = row.get(0)?;
    let message: String = row.get(1)?;
    let time: String = row.get(2)?;
    let latitude: f64 = row.get(3)?;
    let longitude: f64 = row.get(4)?;
    let status: String = row.get(5)?;
    let created_at: String = row.get(6)?;
    let updated_at: String = row.get(7)?;

    Ok(Reminder {
        id,
        message,
        time: parse_datetime(2, &time)?,
        latitude,
        longitude,
        status: parse_status(5, &status)?,
        created_at: parse_datetime(6, &created_at)?,
        updated_at: parse_datetime(7, &updated_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

/// Parse a ReminderStatus from its stored form.
fn parse_status(column: usize, s: &str) -> rusqlite::Result<ReminderStatus> {
    s.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Format a DateTime for SQLite storage.
///
/// Fixed-width RFC 3339 (microseconds, `Z` suffix) so text ordering matches
/// chronological ordering.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
