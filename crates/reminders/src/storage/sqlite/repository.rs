//! SQLite repository implementation.
//!
//! Implements [`ReminderRepository`] from `reminders_core::storage` using SQLite.
//! All statements run on the single connection thread owned by
//! `tokio_rusqlite::Connection`, so they are serialised.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use reminders_core::reminder::{Reminder, ReminderPayload};
use reminders_core::storage::{
    ListRemindersQuery, Page, ReminderRepository, RepositoryError, Result,
};

use super::conversions::{format_datetime, row_to_reminder};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based reminder repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::info!(path, "SQLite store opened");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[allow(dead_code)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ReminderRepository for SqliteRepository {
    async fn create_reminder(&self, payload: &ReminderPayload) -> Result<Reminder> {
        let reminder = Reminder::from_payload(payload, Utc::now());
        let id = reminder.id.clone();
        let message = reminder.message.clone();
        let time = format_datetime(&reminder.time);
        let latitude = reminder.latitude;
        let longitude = reminder.longitude;
        let status = reminder.status.as_str();
        let created_at = format_datetime(&reminder.created_at);
        let updated_at = format_datetime(&reminder.updated_at);

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_REMINDER,
                    rusqlite::params![
                        id, message, time, latitude, longitude, status, created_at, updated_at
                    ],
                    row_to_reminder,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, &reminder.id))
    }

    async fn get_reminder(&self, id: &str) -> Result<Reminder> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_REMINDER_BY_ID)
                    .map_err(wrap_err)?;
                stmt.query_row([&id_str], row_to_reminder)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id))
    }

    async fn list_reminders(&self, query: &ListRemindersQuery) -> Result<Page<Reminder>> {
        let status = query.status.map(|s| s.as_str());
        let limit = query.limit;
        let offset = query.offset;

        self.conn
            .call(move |conn| {
                let total: i64 = conn
                    .query_row(schema::COUNT_REMINDERS, [status], |row| row.get(0))
                    .map_err(wrap_err)?;

                let mut stmt = conn
                    .prepare(schema::SELECT_REMINDERS_PAGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![status, limit, offset], row_to_reminder)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(Page::new(items, total.max(0) as u64))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ""))
    }

    async fn update_reminder(&self, id: &str, payload: &ReminderPayload) -> Result<Reminder> {
        let id_str = id.to_string();
        let message = payload.message.clone();
        let time = format_datetime(&payload.time);
        let latitude = payload.latitude;
        let longitude = payload.longitude;
        let updated_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::UPDATE_REMINDER,
                    rusqlite::params![id_str, message, time, latitude, longitude, updated_at],
                    row_to_reminder,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id))
    }

    async fn mark_complete(&self, id: &str) -> Result<Reminder> {
        let id_str = id.to_string();
        let updated_at = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::MARK_REMINDER_COMPLETE,
                    rusqlite::params![id_str, updated_at],
                    row_to_reminder,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id))
    }

    async fn delete_reminder(&self, id: &str) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                // Zero affected rows is still a successful delete.
                conn.execute(schema::DELETE_REMINDER, [&id_str])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, id))
    }
}
