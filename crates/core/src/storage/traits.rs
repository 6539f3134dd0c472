use async_trait::async_trait;

use crate::reminder::{Reminder, ReminderPayload};

use super::{ListRemindersQuery, Page, Result};

/// Repository for reminder operations.
///
/// Implementations own identifier and timestamp assignment. Writes that
/// target a missing or already `complete` reminder fail with
/// [`RepositoryError::NotFound`](super::RepositoryError::NotFound).
#[async_trait]
pub trait ReminderRepository: Send + Sync {
    /// Inserts a new `incomplete` reminder and returns it.
    async fn create_reminder(&self, payload: &ReminderPayload) -> Result<Reminder>;

    /// Gets a reminder by its ID.
    async fn get_reminder(&self, id: &str) -> Result<Reminder>;

    /// Lists reminders matching the query, with the total match count.
    async fn list_reminders(&self, query: &ListRemindersQuery) -> Result<Page<Reminder>>;

    /// Replaces the mutable fields of a reminder that is not yet complete.
    async fn update_reminder(&self, id: &str, payload: &ReminderPayload) -> Result<Reminder>;

    /// Transitions a reminder to `complete`.
    async fn mark_complete(&self, id: &str) -> Result<Reminder>;

    /// Deletes a reminder by its ID. Deleting a missing reminder succeeds.
    async fn delete_reminder(&self, id: &str) -> Result<()>;
}
