//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use reminders_core::reminder::{Reminder, ReminderPayload};
use reminders_core::storage::{
    ListRemindersQuery, Page, ReminderRepository, RepositoryError, Result,
};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    reminders: Arc<RwLock<HashMap<String, Reminder>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a reminder that may still be mutated.
    fn mutable<'a>(
        reminders: &'a mut HashMap<String, Reminder>,
        id: &str,
    ) -> Result<&'a mut Reminder> {
        reminders
            .get_mut(id)
            .filter(|r| !r.status.is_terminal())
            .ok_or_else(|| RepositoryError::reminder_not_found(id))
    }
}

#[async_trait]
impl ReminderRepository for InMemoryRepository {
    async fn create_reminder(&self, payload: &ReminderPayload) -> Result<Reminder> {
        let reminder = Reminder::from_payload(payload, Utc::now());
        let mut reminders = self.reminders.write().await;
        if reminders.contains_key(&reminder.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Reminder",
                id: reminder.id,
            });
        }
        reminders.insert(reminder.id.clone(), reminder.clone());
        Ok(reminder)
    }

    async fn get_reminder(&self, id: &str) -> Result<Reminder> {
        let reminders = self.reminders.read().await;
        reminders
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::reminder_not_found(id))
    }

    async fn list_reminders(&self, query: &ListRemindersQuery) -> Result<Page<Reminder>> {
        let reminders = self.reminders.read().await;
        let mut matching: Vec<&Reminder> = reminders
            .values()
            .filter(|r| query.status.is_none_or(|status| r.status == status))
            .collect();
        matching.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, total))
    }

    async fn update_reminder(&self, id: &str, payload: &ReminderPayload) -> Result<Reminder> {
        let mut reminders = self.reminders.write().await;
        let reminder = Self::mutable(&mut reminders, id)?;
        reminder.apply_payload(payload, Utc::now());
        Ok(reminder.clone())
    }

    async fn mark_complete(&self, id: &str) -> Result<Reminder> {
        let mut reminders = self.reminders.write().await;
        let reminder = Self::mutable(&mut reminders, id)?;
        reminder.mark_complete(Utc::now());
        Ok(reminder.clone())
    }

    async fn delete_reminder(&self, id: &str) -> Result<()> {
        let mut reminders = self.reminders.write().await;
        reminders.remove(id);
        Ok(())
    }
}
