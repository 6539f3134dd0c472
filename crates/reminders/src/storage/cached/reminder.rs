//! Cached reminder repository decorator.
//!
//! Wraps a `ReminderRepository` implementation with the cache-aside pattern.

use std::sync::Arc;

use async_trait::async_trait;

use reminders_core::cache::{deserialize_reminder, reminder_key, serialize_reminder, Cache};
use reminders_core::reminder::{Reminder, ReminderPayload};
use reminders_core::storage::{ListRemindersQuery, Page, ReminderRepository, Result};

/// Cached reminder repository decorator.
///
/// - **Reads**: Check cache first, on miss fetch from repository and populate cache
/// - **Writes**: Persist to repository, then write the fresh entity to the cache
/// - **Deletes**: Invalidate the cache entry, then delete from the repository
/// - **Lists**: Always served by the repository
///
/// Cache failures are logged and never returned. Concurrent writers to the
/// same reminder may leave the cache holding the older of two writes until
/// the next write or delete for that id.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedReminderRepository<R, C>
where
    R: ReminderRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> CachedReminderRepository<R, C>
where
    R: ReminderRepository,
    C: Cache,
{
    /// Creates a new cached reminder repository.
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }

    /// Writes the reminder to the cache, logging any failure.
    async fn refresh_cache(&self, reminder: &Reminder) {
        let bytes = match serialize_reminder(reminder) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(reminder_id = %reminder.id, error = %err, "Failed to serialize reminder for cache");
                return;
            }
        };

        if let Err(err) = self.cache.set(&reminder_key(&reminder.id), &bytes).await {
            tracing::warn!(reminder_id = %reminder.id, error = %err, "Failed to cache reminder");
        }
    }
}

#[async_trait]
impl<R, C> ReminderRepository for CachedReminderRepository<R, C>
where
    R: ReminderRepository + 'static,
    C: Cache + 'static,
{
    async fn create_reminder(&self, payload: &ReminderPayload) -> Result<Reminder> {
        let reminder = self.repository.create_reminder(payload).await?;
        self.refresh_cache(&reminder).await;

        tracing::debug!(reminder_id = %reminder.id, "Reminder created");
        Ok(reminder)
    }

    async fn get_reminder(&self, id: &str) -> Result<Reminder> {
        let cache_key = reminder_key(id);

        // Check cache first
        match self.cache.get(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_reminder(&bytes) {
                Ok(reminder) => {
                    tracing::trace!(reminder_id = %id, "Cache hit for reminder");
                    return Ok(reminder);
                }
                // Deserialization failed - treat as cache miss
                Err(err) => {
                    tracing::warn!(reminder_id = %id, error = %err, "Cache entry deserialization failed");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(reminder_id = %id, error = %err, "Cache read failed, falling back to store");
            }
        }

        // Cache miss - fetch from repository
        tracing::trace!(reminder_id = %id, "Cache miss for reminder");
        let reminder = self.repository.get_reminder(id).await?;
        self.refresh_cache(&reminder).await;

        Ok(reminder)
    }

    async fn list_reminders(&self, query: &ListRemindersQuery) -> Result<Page<Reminder>> {
        self.repository.list_reminders(query).await
    }

    async fn update_reminder(&self, id: &str, payload: &ReminderPayload) -> Result<Reminder> {
        let reminder = self.repository.update_reminder(id, payload).await?;
        self.refresh_cache(&reminder).await;

        tracing::debug!(reminder_id = %id, "Reminder updated");
        Ok(reminder)
    }

    async fn mark_complete(&self, id: &str) -> Result<Reminder> {
        let reminder = self.repository.mark_complete(id).await?;
        self.refresh_cache(&reminder).await;

        tracing::debug!(reminder_id = %id, "Reminder marked complete");
        Ok(reminder)
    }

    async fn delete_reminder(&self, id: &str) -> Result<()> {
        // 1. Invalidate first so a stale entry cannot outlive the row
        if let Err(err) = self.cache.delete(&reminder_key(id)).await {
            tracing::warn!(reminder_id = %id, error = %err, "Failed to invalidate reminder cache");
        }

        // 2. Delete from storage
        self.repository.delete_reminder(id).await?;

        tracing::debug!(reminder_id = %id, "Reminder deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{TimeZone, Utc};

    use reminders_core::cache::{CacheError, Result as CacheResult};
    use reminders_core::reminder::ReminderStatus;
    use reminders_core::storage::RepositoryError;

    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    // Repository wrapper that counts calls
    struct CountingRepository {
        inner: InMemoryRepository,
        get_calls: AtomicUsize,
        list_calls: AtomicUsize,
    }

    impl CountingRepository {
        fn new() -> Self {
            Self {
                inner: InMemoryRepository::new(),
                get_calls: AtomicUsize::new(0),
                list_calls: AtomicUsize::new(0),
            }
        }

        fn get_calls(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReminderRepository for CountingRepository {
        async fn create_reminder(&self, payload: &ReminderPayload) -> Result<Reminder> {
            self.inner.create_reminder(payload).await
        }

        async fn get_reminder(&self, id: &str) -> Result<Reminder> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_reminder(id).await
        }

        async fn list_reminders(&self, query: &ListRemindersQuery) -> Result<Page<Reminder>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list_reminders(query).await
        }

        async fn update_reminder(&self, id: &str, payload: &ReminderPayload) -> Result<Reminder> {
            self.inner.update_reminder(id, payload).await
        }

        async fn mark_complete(&self, id: &str) -> Result<Reminder> {
            self.inner.mark_complete(id).await
        }

        async fn delete_reminder(&self, id: &str) -> Result<()> {
            self.inner.delete_reminder(id).await
        }
    }

    // Cache that fails every operation
    struct FailingCache;

    #[async_trait]
    impl Cache for FailingCache {
        async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }

        async fn set(&self, _key: &str, _value: &[u8]) -> CacheResult<()> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }

        async fn delete(&self, _key: &str) -> CacheResult<()> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }

        async fn ping(&self) -> CacheResult<()> {
            Err(CacheError::ConnectionFailed("down".to_string()))
        }
    }

    fn pay_rent() -> ReminderPayload {
        ReminderPayload::new(
            "pay rent",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            40.0,
            -73.0,
        )
    }

    fn setup() -> (
        CachedReminderRepository<CountingRepository, MemoryCache>,
        Arc<CountingRepository>,
        Arc<MemoryCache>,
    ) {
        let repo = Arc::new(CountingRepository::new());
        let cache = Arc::new(MemoryCache::new(100));
        let cached = CachedReminderRepository::new(repo.clone(), cache.clone());
        (cached, repo, cache)
    }

    async fn cached_value(cache: &MemoryCache, id: &str) -> Option<Reminder> {
        cache
            .get(&reminder_key(id))
            .await
            .unwrap()
            .map(|bytes| deserialize_reminder(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_entity() {
        let (cached, repo, _cache) = setup();

        let created = cached.create_reminder(&pay_rent()).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.status, ReminderStatus::Incomplete);

        let fetched = cached.get_reminder(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        // Served from the cache populated by create
        assert_eq!(repo.get_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_populates_cache() {
        let (cached, _repo, cache) = setup();

        let created = cached.create_reminder(&pay_rent()).await.unwrap();

        assert_eq!(cached_value(&cache, &created.id).await, Some(created));
    }

    #[tokio::test]
    async fn test_get_miss_populates_cache_and_next_get_skips_store() {
        let (cached, repo, cache) = setup();
        let created = repo.create_reminder(&pay_rent()).await.unwrap();

        // First get: cache miss, hits the store
        let first = cached.get_reminder(&created.id).await.unwrap();
        assert_eq!(repo.get_calls(), 1);
        assert_eq!(cached_value(&cache, &created.id).await, Some(first.clone()));

        // Second get: cache hit, store untouched
        let second = cached.get_reminder(&created.id).await.unwrap();
        assert_eq!(repo.get_calls(), 1);
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found_and_not_cached() {
        let (cached, _repo, cache) = setup();

        let err = cached.get_reminder("missing").await.unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { .. }));
        assert_eq!(cached_value(&cache, "missing").await, None);
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_falls_back_to_store() {
        let (cached, repo, cache) = setup();
        let created = repo.create_reminder(&pay_rent()).await.unwrap();
        cache
            .set(&reminder_key(&created.id), b"not json")
            .await
            .unwrap();

        let fetched = cached.get_reminder(&created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(repo.get_calls(), 1);
        // The corrupt value is replaced
        assert_eq!(cached_value(&cache, &created.id).await, Some(created));
    }

    #[tokio::test]
    async fn test_mark_complete_twice() {
        let (cached, _repo, cache) = setup();
        let created = cached.create_reminder(&pay_rent()).await.unwrap();

        let completed = cached.mark_complete(&created.id).await.unwrap();
        assert_eq!(completed.status, ReminderStatus::Complete);
        assert_eq!(
            cached_value(&cache, &created.id).await.map(|r| r.status),
            Some(ReminderStatus::Complete)
        );

        let err = cached.mark_complete(&created.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_refreshes_cache() {
        let (cached, _repo, cache) = setup();
        let created = cached.create_reminder(&pay_rent()).await.unwrap();

        let payload = ReminderPayload::new("call mom", pay_rent().time, 1.0, 2.0);
        let updated = cached.update_reminder(&created.id, &payload).await.unwrap();

        assert_eq!(updated.message, "call mom");
        assert_eq!(cached_value(&cache, &created.id).await, Some(updated));
    }

    #[tokio::test]
    async fn test_update_complete_reminder_fails_and_keeps_cache() {
        let (cached, _repo, cache) = setup();
        let created = cached.create_reminder(&pay_rent()).await.unwrap();
        let completed = cached.mark_complete(&created.id).await.unwrap();

        let payload = ReminderPayload::new("call mom", pay_rent().time, 1.0, 2.0);
        let err = cached
            .update_reminder(&created.id, &payload)
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { .. }));
        assert_eq!(cached_value(&cache, &created.id).await, Some(completed));
    }

    #[tokio::test]
    async fn test_update_complete_reminder_with_out_of_range_payload_fails() {
        let (cached, _repo, cache) = setup();
        let created = cached.create_reminder(&pay_rent()).await.unwrap();
        let completed = cached.mark_complete(&created.id).await.unwrap();

        let payload = ReminderPayload::new("bad", pay_rent().time, 500.0, -400.0);
        let err = cached
            .update_reminder(&created.id, &payload)
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { .. }));
        assert_eq!(cached_value(&cache, &created.id).await, Some(completed));
    }

    // Deterministic coordinates with full-width mantissas
    fn coordinates(count: usize) -> Vec<(f64, f64)> {
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        let mut next_unit = move || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        };
        (0..count)
            .map(|_| (next_unit() * 180.0 - 90.0, next_unit() * 360.0 - 180.0))
            .collect()
    }

    #[tokio::test]
    async fn test_cache_hit_returns_exact_stored_coordinates() {
        let (cached, repo, _cache) = setup();
        let points = coordinates(500);

        for (latitude, longitude) in &points {
            let payload = ReminderPayload::new("walk", pay_rent().time, *latitude, *longitude);
            let created = cached.create_reminder(&payload).await.unwrap();

            let from_cache = cached.get_reminder(&created.id).await.unwrap();
            let from_store = repo.get_reminder(&created.id).await.unwrap();

            assert_eq!(from_cache.latitude.to_bits(), from_store.latitude.to_bits());
            assert_eq!(from_cache.longitude.to_bits(), from_store.longitude.to_bits());
            assert_eq!(from_cache, from_store);
        }

        // Every decorated get was a cache hit
        assert_eq!(repo.get_calls(), points.len());
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_cache_hit_over_sqlite_returns_exact_stored_coordinates() {
        use crate::storage::SqliteRepository;

        let repo = Arc::new(SqliteRepository::new_in_memory().await.unwrap());
        let cached = CachedReminderRepository::new(repo.clone(), Arc::new(MemoryCache::new(1000)));

        for (latitude, longitude) in coordinates(500) {
            let payload = ReminderPayload::new("walk", pay_rent().time, latitude, longitude);
            let created = cached.create_reminder(&payload).await.unwrap();

            let from_cache = cached.get_reminder(&created.id).await.unwrap();
            let from_store = repo.get_reminder(&created.id).await.unwrap();

            assert_eq!(from_store.latitude.to_bits(), latitude.to_bits());
            assert_eq!(from_store.longitude.to_bits(), longitude.to_bits());
            assert_eq!(from_cache, from_store);
        }
    }

    #[tokio::test]
    async fn test_delete_invalidates_before_store_delete() {
        let (cached, _repo, cache) = setup();
        let created = cached.create_reminder(&pay_rent()).await.unwrap();
        assert!(cached_value(&cache, &created.id).await.is_some());

        cached.delete_reminder(&created.id).await.unwrap();

        assert_eq!(cached_value(&cache, &created.id).await, None);
        let err = cached.get_reminder(&created.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_stale_cache_entry_does_not_resurrect_deleted_reminder() {
        let (cached, repo, cache) = setup();
        let created = repo.create_reminder(&pay_rent()).await.unwrap();
        // Stale copy written behind the repository's back
        cache
            .set(
                &reminder_key(&created.id),
                &serialize_reminder(&created).unwrap(),
            )
            .await
            .unwrap();

        cached.delete_reminder(&created.id).await.unwrap();

        assert!(matches!(
            cached.get_reminder(&created.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_succeeds() {
        let (cached, _repo, _cache) = setup();
        assert!(cached.delete_reminder("missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_bypasses_cache() {
        let (cached, repo, cache) = setup();
        for _ in 0..3 {
            cached.create_reminder(&pay_rent()).await.unwrap();
        }
        let before = cache.len().await;

        let page = cached
            .list_reminders(&ListRemindersQuery::default())
            .await
            .unwrap();
        cached
            .list_reminders(&ListRemindersQuery::default())
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(repo.list_calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len().await, before);
    }

    #[tokio::test]
    async fn test_list_complete_only() {
        let (cached, _repo, _cache) = setup();
        for i in 0..4 {
            let created = cached.create_reminder(&pay_rent()).await.unwrap();
            if i % 2 == 0 {
                cached.mark_complete(&created.id).await.unwrap();
            }
        }

        let query = ListRemindersQuery::new(Some(ReminderStatus::Complete), 1, 0).unwrap();
        let page = cached.list_reminders(&query).await.unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
        assert!(page
            .items
            .iter()
            .all(|r| r.status == ReminderStatus::Complete));
    }

    #[tokio::test]
    async fn test_failing_cache_never_fails_requests() {
        let repo = Arc::new(CountingRepository::new());
        let cached = CachedReminderRepository::new(repo.clone(), Arc::new(FailingCache));

        let created = cached.create_reminder(&pay_rent()).await.unwrap();
        let fetched = cached.get_reminder(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(repo.get_calls(), 1);

        cached
            .update_reminder(&created.id, &pay_rent())
            .await
            .unwrap();
        cached.mark_complete(&created.id).await.unwrap();
        cached.delete_reminder(&created.id).await.unwrap();

        assert!(matches!(
            repo.get_reminder(&created.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_pay_rent_lifecycle() {
        let (cached, _repo, _cache) = setup();

        let created = cached.create_reminder(&pay_rent()).await.unwrap();
        assert_eq!(created.status, ReminderStatus::Incomplete);
        assert!(!created.id.is_empty());

        assert_eq!(cached.get_reminder(&created.id).await.unwrap(), created);

        let completed = cached.mark_complete(&created.id).await.unwrap();
        assert_eq!(completed.status, ReminderStatus::Complete);

        let err = cached
            .update_reminder(&created.id, &pay_rent())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }
}
