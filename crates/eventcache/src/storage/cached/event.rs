//! Cached event store.
//!
//! Wraps an `EventRepository` with the cache-aside pattern. The repository is
//! the source of truth; the cache only accelerates single-event reads.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use eventcache_core::cache::{
    deserialize_event, event_key, serialize_event, Cache, CacheError, CacheLookup, CacheWrite,
};
use eventcache_core::event::{
    validate_new_event, ComponentStatus, Deleted, Event, EventError, EventId, EventStore, Fetched,
    HealthReport, NewEvent, ReadSource,
};
use eventcache_core::storage::EventRepository;

/// Cache-aside event store.
///
/// - **Reads**: Check cache first, on miss fetch from repository and populate cache.
///   When the cache cannot serve a read, the repository answers and the cache is left alone.
/// - **Writes**: Persist to repository, then invalidate the cached copy.
///
/// Cache failures are logged and never returned to the caller.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedEventStore<R, C>
where
    R: EventRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
}

impl<R, C> CachedEventStore<R, C>
where
    R: EventRepository,
    C: Cache,
{
    /// Creates a new cached event store.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live applied to every cache write
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    /// Reads from the repository, mapping an absent record to `NotFound`.
    async fn fetch_from_repository(&self, id: EventId) -> Result<Event, EventError> {
        self.repository
            .get_event(id)
            .await?
            .ok_or_else(|| EventError::NotFound(id.to_string()))
    }

    async fn populate(&self, key: &str, event: &Event) -> CacheWrite {
        match serialize_event(event) {
            Ok(bytes) => self.cache.set(key, &bytes, Some(self.ttl)).await.into(),
            Err(err) => CacheWrite::Skipped(CacheError::Serialization(err.to_string())),
        }
    }

    async fn invalidate(&self, key: &str) -> CacheWrite {
        self.cache.delete(key).await.into()
    }
}

#[async_trait]
impl<R, C> EventStore for CachedEventStore<R, C>
where
    R: EventRepository + 'static,
    C: Cache + 'static,
{
    async fn get(&self, id: &str) -> Result<Fetched<Event>, EventError> {
        let id: EventId = id.parse()?;
        let cache_key = event_key(id);

        match CacheLookup::from(self.cache.get(&cache_key).await) {
            CacheLookup::Hit(bytes) => match deserialize_event(&bytes) {
                Ok(event) => {
                    tracing::trace!(event_id = %id, "Cache hit for event");
                    return Ok(Fetched::new(event, ReadSource::CacheHit));
                }
                Err(err) => {
                    tracing::warn!(
                        event_id = %id,
                        error = %err,
                        "Cache entry deserialization failed, reading from repository"
                    );
                }
            },
            CacheLookup::Miss => {
                tracing::trace!(event_id = %id, "Cache miss for event");
                let event = self.fetch_from_repository(id).await?;

                if let Some(err) = self.populate(&cache_key, &event).await.error() {
                    tracing::warn!(event_id = %id, error = %err, "Failed to cache event");
                }

                return Ok(Fetched::new(event, ReadSource::CacheMiss));
            }
            CacheLookup::Unreachable(err) => {
                tracing::warn!(
                    event_id = %id,
                    error = %err,
                    "Cache unreachable, reading from repository"
                );
            }
        }

        let event = self.fetch_from_repository(id).await?;
        Ok(Fetched::new(event, ReadSource::CacheBypass))
    }

    async fn list(&self) -> Result<Vec<Event>, EventError> {
        Ok(self.repository.list_events().await?)
    }

    async fn create(&self, event: NewEvent) -> Result<Event, EventError> {
        validate_new_event(&event)?;

        let created = self.repository.insert_event(&event).await?;

        tracing::debug!(event_id = %created.id, title = %created.title, "Event created");
        Ok(created)
    }

    async fn delete(&self, id: &str) -> Result<Deleted, EventError> {
        let id: EventId = id.parse()?;
        let cache_key = event_key(id);

        // 1. Persist deletion to storage
        let result = self.repository.delete_event(id).await;

        // 2. Invalidate cache, also when the record was already gone
        if let Some(err) = self.invalidate(&cache_key).await.error() {
            tracing::warn!(event_id = %id, error = %err, "Failed to invalidate event cache");
        }

        result?;

        tracing::debug!(event_id = %id, "Event deleted");
        Ok(Deleted { id })
    }

    async fn health(&self) -> HealthReport {
        let store = ComponentStatus::from_ping(self.repository.ping().await);
        let cache = ComponentStatus::from_ping(self.cache.ping().await);

        if !cache.is_connected() {
            tracing::warn!(cache = ?cache, "Cache health check failed");
        }

        HealthReport { store, cache }
    }
}
