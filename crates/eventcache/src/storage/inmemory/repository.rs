//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use eventcache_core::event::{sort_events_by_date, Event, EventId, NewEvent};
use eventcache_core::storage::{EventRepository, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    events: Arc<RwLock<HashMap<EventId, Event>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        let mut listed: Vec<Event> = events.values().cloned().collect();
        sort_events_by_date(&mut listed);
        Ok(listed)
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<Event> {
        let created = event.clone().into_event(EventId::new(), Utc::now());
        let mut events = self.events.write().await;
        events.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete_event(&self, id: EventId) -> Result<()> {
        let mut events = self.events.write().await;
        if events.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    // Helper to create test dates
    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_event_insert_and_get() {
        let repo = InMemoryRepository::new();
        let fields = NewEvent::new("Tech Conference 2025", at(2025, 11, 15)).with_location("SF");

        let created = repo.insert_event(&fields).await.unwrap();
        assert_eq!(created.to_new_event(), fields);

        let retrieved = repo.get_event(created.id).await.unwrap();
        assert_eq!(retrieved, Some(created));
    }

    #[tokio::test]
    async fn test_event_insert_assigns_unique_ids() {
        let repo = InMemoryRepository::new();
        let fields = NewEvent::new("Marathon", at(2025, 12, 5));

        let first = repo.insert_event(&fields).await.unwrap();
        let second = repo.insert_event(&fields).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_event_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_event(EventId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_event_list_is_ordered_by_date() {
        let repo = InMemoryRepository::new();
        repo.insert_event(&NewEvent::new("Later", at(2025, 12, 20)))
            .await
            .unwrap();
        repo.insert_event(&NewEvent::new("Earlier", at(2025, 11, 10)))
            .await
            .unwrap();

        let events = repo.list_events().await.unwrap();
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Earlier", "Later"]);
    }

    #[tokio::test]
    async fn test_event_delete() {
        let repo = InMemoryRepository::new();
        let created = repo
            .insert_event(&NewEvent::new("Music Festival", at(2025, 12, 20)))
            .await
            .unwrap();

        repo.delete_event(created.id).await.unwrap();

        let retrieved = repo.get_event(created.id).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_event_delete_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.delete_event(EventId::new()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryRepository::new();
        let clone = repo.clone();

        let created = repo
            .insert_event(&NewEvent::new("AI Workshop", at(2025, 12, 10)))
            .await
            .unwrap();

        assert!(clone.get_event(created.id).await.unwrap().is_some());
    }
}
