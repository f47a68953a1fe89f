use async_trait::async_trait;

use crate::event::{Event, EventId, NewEvent};

use super::Result;

/// Repository for event records. This is the source of truth.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, id: EventId) -> Result<Option<Event>>;

    /// Gets all events, ordered by date.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Inserts a new event, assigning its ID and creation timestamp.
    async fn insert_event(&self, event: &NewEvent) -> Result<Event>;

    /// Deletes an event by its ID.
    ///
    /// Returns `RepositoryError::NotFound` if no such event exists.
    async fn delete_event(&self, id: EventId) -> Result<()>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<()>;
}
