use async_trait::async_trait;

use super::{Deleted, Event, EventError, Fetched, HealthReport, NewEvent};

/// Event operations exposed to request handlers.
///
/// Implementations decide how reads and writes are routed between the
/// record store and the cache. Identifiers arrive as raw strings so that
/// malformed input is rejected by the implementation before any I/O.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Gets an event by its identifier.
    async fn get(&self, id: &str) -> Result<Fetched<Event>, EventError>;

    /// Lists every stored event, ordered by date.
    async fn list(&self) -> Result<Vec<Event>, EventError>;

    /// Stores a new event and returns it with its assigned identifier.
    async fn create(&self, event: NewEvent) -> Result<Event, EventError>;

    /// Deletes an event by its identifier.
    async fn delete(&self, id: &str) -> Result<Deleted, EventError>;

    /// Reports reachability of the record store and the cache.
    async fn health(&self) -> HealthReport;
}
