//! Demo data seeding.

use eventcache_core::event::{generate_seed_events, EventStore};

/// Inserts the sample events when the store holds no events yet.
///
/// Returns the number of events inserted. Seeding goes through the store's
/// `create`, so it never writes to the cache.
pub async fn seed_demo_events(store: &dyn EventStore) -> anyhow::Result<usize> {
    let existing = store.list().await?;
    if !existing.is_empty() {
        tracing::info!(count = existing.len(), "Store already has events, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    for event in generate_seed_events() {
        let created = store.create(event).await?;
        tracing::debug!(event_id = %created.id, title = %created.title, "Seeded event");
        inserted += 1;
    }

    tracing::info!(count = inserted, "Seeded demo events");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_seed_empty_store() {
        let state = AppState::default();

        let inserted = seed_demo_events(state.events.as_ref()).await.unwrap();

        assert_eq!(inserted, generate_seed_events().len());
        assert_eq!(state.events.list().await.unwrap().len(), inserted);
    }

    #[tokio::test]
    async fn test_seed_is_skipped_when_store_has_events() {
        let state = AppState::default();
        seed_demo_events(state.events.as_ref()).await.unwrap();

        let inserted = seed_demo_events(state.events.as_ref()).await.unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(
            state.events.list().await.unwrap().len(),
            generate_seed_events().len()
        );
    }

    #[tokio::test]
    async fn test_seeded_events_are_served_from_store_first() {
        let state = AppState::default();
        seed_demo_events(state.events.as_ref()).await.unwrap();

        let first = state.events.list().await.unwrap().remove(0);
        let fetched = state.events.get(&first.id.to_string()).await.unwrap();

        assert_eq!(fetched.source.as_str(), "miss");
    }
}
