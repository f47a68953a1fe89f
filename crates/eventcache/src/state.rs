//! Application state with trait-object storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The event store is a trait object so handlers stay
//! independent of the backend combination selected via feature flags.

use std::sync::Arc;

use eventcache_core::event::EventStore;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Event store (cache-aside, wraps underlying storage).
    pub events: Arc<dyn EventStore>,
}

impl AppState {
    /// Creates a new AppState around an event store.
    fn build(events: Arc<dyn EventStore>) -> Self {
        Self { events }
    }
}

// ============================================================================
// Backend-specific constructors
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::cached::CachedEventStore;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with in-memory cache");

            Ok(Self::build(Arc::new(CachedEventStore::new(
                sqlite_repo,
                memory_cache,
                config.cache_ttl(),
            ))))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::cached::CachedEventStore;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage with Redis cache");

            Ok(Self::build(Arc::new(CachedEventStore::new(
                sqlite_repo,
                redis_cache,
                config.cache_ttl(),
            ))))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::cached::CachedEventStore;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!("Using in-memory storage with in-memory cache");

            Ok(Self::build(Arc::new(CachedEventStore::new(
                inmemory_repo,
                memory_cache,
                config.cache_ttl(),
            ))))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::cached::CachedEventStore;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::info!("Using in-memory storage with Redis cache");

            Ok(Self::build(Arc::new(CachedEventStore::new(
                inmemory_repo,
                redis_cache,
                config.cache_ttl(),
            ))))
        }
    }
}

// ============================================================================
// Test support - provides backend-independent constructors for unit tests
// ============================================================================
