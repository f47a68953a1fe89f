//! Cached store decorators.
//!
//! Wraps a repository with caching behavior following the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from repository and populate cache
//! - **Writes**: Persist to repository, then invalidate cache
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("events.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let store = CachedEventStore::new(repo, cache, Duration::from_secs(3600));
//! ```

mod event;

pub use event::CachedEventStore;
