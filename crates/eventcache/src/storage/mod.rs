//! Storage backend implementations.
//!
//! This module provides concrete implementations of `EventRepository`
//! defined in `eventcache_core::storage`, plus the cache-aside decorator
//! that sits in front of them. The backend is selected at compile time
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed storage, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with in-memory storage (default):
//! ```bash
//! cargo build -p eventcache
//! ```
//!
//! Build with SQLite and Redis:
//! ```bash
//! cargo build -p eventcache --no-default-features --features sqlite,redis
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p eventcache --features sqlite"
);

pub mod cached;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
