//! In-memory storage backend.
//!
//! Stores all events in a HashMap wrapped in `Arc<RwLock<_>>`. This is useful
//! for development and testing where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventcache::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
