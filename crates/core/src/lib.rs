//! Core types and adapter contracts for eventcache.
//!
//! This crate holds the pure parts of the service: the event domain model,
//! the cache and record store traits, cache key derivation, cache payload
//! serialization, and the error taxonomy. It performs no I/O of its own.

pub mod cache;
pub mod event;
pub mod serde;
pub mod storage;
