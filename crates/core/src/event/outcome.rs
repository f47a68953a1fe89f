use serde::Serialize;

use super::EventId;

/// Where a read was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadSource {
    /// Served from the cache without touching the record store.
    CacheHit,
    /// Cache had no entry; served from the record store and cached.
    CacheMiss,
    /// Cache was unusable; served from the record store without caching.
    CacheBypass,
}

impl ReadSource {
    /// Short label used in the `x-cache` response header and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadSource::CacheHit => "hit",
            ReadSource::CacheMiss => "miss",
            ReadSource::CacheBypass => "bypass",
        }
    }
}

/// A value returned by a read together with the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub value: T,
    pub source: ReadSource,
}

impl<T> Fetched<T> {
    pub fn new(value: T, source: ReadSource) -> Self {
        Self { value, source }
    }
}

/// Acknowledgment of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deleted {
    pub id: EventId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_labels() {
        assert_eq!(ReadSource::CacheHit.as_str(), "hit");
        assert_eq!(ReadSource::CacheMiss.as_str(), "miss");
        assert_eq!(ReadSource::CacheBypass.as_str(), "bypass");
    }

    #[test]
    fn test_fetched_keeps_source() {
        let fetched = Fetched::new(42, ReadSource::CacheMiss);
        assert_eq!(fetched.value, 42);
        assert_eq!(fetched.source, ReadSource::CacheMiss);
    }
}
