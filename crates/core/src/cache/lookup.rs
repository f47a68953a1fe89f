//! Tagged outcomes of cache operations.
//!
//! Reads are classified into [`CacheLookup`] so the caller can branch on an
//! outage without treating it as a miss. Best-effort writes produce a
//! [`CacheWrite`] that is only ever inspected for logging.

use super::{CacheError, Result};

/// Classified result of a cache read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    /// The key is present.
    Hit(Vec<u8>),
    /// The backend answered and the key is absent.
    Miss,
    /// The backend could not serve the read.
    Unreachable(CacheError),
}

impl From<Result<Option<Vec<u8>>>> for CacheLookup {
    /// Any error is treated as unreachable: if the backend cannot answer
    /// this read cleanly, it cannot be trusted to say the key is absent.
    fn from(result: Result<Option<Vec<u8>>>) -> Self {
        match result {
            Ok(Some(bytes)) => CacheLookup::Hit(bytes),
            Ok(None) => CacheLookup::Miss,
            Err(err) => CacheLookup::Unreachable(err),
        }
    }
}

/// Outcome of a best-effort cache write (populate or invalidate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheWrite {
    Applied,
    Skipped(CacheError),
}

impl CacheWrite {
    /// Returns the error that caused the write to be skipped, if any.
    pub fn error(&self) -> Option<&CacheError> {
        match self {
            CacheWrite::Applied => None,
            CacheWrite::Skipped(err) => Some(err),
        }
    }
}

impl From<Result<()>> for CacheWrite {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => CacheWrite::Applied,
            Err(err) => CacheWrite::Skipped(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_value_is_hit() {
        let lookup = CacheLookup::from(Ok(Some(b"payload".to_vec())));
        assert_eq!(lookup, CacheLookup::Hit(b"payload".to_vec()));
    }

    #[test]
    fn test_absent_value_is_miss() {
        assert_eq!(CacheLookup::from(Ok(None)), CacheLookup::Miss);
    }

    #[test]
    fn test_connection_error_is_unreachable() {
        let err = CacheError::ConnectionFailed("refused".to_string());
        assert_eq!(
            CacheLookup::from(Err(err.clone())),
            CacheLookup::Unreachable(err)
        );
    }

    #[test]
    fn test_operation_error_is_not_a_miss() {
        let err = CacheError::OperationFailed("WRONGTYPE".to_string());
        assert!(matches!(
            CacheLookup::from(Err(err)),
            CacheLookup::Unreachable(_)
        ));
    }

    #[test]
    fn test_write_applied() {
        let write = CacheWrite::from(Ok(()));
        assert_eq!(write, CacheWrite::Applied);
        assert!(write.error().is_none());
    }

    #[test]
    fn test_write_skipped_keeps_error() {
        let err = CacheError::ConnectionFailed("timeout".to_string());
        let write = CacheWrite::from(Err(err.clone()));
        assert_eq!(write.error(), Some(&err));
    }
}
