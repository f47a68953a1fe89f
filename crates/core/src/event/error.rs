use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors that can occur when parsing an event identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventIdError {
    #[error("Event identifier is empty")]
    Empty,
    #[error("Malformed event identifier: {0}")]
    Malformed(String),
}

/// Errors that can occur when validating a new event payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
}

/// Errors observable by callers of an [`EventStore`](super::EventStore).
///
/// Cache failures never show up here; they are absorbed by the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Invalid event identifier: {0}")]
    InvalidIdentifier(#[from] EventIdError),
    #[error("Invalid event: {0}")]
    InvalidPayload(#[from] ValidationError),
    #[error("Event with id {0} not found")]
    NotFound(String),
    #[error("Event store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Event store failure: {0}")]
    Store(String),
}

impl From<RepositoryError> for EventError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => EventError::NotFound(id),
            RepositoryError::ConnectionFailed(msg) => EventError::StoreUnavailable(msg),
            other => EventError::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id_error_display() {
        assert_eq!(
            EventIdError::Malformed("abc".to_string()).to_string(),
            "Malformed event identifier: abc"
        );
        assert_eq!(EventIdError::Empty.to_string(), "Event identifier is empty");
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyTitle.to_string(),
            "Event title cannot be empty"
        );
    }

    #[test]
    fn test_invalid_identifier_wraps_id_error() {
        let error = EventError::from(EventIdError::Malformed("xyz".to_string()));
        assert_eq!(
            error.to_string(),
            "Invalid event identifier: Malformed event identifier: xyz"
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_not_found() {
        let error = EventError::from(RepositoryError::NotFound {
            entity_type: "Event",
            id: "abc-123".to_string(),
        });
        assert_eq!(error, EventError::NotFound("abc-123".to_string()));
    }

    #[test]
    fn test_repository_connection_failure_maps_to_unavailable() {
        let error = EventError::from(RepositoryError::ConnectionFailed("refused".to_string()));
        assert_eq!(error, EventError::StoreUnavailable("refused".to_string()));
    }

    #[test]
    fn test_other_repository_errors_map_to_store() {
        let error = EventError::from(RepositoryError::QueryFailed("syntax".to_string()));
        assert_eq!(error, EventError::Store("Query failed: syntax".to_string()));
    }
}
