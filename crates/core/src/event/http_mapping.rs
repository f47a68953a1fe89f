//! Pure functions for mapping event errors to HTTP status codes.

use super::EventError;

/// Maps an [`EventError`] to an HTTP status code.
///
/// - `InvalidIdentifier` -> 400 (Bad Request)
/// - `InvalidPayload` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `StoreUnavailable` -> 503 (Service Unavailable)
/// - `Store` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use eventcache_core::event::{event_error_to_status_code, EventError};
///
/// let error = EventError::NotFound("abc-123".to_string());
/// assert_eq!(event_error_to_status_code(&error), 404);
/// ```
pub fn event_error_to_status_code(error: &EventError) -> u16 {
    match error {
        EventError::InvalidIdentifier(_) => 400,
        EventError::InvalidPayload(_) => 400,
        EventError::NotFound(_) => 404,
        EventError::StoreUnavailable(_) => 503,
        EventError::Store(_) => 500,
    }
}
