use super::error::ValidationError;
use super::types::{Event, NewEvent};

const MAX_TITLE_LEN: usize = 200;

/// Validates a new event before it is handed to the record store.
pub fn validate_new_event(event: &NewEvent) -> Result<(), ValidationError> {
    if event.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if event.title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

/// Sorts events by date, then by title for events on the same instant.
pub fn sort_events_by_date(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
}
