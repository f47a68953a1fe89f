//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::Row;

use eventcache_core::event::{Event, EventId};

/// Storage format for event dates (ISO 8601 without offset).
///
/// `%.f` keeps sub-second precision and writes nothing for whole seconds.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Convert a SQLite row to an Event.
///
/// Expected columns: id, title, description, location, category, organizer, date, created_at
pub fn row_to_event(row: &Row) -> rusqlite::Result<Event> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let location: Option<String> = row.get(3)?;
    let category: Option<String> = row.get(4)?;
    let organizer: Option<String> = row.get(5)?;
    let date: String = row.get(6)?;
    let created_at: String = row.get(7)?;

    Ok(Event {
        id: parse_event_id(&id)?,
        title,
        description,
        location,
        category,
        organizer,
        date: parse_date(&date)?,
        created_at: parse_datetime(&created_at)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Parse an EventId from string.
fn parse_event_id(s: &str) -> rusqlite::Result<EventId> {
    s.parse::<EventId>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse an event date.
fn parse_date(s: &str) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Format an event date for SQLite storage.
///
/// The format sorts lexicographically in chronological order.
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}
