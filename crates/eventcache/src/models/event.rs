use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use eventcache_core::event::{Deleted, EventId, NewEvent};
use eventcache_core::serde::deserialize_optional_string;

/// Request payload for creating a new event.
///
/// Optional text fields sent as empty strings are treated as absent.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub organizer: Option<String>,
    pub date: NaiveDateTime,
}

impl From<CreateEvent> for NewEvent {
    fn from(payload: CreateEvent) -> Self {
        NewEvent {
            title: payload.title,
            description: payload.description,
            location: payload.location,
            category: payload.category,
            organizer: payload.organizer,
            date: payload.date,
        }
    }
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: EventId,
}

impl From<Deleted> for DeleteResponse {
    fn from(deleted: Deleted) -> Self {
        Self {
            message: format!("Event {} deleted successfully", deleted.id),
            id: deleted.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_create_event_from_json() {
        let json = r#"{
            "title": "Tech Conference 2025",
            "description": "Annual technology conference",
            "date": "2025-11-15T09:00:00",
            "location": "San Francisco, CA",
            "category": "Technology",
            "organizer": "Tech Corp"
        }"#;

        let payload: CreateEvent = serde_json::from_str(json).unwrap();
        let event = NewEvent::from(payload);

        assert_eq!(event.title, "Tech Conference 2025");
        assert_eq!(event.category.as_deref(), Some("Technology"));
        assert_eq!(
            event.date,
            NaiveDate::from_ymd_opt(2025, 11, 15)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_create_event_empty_optionals_are_none() {
        let json = r#"{
            "title": "Marathon",
            "date": "2025-12-05T06:00:00",
            "description": "",
            "organizer": "  "
        }"#;

        let payload: CreateEvent = serde_json::from_str(json).unwrap();

        assert!(payload.description.is_none());
        assert!(payload.organizer.is_none());
        assert!(payload.location.is_none());
    }

    #[test]
    fn test_create_event_requires_date() {
        let result = serde_json::from_str::<CreateEvent>(r#"{"title": "No date"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_response_message() {
        let id = EventId::new();
        let response = DeleteResponse::from(Deleted { id });

        assert_eq!(response.message, format!("Event {id} deleted successfully"));
        assert_eq!(response.id, id);
    }
}
