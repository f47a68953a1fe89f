use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EventIdError;

/// Unique identifier of an event, assigned by the record store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EventId {
    type Err = EventIdError;

    /// Parses an identifier as it arrives from a request path.
    ///
    /// No I/O happens here, so malformed identifiers are rejected before
    /// either store is touched.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(EventIdError::Empty);
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| EventIdError::Malformed(s.to_string()))
    }
}

/// An event record as stored in the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    /// When the event takes place. No timezone is attached.
    pub date: NaiveDateTime,
    pub created_at: DateTime<Utc>,
}

/// Payload for an event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    pub date: NaiveDateTime,
}

impl NewEvent {
    /// Creates a payload with only the required fields set.
    pub fn new(title: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            description: None,
            location: None,
            category: None,
            organizer: None,
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = Some(organizer.into());
        self
    }

    /// Turns the payload into a stored record.
    ///
    /// Only record stores call this: they own identifier assignment.
    pub fn into_event(self, id: EventId, created_at: DateTime<Utc>) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            category: self.category,
            organizer: self.organizer,
            date: self.date,
            created_at,
        }
    }
}

impl Event {
    /// Returns the caller-supplied fields of this record.
    pub fn to_new_event(&self) -> NewEvent {
        NewEvent {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            organizer: self.organizer.clone(),
            date: self.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn conference_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_event_id_parses_uuid() {
        let uuid = Uuid::new_v4();
        let id: EventId = uuid.to_string().parse().unwrap();
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_event_id_rejects_empty() {
        assert_eq!("".parse::<EventId>(), Err(EventIdError::Empty));
    }

    #[test]
    fn test_event_id_rejects_malformed() {
        let result = "not-an-id".parse::<EventId>();
        assert_eq!(
            result,
            Err(EventIdError::Malformed("not-an-id".to_string()))
        );
    }

    #[test]
    fn test_event_id_rejects_legacy_numeric_ids() {
        assert!("1".parse::<EventId>().is_err());
    }

    #[test]
    fn test_into_event_keeps_fields() {
        let id = EventId::new();
        let created_at = Utc::now();
        let new_event = NewEvent::new("Tech Conference 2025", conference_date())
            .with_description("Annual technology conference")
            .with_location("San Francisco, CA")
            .with_category("Technology")
            .with_organizer("Tech Corp");

        let event = new_event.clone().into_event(id, created_at);

        assert_eq!(event.id, id);
        assert_eq!(event.created_at, created_at);
        assert_eq!(event.to_new_event(), new_event);
    }

    #[test]
    fn test_event_json_shape() {
        let event = NewEvent::new("Conf", conference_date()).into_event(EventId::new(), Utc::now());

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["title"], "Conf");
        assert_eq!(json["date"], "2025-11-15T09:00:00");
        assert_eq!(json["id"], event.id.to_string());
        // Absent optional fields are omitted
        assert!(json.get("category").is_none());
        assert!(json.get("organizer").is_none());
    }

    #[test]
    fn test_new_event_deserializes_with_missing_optionals() {
        let json = r#"{"title":"Music Festival","date":"2025-08-20T14:00:00"}"#;

        let new_event: NewEvent = serde_json::from_str(json).unwrap();

        assert_eq!(new_event.title, "Music Festival");
        assert!(new_event.description.is_none());
        assert!(new_event.organizer.is_none());
    }
}
