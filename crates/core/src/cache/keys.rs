use crate::event::EventId;

/// Namespace prefix shared by every event cache key.
pub const EVENT_KEY_PREFIX: &str = "event";

/// Returns the cache key for a single event.
///
/// The key depends on the identifier only, so every process maps the same
/// event to the same key.
///
/// # Examples
///
/// ```
/// use eventcache_core::cache::event_key;
/// use eventcache_core::event::EventId;
///
/// let id: EventId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
/// assert_eq!(event_key(id), "event:550e8400-e29b-41d4-a716-446655440000");
/// ```
pub fn event_key(id: EventId) -> String {
    format!("{}:{}", EVENT_KEY_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_key_format() {
        let id: EventId = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse().unwrap();
        assert_eq!(event_key(id), "event:6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    }

    #[test]
    fn test_event_key_is_deterministic() {
        let id = EventId::new();
        assert_eq!(event_key(id), event_key(id));
    }

    #[test]
    fn test_distinct_ids_give_distinct_keys() {
        assert_ne!(event_key(EventId::new()), event_key(EventId::new()));
    }

    #[test]
    fn test_same_id_parsed_twice_gives_same_key() {
        let raw = "550e8400-e29b-41d4-a716-446655440000";
        let a: EventId = raw.parse().unwrap();
        let b: EventId = raw.parse().unwrap();
        assert_eq!(event_key(a), event_key(b));
    }
}
