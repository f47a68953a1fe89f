use chrono::{NaiveDate, NaiveDateTime};

use super::NewEvent;

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .unwrap_or_default()
}

/// Sample events used to seed an empty record store.
pub fn generate_seed_events() -> Vec<NewEvent> {
    vec![
        NewEvent::new("Tech Conference 2025", at(2025, 11, 15, 9))
            .with_description("Annual technology conference featuring the latest innovations")
            .with_location("San Francisco, CA")
            .with_category("Technology")
            .with_organizer("Tech Corp"),
        NewEvent::new("Music Festival", at(2025, 8, 20, 14))
            .with_description("Three-day outdoor music festival with top artists")
            .with_location("Austin, TX")
            .with_category("Music")
            .with_organizer("Live Nation"),
        NewEvent::new("Food & Wine Expo", at(2025, 10, 5, 11))
            .with_description("Culinary experience with renowned chefs")
            .with_location("New York, NY")
            .with_category("Food")
            .with_organizer("Culinary Institute"),
        NewEvent::new("Marathon 2025", at(2025, 9, 10, 7))
            .with_description("Annual city marathon for runners of all levels")
            .with_location("Boston, MA")
            .with_category("Sports")
            .with_organizer("Boston Athletic Association"),
        NewEvent::new("AI Workshop Bengaluru", at(2025, 11, 1, 10))
            .with_description("Hands-on workshop on machine learning and AI")
            .with_location("Bengaluru, Karnataka")
            .with_category("Technology")
            .with_organizer("Indian Institute of Science"),
    ]
}
