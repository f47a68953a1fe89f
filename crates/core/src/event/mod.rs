mod error;
mod health;
mod http_mapping;
mod operations;
mod outcome;
mod seed;
mod traits;
mod types;

pub use error::{EventError, EventIdError, ValidationError};
pub use health::{ComponentStatus, HealthReport};
pub use http_mapping::event_error_to_status_code;
pub use operations::{sort_events_by_date, validate_new_event};
pub use outcome::{Deleted, Fetched, ReadSource};
pub use seed::generate_seed_events;
pub use traits::EventStore;
pub use types::{Event, EventId, NewEvent};
