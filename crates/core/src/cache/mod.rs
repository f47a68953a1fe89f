mod error;
mod keys;
mod lookup;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{event_key, EVENT_KEY_PREFIX};
pub use lookup::{CacheLookup, CacheWrite};
pub use serialization::{deserialize_event, serialize_event, SerializationError};
pub use traits::Cache;
