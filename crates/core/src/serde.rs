//! Serde helper functions for request payload deserialization.
//!
//! Clients often send empty strings for optional fields they left blank;
//! these are treated as absent.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty or blank strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
