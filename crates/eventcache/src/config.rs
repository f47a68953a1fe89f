use std::{env, time::Duration};

/// Default cache TTL in seconds.
const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

/// Default maximum number of in-memory cache entries.
const DEFAULT_CACHE_MAX_ENTRIES: usize = 10_000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 3600)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "events.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Insert the sample events when the store is empty (default: true)
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 3600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "events.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `SEED_DEMO_DATA` - Seed sample events into an empty store (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unparseable or out-of-range values fall back to their defaults.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_CACHE_TTL_SECONDS),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .filter(|entries| *entries > 0)
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "events.db".to_string()),
            redis_url: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
            seed_demo_data: lookup("SEED_DEMO_DATA")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_cache_ttl_conversion() {
        let config = Config {
            cache_ttl_seconds: 600,
            ..Config::default()
        };

        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.cache_ttl_seconds, 3600);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.sqlite_path, "events.db");
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "120"),
            ("CACHE_MAX_ENTRIES", "50"),
            ("SQLITE_PATH", "/tmp/test.db"),
            ("REDIS_URL", "redis://cache:6379"),
            ("SEED_DEMO_DATA", "false"),
        ]);

        assert_eq!(config.cache_ttl(), Duration::from_secs(120));
        assert_eq!(config.cache_max_entries, 50);
        assert_eq!(config.sqlite_path, "/tmp/test.db");
        assert_eq!(config.redis_url, "redis://cache:6379");
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("CACHE_TTL_SECONDS", "soon"),
            ("CACHE_MAX_ENTRIES", "0"),
            ("SEED_DEMO_DATA", "maybe"),
        ]);

        assert_eq!(config.cache_ttl_seconds, 3600);
        assert_eq!(config.cache_max_entries, 10_000);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_zero_ttl_falls_back_to_default() {
        let config = config_from(&[("CACHE_TTL_SECONDS", "0")]);
        assert_eq!(config.cache_ttl_seconds, 3600);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 1 "), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool(""), None);
    }
}
