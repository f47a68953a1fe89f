use serde::Serialize;

/// Reachability of a single backing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComponentStatus {
    Connected,
    Unreachable { reason: String },
}

impl ComponentStatus {
    /// Builds a status from the outcome of a ping.
    pub fn from_ping<E: std::fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => ComponentStatus::Connected,
            Err(err) => ComponentStatus::Unreachable {
                reason: err.to_string(),
            },
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ComponentStatus::Connected)
    }
}

/// Reachability of the record store and the cache.
///
/// A cache outage degrades performance only, so the service is considered
/// healthy as long as the record store answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub store: ComponentStatus,
    pub cache: ComponentStatus,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.store.is_connected()
    }

    pub fn is_degraded(&self) -> bool {
        self.is_healthy() && !self.cache.is_connected()
    }
}
