//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/health` - Reachability of the record store and the cache

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use eventcache_core::event::{ComponentStatus, HealthReport};

use crate::state::AppState;

/// Body of the `/health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy`, `degraded` (cache down) or `unhealthy` (store down).
    pub status: &'static str,
    pub store: ComponentStatus,
    pub cache: ComponentStatus,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        let status = if report.is_degraded() {
            "degraded"
        } else if report.is_healthy() {
            "healthy"
        } else {
            "unhealthy"
        };

        Self {
            status,
            store: report.store,
            cache: report.cache,
        }
    }
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /health - Dependency reachability report.
///
/// Always answers 200; the body tells which dependency is down.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let report = state.events.health().await;
    Json(HealthResponse::from(report))
}
