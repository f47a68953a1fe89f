//! Event CRUD handlers.
//!
//! Handlers go through the `EventStore` trait object; cache routing is the
//! store's concern, handlers only surface where a read was served from.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use eventcache_core::event::{Event, NewEvent};

use crate::{
    handlers::AppError,
    models::{CreateEvent, DeleteResponse},
    state::AppState,
};

/// Response header reporting how a single-event read was served.
pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Error response with message (for payload parsing errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, Json(serde_json::json!({ "detail": msg }))).into_response()
}

/// List all events (GET /api/events).
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.events.list().await?;
    Ok(Json(events))
}

/// Get a single event by ID (GET /api/events/{id}).
///
/// The `x-cache` header is `hit`, `miss` or `bypass`.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let fetched = state.events.get(&id).await?;

    tracing::debug!(event_id = %id, source = fetched.source.as_str(), "Event read");
    Ok(([(X_CACHE, fetched.source.as_str())], Json(fetched.value)))
}

/// Create a new event (POST /api/events).
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEvent>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(payload) = payload.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse event: {}", e.body_text()),
        )
    })?;

    let event = state
        .events
        .create(NewEvent::from(payload))
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// Delete an event (DELETE /api/events/{id}).
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.events.delete(&id).await?;
    Ok(Json(DeleteResponse::from(deleted)))
}
