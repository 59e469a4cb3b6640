//! Event endpoints.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::{Event, NewEvent};
use crate::AppState;

/// GET /api/v1/events - List events, seeding on first access.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Vec<Event>> {
    Ok(Json(state.store.list_events().await?))
}

/// POST /api/v1/events - Append an event, returning the full list.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<NewEvent>,
) -> ApiResult<Vec<Event>> {
    Ok(Json(state.store.record_event(request).await?))
}
