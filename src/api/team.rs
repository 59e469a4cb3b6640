//! Team endpoint.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::TeamMember;
use crate::AppState;

/// GET /api/v1/team - List team members, seeding on first access.
pub async fn list_team(State(state): State<AppState>) -> ApiResult<Vec<TeamMember>> {
    Ok(Json(state.store.list_team().await?))
}
