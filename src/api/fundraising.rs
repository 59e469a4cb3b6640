//! Totals and donation endpoints.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::{Donation, NewDonation, Totals};
use crate::AppState;

/// GET /api/v1/fundraising/totals - Current totals.
pub async fn get_totals(State(state): State<AppState>) -> ApiResult<Totals> {
    Ok(Json(state.store.get_totals().await?))
}

/// GET /api/v1/fundraising/donations - Donation log.
pub async fn list_donations(State(state): State<AppState>) -> ApiResult<Vec<Donation>> {
    Ok(Json(state.store.list_donations().await?))
}

/// POST /api/v1/fundraising/donations - Record a donation, returning updated totals.
pub async fn record_donation(
    State(state): State<AppState>,
    Json(request): Json<NewDonation>,
) -> ApiResult<Totals> {
    Ok(Json(state.store.record_donation(request).await?))
}
