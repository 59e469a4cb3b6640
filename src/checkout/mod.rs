//! Checkout bridge.
//!
//! The donate page talks to a checkout endpoint through [`CheckoutClient`];
//! this process also serves that endpoint, which forwards to a
//! [`PaymentProvider`] to mint a hosted checkout session.

mod client;
mod provider;

pub use client::*;
pub use provider::*;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

/// Smallest amount the provider will charge, in cents.
pub const MIN_UNIT_AMOUNT: i64 = 100;
pub const CURRENCY: &str = "usd";
pub const PRODUCT_NAME: &str = "Donation: BHS DECA × Family Promise";

/// Body sent by the donate page.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutPayload {
    pub amount: f64,
    pub name: String,
    pub email: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// Body accepted by the checkout endpoint. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct CheckoutRequest {
    pub amount: Option<Value>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
}

impl CheckoutRequest {
    /// Read each field on its own; a field of the wrong type counts as missing.
    pub fn from_json(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        let text = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            amount: value.get("amount").cloned(),
            name: text("name"),
            email: text("email"),
            success_url: text("success_url"),
            cancel_url: text("cancel_url"),
        }
    }
}

/// Convert a dollar amount to cents, never below [`MIN_UNIT_AMOUNT`].
///
/// Missing or non-numeric amounts count as zero.
pub fn amount_to_cents(amount: Option<&Value>) -> i64 {
    let dollars = match amount {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) if s.trim().is_empty() => 0.0,
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    let cents = (dollars * 100.0).round();
    if cents.is_nan() {
        return MIN_UNIT_AMOUNT;
    }
    (cents as i64).max(MIN_UNIT_AMOUNT)
}

impl SessionRequest {
    pub fn from_checkout(request: CheckoutRequest) -> Self {
        Self {
            unit_amount: amount_to_cents(request.amount.as_ref()),
            currency: CURRENCY.to_string(),
            product_name: PRODUCT_NAME.to_string(),
            customer_email: request.email.filter(|e| !e.is_empty()),
            success_url: request.success_url,
            cancel_url: request.cancel_url,
            donor_name: request
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
        }
    }
}

/// POST /create-checkout-session - Mint a hosted checkout session.
pub async fn create_checkout_session(State(state): State<AppState>, body: Bytes) -> Response {
    let session = SessionRequest::from_checkout(CheckoutRequest::from_json(&body));

    tracing::info!("Creating checkout session for {} cents", session.unit_amount);

    match state.payments.create_session(&session).await {
        Ok(url) => (StatusCode::OK, Json(json!({ "url": url }))).into_response(),
        Err(e) => {
            tracing::error!("Checkout session failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.message() })),
            )
                .into_response()
        }
    }
}

/// OPTIONS /create-checkout-session - Preflight.
pub async fn checkout_preflight() -> StatusCode {
    StatusCode::OK
}
