//! Client side of the checkout bridge, used by the donate page.

use reqwest::Client;
use serde::Deserialize;

use super::CheckoutPayload;
use crate::errors::AppError;

pub struct CheckoutClient {
    client: Client,
    endpoint: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CheckoutResponse {
    url: Option<String>,
}

impl CheckoutClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Ask the checkout endpoint for a session and return the redirect URL.
    pub async fn create_session(&self, payload: &CheckoutPayload) -> Result<String, AppError> {
        let Some(endpoint) = &self.endpoint else {
            return Err(AppError::Checkout(
                "Checkout backend is not configured".to_string(),
            ));
        };

        let response = self
            .client
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Checkout endpoint unreachable: {}", e);
                AppError::Checkout("Failed to reach checkout backend".to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!("Checkout endpoint returned {}", response.status());
            return Err(AppError::Checkout(
                "Failed to create checkout session".to_string(),
            ));
        }

        let body: CheckoutResponse = response.json().await.map_err(|e| {
            tracing::warn!("Checkout endpoint sent an unreadable body: {}", e);
            AppError::Checkout("Missing redirect URL from backend".to_string())
        })?;

        body.url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::Checkout("Missing redirect URL from backend".to_string()))
    }
}
