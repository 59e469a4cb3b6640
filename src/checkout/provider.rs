//! Payment provider seam and the Stripe implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::AppError;

/// Everything the provider needs to mint a one-item checkout session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRequest {
    /// Price in cents
    pub unit_amount: i64,
    pub currency: String,
    pub product_name: String,
    pub customer_email: Option<String>,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,
    pub donor_name: String,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a hosted checkout session and return its URL.
    async fn create_session(&self, request: &SessionRequest) -> Result<String, AppError>;
}

/// Stripe Checkout via the REST API.
pub struct StripeProvider {
    client: Client,
    api_base: String,
    secret_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeSession {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetails,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetails {
    message: Option<String>,
}

impl StripeProvider {
    pub fn new(api_base: &str, secret_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            secret_key,
        }
    }

    /// Form fields in Stripe's bracketed encoding.
    fn form_fields(request: &SessionRequest) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("mode", "payment".to_string()),
            (
                "line_items[0][price_data][currency]",
                request.currency.clone(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                request.product_name.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                request.unit_amount.to_string(),
            ),
            ("line_items[0][quantity]", "1".to_string()),
            ("metadata[donor_name]", request.donor_name.clone()),
        ];
        if let Some(email) = &request.customer_email {
            fields.push(("customer_email", email.clone()));
        }
        if let Some(url) = &request.success_url {
            fields.push(("success_url", url.clone()));
        }
        if let Some(url) = &request.cancel_url {
            fields.push(("cancel_url", url.clone()));
        }
        fields
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    async fn create_session(&self, request: &SessionRequest) -> Result<String, AppError> {
        let Some(secret) = &self.secret_key else {
            return Err(AppError::Checkout(
                "Stripe secret key not configured".to_string(),
            ));
        };

        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(secret)
            .form(&Self::form_fields(request))
            .send()
            .await
            .map_err(|e| AppError::Checkout(e.to_string()))?;

        if !response.status().is_success() {
            let message = response
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| "Stripe error".to_string());
            return Err(AppError::Checkout(message));
        }

        let session: StripeSession = response
            .json()
            .await
            .map_err(|e| AppError::Checkout(e.to_string()))?;

        session
            .url
            .ok_or_else(|| AppError::Checkout("Stripe session has no url".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SessionRequest {
        SessionRequest {
            unit_amount: 2500,
            currency: "usd".to_string(),
            product_name: "Donation".to_string(),
            customer_email: None,
            success_url: Some("https://site/ok".to_string()),
            cancel_url: Some("https://site/cancel".to_string()),
            donor_name: "Anonymous".to_string(),
        }
    }

    #[test]
    fn test_form_fields_omit_empty_email() {
        let fields = StripeProvider::form_fields(&request());
        assert!(fields.iter().all(|(k, _)| *k != "customer_email"));
        assert!(fields.contains(&("line_items[0][price_data][unit_amount]", "2500".to_string())));
        assert!(fields.contains(&("mode", "payment".to_string())));
    }

    #[test]
    fn test_form_fields_include_email() {
        let mut req = request();
        req.customer_email = Some("donor@example.com".to_string());
        let fields = StripeProvider::form_fields(&req);
        assert!(fields.contains(&("customer_email", "donor@example.com".to_string())));
    }

    #[tokio::test]
    async fn test_missing_secret_key_fails() {
        let provider = StripeProvider::new("https://api.stripe.com", None);
        let err = provider.create_session(&request()).await.unwrap_err();
        assert_eq!(err.message(), "Stripe secret key not configured");
    }
}
