//! Remote backend: one HTTP call per operation, bodies passed through as parsed.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::FundraisingStore;
use crate::auth::API_KEY_HEADER;
use crate::errors::AppError;
use crate::models::{Donation, Event, NewDonation, NewEvent, TeamMember, Totals};

pub struct RemoteStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RemoteStore {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    async fn fetch<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, AppError> {
        let response = builder.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl FundraisingStore for RemoteStore {
    async fn initialize(&self) -> Result<(), AppError> {
        // The remote API owns its own seed data.
        Ok(())
    }

    async fn get_totals(&self) -> Result<Totals, AppError> {
        Self::fetch(self.request(Method::GET, "/fundraising/totals")).await
    }

    async fn list_donations(&self) -> Result<Vec<Donation>, AppError> {
        Self::fetch(self.request(Method::GET, "/fundraising/donations")).await
    }

    async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        Self::fetch(self.request(Method::GET, "/events")).await
    }

    async fn list_team(&self) -> Result<Vec<TeamMember>, AppError> {
        Self::fetch(self.request(Method::GET, "/team")).await
    }

    async fn record_donation(&self, donation: NewDonation) -> Result<Totals, AppError> {
        Self::fetch(
            self.request(Method::POST, "/fundraising/donations")
                .json(&donation),
        )
        .await
    }

    async fn record_event(&self, event: NewEvent) -> Result<Vec<Event>, AppError> {
        Self::fetch(self.request(Method::POST, "/events").json(&event)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let store = RemoteStore::new("https://api.example/v1/", None);
        assert_eq!(store.base_url, "https://api.example/v1");
    }

    #[tokio::test]
    async fn test_network_error_propagates() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = RemoteStore::new(&format!("http://{}", addr), None);
        let err = store.get_totals().await.unwrap_err();
        assert!(matches!(err, AppError::Remote(_)));
    }
}
