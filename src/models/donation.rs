//! Donation log entries.

use serde::{Deserialize, Serialize};

/// Where a donation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DonationSource {
    #[default]
    Online,
    Offline,
    Pledge,
    Test,
}

impl DonationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DonationSource::Online => "online",
            DonationSource::Offline => "offline",
            DonationSource::Pledge => "pledge",
            DonationSource::Test => "test",
        }
    }
}

/// A recorded donation. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub id: String,
    pub amount: f64,
    pub source: DonationSource,
    pub name: String,
    pub email: String,
    /// Milliseconds since the Unix epoch
    pub ts: i64,
}

/// Request body for recording a donation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewDonation {
    pub amount: f64,
    #[serde(default)]
    pub source: DonationSource,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

fn default_name() -> String {
    "Anonymous".to_string()
}

impl NewDonation {
    pub fn new(amount: f64, source: DonationSource) -> Self {
        Self {
            amount,
            source,
            name: default_name(),
            email: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}
