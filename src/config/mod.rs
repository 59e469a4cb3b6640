//! Configuration module for the fundraiser backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Campaign goal in dollars.
pub const GOAL_AMOUNT: f64 = 10000.0;
/// Admin PIN used when none is configured.
pub const ADMIN_PIN: &str = "DECA2025";
/// Remote persistence API base URL used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://your.api.example/v1";
/// Stripe API host.
pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Which persistence backend serves the fundraising data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Key/value entries in the local SQLite database
    Local,
    /// HTTP calls against `api_base_url`
    Remote,
}

impl StoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Some(StoreBackend::Local),
            "remote" | "api" => Some(StoreBackend::Remote),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
    /// Path to SQLite database file backing the local store
    pub db_path: PathBuf,
    /// Fundraising goal in dollars
    pub goal: f64,
    /// PIN unlocking the admin page
    pub admin_pin: String,
    /// Persistence backend selection
    pub backend: StoreBackend,
    /// Base URL of the remote persistence API
    pub api_base_url: String,
    /// Pre-shared key guarding the JSON API, also sent by the remote store
    pub api_psk: Option<String>,
    /// Endpoint the donate page posts to for a checkout session
    pub checkout_url: Option<String>,
    /// Externally visible base URL used to build checkout redirect URLs
    pub public_url: String,
    /// Stripe secret key; checkout endpoint is unusable without it
    pub stripe_secret_key: Option<String>,
    /// Stripe API host
    pub stripe_api_base: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr: SocketAddr = env::var("FUNDRAISER_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid FUNDRAISER_BIND_ADDR format");

        let log_level = env::var("FUNDRAISER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("FUNDRAISER_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let db_path = env::var("FUNDRAISER_DB_PATH")
            .unwrap_or_else(|_| "./data/fundraiser.sqlite".to_string())
            .into();

        let goal = env::var("FUNDRAISER_GOAL")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|g| *g > 0.0)
            .unwrap_or(GOAL_AMOUNT);

        let admin_pin = env::var("FUNDRAISER_ADMIN_PIN").unwrap_or_else(|_| ADMIN_PIN.to_string());

        let backend = env::var("FUNDRAISER_BACKEND")
            .ok()
            .map(|v| StoreBackend::parse(&v).expect("FUNDRAISER_BACKEND must be local or remote"))
            .unwrap_or(StoreBackend::Local);

        let api_base_url = env::var("FUNDRAISER_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let api_psk = env::var("FUNDRAISER_API_PSK").ok();

        let checkout_url = env::var("FUNDRAISER_CHECKOUT_URL").ok();

        let public_url =
            env::var("FUNDRAISER_PUBLIC_URL").unwrap_or_else(|_| format!("http://{}", bind_addr));

        let stripe_secret_key = env::var("STRIPE_SECRET_KEY").ok();

        let stripe_api_base =
            env::var("STRIPE_API_BASE").unwrap_or_else(|_| DEFAULT_STRIPE_API_BASE.to_string());

        Self {
            bind_addr,
            log_level,
            log_json,
            db_path,
            goal,
            admin_pin,
            backend,
            api_base_url,
            api_psk,
            checkout_url,
            public_url,
            stripe_secret_key,
            stripe_api_base,
        }
    }
}
