//! Fundraiser site backend
//!
//! Server-rendered donation site with a JSON persistence API and a Stripe checkout endpoint.

mod api;
mod auth;
mod checkout;
mod config;
mod db;
mod errors;
mod models;
mod pages;
mod router;
mod selfcheck;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use checkout::{CheckoutClient, PaymentProvider, StripeProvider};
use config::{Config, StoreBackend};
use db::Repository;
use store::{FundraisingStore, LocalStore, RemoteStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Active persistence backend
    pub store: Arc<dyn FundraisingStore>,
    /// Same store when it is local; the built-in checks need raw storage access
    pub local: Option<Arc<LocalStore>>,
    pub checkout: Arc<CheckoutClient>,
    pub payments: Arc<dyn PaymentProvider>,
    pub config: Arc<Config>,
}

impl AppState {
    /// State backed by the local store, with checkout wired from configuration.
    pub fn with_local_store(local: Arc<LocalStore>, config: Config) -> Self {
        Self::build(local.clone(), Some(local), config)
    }

    /// State backed by a remote API.
    pub fn with_remote_store(config: Config) -> Self {
        let remote = Arc::new(RemoteStore::new(
            &config.api_base_url,
            config.api_psk.clone(),
        ));
        Self::build(remote, None, config)
    }

    fn build(
        store: Arc<dyn FundraisingStore>,
        local: Option<Arc<LocalStore>>,
        config: Config,
    ) -> Self {
        Self {
            store,
            local,
            checkout: Arc::new(CheckoutClient::new(config.checkout_url.clone())),
            payments: Arc::new(StripeProvider::new(
                &config.stripe_api_base,
                config.stripe_secret_key.clone(),
            )),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Starting fundraiser backend");
    tracing::info!("Store backend: {:?}", config.backend);
    tracing::info!("Goal: {}", config.goal);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (FUNDRAISER_API_PSK). API authentication is disabled!");
    }
    if config.stripe_secret_key.is_none() {
        tracing::warn!("No STRIPE_SECRET_KEY configured; checkout sessions will fail");
    }
    if config.checkout_url.is_none() {
        tracing::warn!("No FUNDRAISER_CHECKOUT_URL configured; donations fall back to pledges");
    }

    let state = match config.backend {
        StoreBackend::Local => {
            tracing::info!("Database path: {:?}", config.db_path);
            let pool = db::init_database(&config.db_path).await?;
            let local = Arc::new(LocalStore::new(Repository::new(pool), config.goal));
            AppState::with_local_store(local, config.clone())
        }
        StoreBackend::Remote => {
            tracing::info!("Remote API: {}", config.api_base_url);
            AppState::with_remote_store(config.clone())
        }
    };

    // Seed events and team
    state.store.initialize().await?;

    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // Persistence API
    let api_routes = Router::new()
        .route("/fundraising/totals", get(api::get_totals))
        .route(
            "/fundraising/donations",
            get(api::list_donations).post(api::record_donation),
        )
        .route("/events", get(api::list_events).post(api::create_event))
        .route("/team", get(api::list_team))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Pages and their forms
    let page_routes = Router::new()
        .route("/", get(pages::show_page))
        .route("/donate", get(pages::show_page))
        .route("/events", get(pages::show_page))
        .route("/about", get(pages::show_page))
        .route("/admin", get(pages::show_page))
        .route("/donate/checkout", post(pages::start_checkout))
        .route("/donate/pledge", post(pages::record_pledge))
        .route("/admin/unlock", post(pages::unlock))
        .route("/admin/donations", post(pages::add_offline_donation))
        .route("/admin/events", post(pages::add_event))
        .route("/selfcheck", post(pages::run_checks));

    // Checkout session endpoint
    let checkout_routes = Router::new().route(
        "/create-checkout-session",
        post(checkout::create_checkout_session).options(checkout::checkout_preflight),
    );

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api/v1", api_routes)
        .merge(page_routes)
        .merge(checkout_routes)
        .merge(health_routes)
        .fallback(pages::show_page)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
