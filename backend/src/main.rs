//! Sandbox Backend
//!
//! Player profiles, inventories and server topology for the proxy and hub servers,
//! persisted in a single JSON player file.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod notify;
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

use config::Config;
use notify::ReadyNotifier;
use store::PlayerStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlayerStore>,
    pub notifier: Arc<ReadyNotifier>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sandbox Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.api_key.is_none() {
        tracing::warn!("No API key configured (SANDBOX_API_KEY). Authentication is disabled!");
    }
    if config.strict_ranks {
        tracing::info!("Strict rank validation enabled");
    }

    let store = Arc::new(PlayerStore::open(&config.players_path).await?);
    let player_count = store.load_all().await?.len();
    tracing::info!("Loaded {} player records from {:?}", player_count, store.path());

    let notifier = Arc::new(ReadyNotifier::new(
        config.peer_url.clone(),
        config.peer_api_key.clone(),
    )?);
    tracing::info!("Peer endpoint: {}", notifier.endpoint());

    let state = AppState {
        store,
        notifier,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_key = state.config.api_key.clone();

    let api_routes = Router::new()
        // Players
        .route("/players/{uuid}", get(api::get_player))
        .route("/players/setrank/{uuid}", post(api::set_rank))
        .route("/players/inv/{uuid}", get(api::get_inventory))
        .route(
            "/players/setinvcontents/{uuid}",
            post(api::set_inventory_contents),
        )
        .route(
            "/players/setarmorcontents/{uuid}",
            post(api::set_armor_contents),
        )
        // Servers
        .route("/servers/list", get(api::list_servers))
        .route("/servers/proxyready", post(api::proxy_ready))
        .layer(middleware::from_fn(move |req, next| {
            auth::api_key_auth_layer(api_key.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
