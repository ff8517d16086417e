//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! This module provides the main server setup function that creates the Axum
//! router, registers the API routes, mounts the static asset directory, and
//! starts the HTTP server.

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::handlers;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

/// Server configuration
pub struct ServerConfig {
    /// Directory of static assets, served 1:1 by path
    pub public_dir: &'static str,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            public_dir: "public",
        }
    }
}

/// Initialize and start the HTTP server
///
/// Reads the application configuration from the environment, binds the
/// listener, and serves until the process is stopped.
///
/// # Errors
///
/// This function will return an error if:
/// - `PORT` is set but not a valid port number
/// - Binding the listener fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    dotenvy::dotenv().ok();

    info!("Loading configuration...");
    let app_config = Config::from_env()?;
    info!("Background color: {}", app_config.bg_color);

    let bind_address = format!("127.0.0.1:{}", app_config.port);
    let state = AppState { config: app_config };
    let app = create_router(state, config.public_dir);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(" SERVER READY: http://{}", bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the main application router with all routes
///
/// Unmatched paths fall through to the static asset directory, which serves
/// `index.html` for `/` and emits a plain 404 for anything it cannot find.
pub fn create_router(state: AppState, public_dir: &str) -> Router {
    Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
}

/// Log server information
fn log_server_info() {
    info!("ROUTES:");
    info!("   • GET  /            -> static index page");
    info!("   • GET  /api/config  -> client configuration (bgColor)");
    info!("   • GET  /health      -> liveness check");
}
