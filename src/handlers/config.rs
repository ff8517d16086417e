use crate::config::Config;
use crate::types::ConfigResponse;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info};

/// Return the client-facing configuration
pub async fn get_config(State(config): State<Config>) -> (StatusCode, Json<ConfigResponse>) {
    info!("[CONFIG] Client configuration request");
    debug!("[CONFIG] bgColor = {}", config.bg_color);

    (
        StatusCode::OK,
        Json(ConfigResponse {
            bg_color: config.bg_color.clone(),
        }),
    )
}
