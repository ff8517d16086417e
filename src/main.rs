//! # Chameleon
//!
//! Thin entry point that delegates to the library for server setup.

use chameleon::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    start_server(ServerConfig::default()).await
}
