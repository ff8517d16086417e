pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod types;

pub use config::Config;
pub use server::{start_server, ServerConfig};
