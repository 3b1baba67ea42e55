//! REST API surface over the analytics engine
//!
//! The engine itself has no wire protocol; this module is the surrounding
//! application's adapter. Every endpoint fetches one record batch from the
//! provider, runs a pure computation, and returns the result.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use state::AppState;

use crate::json_provider::JsonFileProvider;
use chrono::FixedOffset;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host address (default: "127.0.0.1")
    pub host: String,
    /// Server port (default: 3000)
    pub port: u16,
    /// Path to the JSON earnings file
    pub data_path: String,
    /// Local-time offset from UTC, in minutes, for day/hour derivation
    pub utc_offset_minutes: i32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            data_path: "earnings.json".to_string(),
            utc_offset_minutes: 0,
        }
    }
}

impl ServerConfig {
    /// Creates a new server configuration
    pub fn new(
        host: impl Into<String>,
        port: u16,
        data_path: impl Into<String>,
        utc_offset_minutes: i32,
    ) -> Self {
        ServerConfig {
            host: host.into(),
            port,
            data_path: data_path.into(),
            utc_offset_minutes,
        }
    }
}

/// Runs the API server
///
/// # Arguments
/// * `config` - Server configuration
///
/// # Returns
/// Returns an error if the earnings file cannot be loaded, the configured
/// offset is not a valid UTC offset, or the server fails to start
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    // Load the record source once; it is read-only for the server's lifetime
    let provider = JsonFileProvider::load(&config.data_path)?;

    let tz = FixedOffset::east_opt(config.utc_offset_minutes * 60)
        .ok_or("utc offset must be within -24h..+24h")?;

    // Create application state
    let state = Arc::new(AppState::new(provider, tz));

    // Create router
    let app = routes::create_router(state);

    // Build server address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    // Run server
    axum::serve(listener, app).await?;

    Ok(())
}
