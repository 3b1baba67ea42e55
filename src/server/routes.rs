//! Route definitions for the API server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Creates the main application router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Aggregates and platform ranking
        .route("/earnings/summary", get(handlers::earnings_summary))
        // Schedule optimization
        .route("/schedule/optimal", get(handlers::optimal_schedule))
        // Point profit queries
        .route("/profit/expected", get(handlers::expected_profit))
        // Financial planning
        .route("/plan", post(handlers::create_plan))
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Add shared state
        .with_state(state)
}
