//! Shared application state for the API server

use crate::earnings::EarningsProvider;
use chrono::FixedOffset;
use std::sync::Arc;

/// Shared application state
///
/// The record source is read-only for the lifetime of the server, so no
/// locking is needed around it; every analytics call is a pure computation
/// over the batch the provider returns.
#[derive(Clone)]
pub struct AppState {
    /// Record source the engine consumes from
    pub provider: Arc<dyn EarningsProvider + Send + Sync>,
    /// Time zone used for day-of-week and hour derivation
    pub tz: FixedOffset,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(provider: impl EarningsProvider + Send + Sync + 'static, tz: FixedOffset) -> Self {
        AppState {
            provider: Arc::new(provider),
            tz,
        }
    }
}
