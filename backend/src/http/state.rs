//! Application state for the HTTP server.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// When the process started serving, for the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
