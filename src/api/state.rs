//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Per-viewer dashboard sessions
    pub sessions: Arc<SessionStore>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(sessions: Arc<SessionStore>, config: ServerConfig) -> Self {
        Self {
            sessions,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
