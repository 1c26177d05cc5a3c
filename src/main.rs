//! Solow Dashboard Server
//!
//! Run with: cargo run --bin solow-dashboard
//!
//! # Configuration
//!
//! Read from `$SOLOW_CONFIG`, `~/.config/solow-dashboard/config.toml` or
//! `./config.toml`, then overridden by environment variables:
//! - `SOLOW_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SOLOW_PORT` / `PORT`: Port to listen on (default: 8050)
//! - `SOLOW_MAX_SESSIONS`: Concurrent viewer limit (default: 1000)
//! - `SOLOW_LOG_LEVEL`, `SOLOW_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Full tracing filter, wins over `SOLOW_LOG_LEVEL`

use solow_dashboard::api::{serve, AppState};
use solow_dashboard::config::Config;
use solow_dashboard::logging;
use solow_dashboard::session::SessionStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    logging::init(&config.logging);

    tracing::info!("Starting Solow dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        s = config.benchmark.s,
        delta = config.benchmark.delta,
        n = config.benchmark.n,
        alpha = config.benchmark.alpha,
        z = config.benchmark.z,
        "Benchmark parameters"
    );

    let sessions = Arc::new(SessionStore::new(
        config.benchmark,
        config.sessions.to_session_config(),
    ));
    let sweeper = sessions.start_sweeper();

    let state = AppState::new(Arc::clone(&sessions), config.server.clone());
    serve(state, &config.server).await?;

    sweeper.abort();
    tracing::info!(open_sessions = sessions.len().await, "Solow dashboard stopped");

    Ok(())
}
