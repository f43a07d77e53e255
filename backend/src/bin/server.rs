//! Rail advisor HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin rail-advisor-server
//!
//! # Custom bind address and verbose logs
//! HOST=127.0.0.1 PORT=8080 RUST_LOG=debug cargo run --bin rail-advisor-server
//! ```
//!
//! # Environment Variables
//!
//! - `RAIL_ADVISOR_CONFIG`: Path to a TOML config file (default: `advisor.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 6000)
//! - `RUST_LOG`: Log level (default: info)

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rail_advisor::config::ServerConfig;
use rail_advisor::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(config.log_level.parse().unwrap_or(Level::INFO))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting rail advisor HTTP server");

    let addr = config.bind_addr()?;
    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
