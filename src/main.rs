//! Game Lobby Server - Entry Point
//!
//! Starts the room registry actor and serves the HTTP routes.

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lobby_server::{serve, AppState, Config, RegistryHandle};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with environment filter
    // Use RUST_LOG env var to control log level
    // e.g., RUST_LOG=debug or RUST_LOG=lobby_server=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lobby_server=info")),
        )
        .init();

    let config = Config::parse();

    let key = config.session_key()?;
    if config.session_secret.is_none() {
        warn!("SESSION_SECRET not set, sessions will not survive a restart");
    }

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Lobby server listening on {}", addr);

    let registry = RegistryHandle::spawn(config.channel_buffer);
    serve(listener, AppState::new(registry, key)).await?;

    info!("Lobby server stopped");
    Ok(())
}
