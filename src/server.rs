//! HTTP server wiring
//!
//! Builds the axum router over the shared [`AppState`] and serves it until
//! Ctrl-C.

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::cookie::Key;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::AppError;
use crate::handler;
use crate::registry::RegistryHandle;

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Handle to the room registry actor
    pub registry: RegistryHandle,
    /// Signing key for session cookies
    pub key: Key,
}

impl AppState {
    pub fn new(registry: RegistryHandle, key: Key) -> Self {
        Self { registry, key }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route("/game", get(handler::game))
        .route("/static/game.js", get(handler::game_script))
        .route("/lobby", post(handler::lobby))
        .route("/play_ai", post(handler::play_ai))
        .route("/join", post(handler::join))
        .route("/create", post(handler::create))
        .route("/room/{code}", get(handler::room))
        .route("/room/{code}/state", get(handler::room_state))
        .route("/ready/{code}", post(handler::ready))
        .route("/start/{code}", post(handler::start))
        .with_state(state)
}

/// Serve the application on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until the process is killed.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
