//! Game Lobby Server Library
//!
//! A small HTTP server built with axum for gathering players before a game:
//! pick a name, create or join a room by code, mark yourself ready, and let
//! the host start.
//!
//! # Features
//! - Username stored in a signed session cookie
//! - Room creation with 6-character hexadecimal codes
//! - Idempotent room joining (codes are case-insensitive)
//! - Ready marks and an all-ready check that excludes the host
//! - Host-only game start
//! - JSON room state at `/room/<code>/state`
//!
//! # Architecture
//! Uses the Actor pattern with `mpsc` channels:
//! - `RoomRegistry` is the actor owning every room
//! - Request handlers talk to it through a cloneable `RegistryHandle`
//! - No locks needed - all state access goes through message passing
//!
//! # Example
//! ```ignore
//! use axum_extra::extract::cookie::Key;
//! use tokio::net::TcpListener;
//! use lobby_server::{serve, AppState, RegistryHandle};
//!
//! #[tokio::main]
//! async fn main() {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await.unwrap();
//!     let state = AppState::new(RegistryHandle::spawn(256), Key::generate());
//!     serve(listener, state).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod message;
pub mod registry;
pub mod room;
pub mod server;
pub mod session;
pub mod types;
pub mod views;

// Re-export main types for convenience
pub use config::Config;
pub use error::{AppError, RoomError};
pub use message::RoomSnapshot;
pub use registry::{RegistryCommand, RegistryHandle, RoomRegistry};
pub use room::Room;
pub use server::{router, serve, AppState};
pub use session::CurrentUser;
pub use types::RoomCode;
