//! Error types for the lobby server
//!
//! Defines room-level errors returned by the registry and application-level
//! errors surfaced to HTTP clients. Uses thiserror for ergonomic error definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::types::RoomCode;

/// Body returned for unknown room codes
pub const ROOM_NOT_FOUND_BODY: &str = "Room not found!";

/// Room-level errors
///
/// Returned by registry operations. Most of them are swallowed by the HTTP
/// layer, which redirects back to the room page instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    /// Room not found with the given code
    #[error("Room not found: {0}")]
    NotFound(RoomCode),

    /// User is not a player in the room
    #[error("'{username}' is not a player in room {code}")]
    NotAPlayer { code: RoomCode, username: String },

    /// User is not the host of the room
    #[error("'{username}' is not the host of room {code}")]
    NotHost { code: RoomCode, username: String },
}

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error (fatal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Business error from a room operation
    #[error(transparent)]
    Room(#[from] RoomError),

    /// The registry actor stopped (fatal - internal channel broken)
    #[error("Room registry is not running")]
    RegistryClosed,

    /// Configured session secret is unusable
    #[error("Invalid session secret: {0}")]
    SessionKey(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Room(RoomError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, ROOM_NOT_FOUND_BODY).into_response()
            }
            AppError::Room(err) => (StatusCode::FORBIDDEN, err.to_string()).into_response(),
            err => {
                error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
