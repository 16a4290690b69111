//! HTTP request handlers
//!
//! Each handler receives the registry through [`AppState`] and the caller's
//! username through [`CurrentUser`]. Only unknown room codes on `/join` and
//! the JSON state endpoint are reported as errors; every other invalid
//! request falls back to a redirect.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;
use tracing::debug;

use crate::error::AppError;
use crate::message::RoomSnapshot;
use crate::server::AppState;
use crate::session::{self, CurrentUser};
use crate::types::RoomCode;
use crate::views;

/// Form posted from the landing page
#[derive(Debug, Deserialize)]
pub struct LobbyForm {
    pub username: Option<String>,
}

/// Form posted from the lobby's join box
#[derive(Debug, Deserialize)]
pub struct JoinForm {
    #[serde(default)]
    pub room_code: String,
}

fn room_path(code: &RoomCode) -> String {
    format!("/room/{}", code.path_segment())
}

pub async fn index() -> Html<String> {
    Html(views::index())
}

pub async fn game() -> Html<String> {
    Html(views::game())
}

/// Browser script for the game against the computer
pub async fn game_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        views::GAME_SCRIPT,
    )
}

/// Remember the chosen username and show the lobby
pub async fn lobby(
    jar: SignedCookieJar,
    Form(form): Form<LobbyForm>,
) -> (SignedCookieJar, Html<String>) {
    let page = views::lobby(form.username.as_deref());
    (session::remember(jar, form.username), Html(page))
}

pub async fn play_ai() -> Redirect {
    Redirect::to("/game")
}

/// Join a room by its (case-insensitive) code
pub async fn join(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<JoinForm>,
) -> Result<Redirect, AppError> {
    let code = RoomCode::from_input(&form.room_code);
    state.registry.join(code.clone(), user.into_name()).await?;
    Ok(Redirect::to(&room_path(&code)))
}

/// Create a room hosted by the current user
pub async fn create(State(state): State<AppState>, user: CurrentUser) -> Result<Redirect, AppError> {
    let code = state.registry.create(user.into_name()).await?;
    Ok(Redirect::to(&room_path(&code)))
}

/// Show a room, or go back to the landing page if it does not exist
pub async fn room(
    State(state): State<AppState>,
    Path(code): Path<String>,
    user: CurrentUser,
) -> Result<Response, AppError> {
    let code = RoomCode::from_path(code);
    match state.registry.snapshot(code).await {
        Ok(snapshot) => Ok(Html(views::room(&snapshot, user.name())).into_response()),
        Err(AppError::Room(err)) => {
            debug!("Room page unavailable: {}", err);
            Ok(Redirect::to("/").into_response())
        }
        Err(err) => Err(err),
    }
}

/// Current room state as JSON
pub async fn room_state(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<RoomSnapshot>, AppError> {
    let snapshot = state.registry.snapshot(RoomCode::from_path(code)).await?;
    Ok(Json(snapshot))
}

/// Mark the current user ready, then go back to the room page
pub async fn ready(
    State(state): State<AppState>,
    Path(code): Path<String>,
    user: CurrentUser,
) -> Result<Redirect, AppError> {
    let code = RoomCode::from_path(code);
    match state.registry.mark_ready(code.clone(), user.into_name()).await {
        Ok(_) => {}
        Err(AppError::Room(err)) => debug!("Ready ignored: {}", err),
        Err(err) => return Err(err),
    }
    Ok(Redirect::to(&room_path(&code)))
}

/// Start the game if the current user hosts the room
pub async fn start(
    State(state): State<AppState>,
    Path(code): Path<String>,
    user: CurrentUser,
) -> Result<Response, AppError> {
    let code = RoomCode::from_path(code);
    match state.registry.start(code.clone(), user.into_name()).await {
        Ok(()) => Ok(format!("Game in room {} is starting!", code).into_response()),
        Err(AppError::Room(err)) => {
            debug!("Start rejected: {}", err);
            Ok(Redirect::to(&room_path(&code)).into_response())
        }
        Err(err) => Err(err),
    }
}
