//! Per-request session context
//!
//! The username chosen on the landing page lives in a signed cookie. Handlers
//! receive it explicitly through the [`CurrentUser`] extractor.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, SignedCookieJar};

/// Cookie holding the session username
pub const USERNAME_COOKIE: &str = "username";

/// The username attached to the current request, if any
///
/// Missing or tampered cookies yield `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentUser(pub Option<String>);

impl CurrentUser {
    /// Username used for room operations
    ///
    /// A visitor who never picked a name acts as the empty username.
    pub fn name(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }

    pub fn into_name(self) -> String {
        self.0.unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state).await?;
        Ok(Self(
            jar.get(USERNAME_COOKIE)
                .map(|cookie| cookie.value().to_string()),
        ))
    }
}

/// Store `username` in the session, or clear it when absent
pub fn remember(jar: SignedCookieJar, username: Option<String>) -> SignedCookieJar {
    match username {
        Some(username) => jar.add(
            Cookie::build((USERNAME_COOKIE, username))
                .path("/")
                .http_only(true),
        ),
        None => jar.remove(Cookie::build(USERNAME_COOKIE).path("/")),
    }
}
