//! Basic type definitions for the lobby server
//!
//! Provides newtype wrappers for type safety:
//! - `RoomCode`: 6-character uppercase hexadecimal room code

use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of random bytes behind a generated room code (two hex digits each)
const ROOM_CODE_BYTES: usize = 3;

/// Characters escaped when a code is placed in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Room code (6-character uppercase hexadecimal)
///
/// Used to identify and join lobby rooms.
/// Generated randomly or parsed from user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(pub String);

impl RoomCode {
    /// Generate a new random room code
    pub fn generate() -> Self {
        let bytes: [u8; ROOM_CODE_BYTES] = rand::thread_rng().gen();
        let mut code = String::with_capacity(ROOM_CODE_BYTES * 2);
        for byte in bytes {
            let _ = write!(code, "{:02X}", byte);
        }
        Self(code)
    }

    /// Create a RoomCode from typed user input (converts to uppercase)
    pub fn from_input(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    /// Create a RoomCode from a URL path segment, kept verbatim
    pub fn from_path(code: String) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code percent-encoded for use as a single URL path segment
    pub fn path_segment(&self) -> String {
        utf8_percent_encode(&self.0, PATH_SEGMENT).to_string()
    }
}

impl std::fmt::Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
