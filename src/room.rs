//! Room struct definition
//!
//! Represents a lobby room: a host, the players who joined, and who is ready.

use std::collections::HashSet;

use crate::error::RoomError;
use crate::message::RoomSnapshot;
use crate::types::RoomCode;

/// Lobby room
///
/// The host is always the first player and never changes.
/// Ready players are always a subset of the players.
#[derive(Debug)]
pub struct Room {
    /// Room code for identification
    pub code: RoomCode,
    /// Room creator (host)
    pub host: String,
    /// Players in join order, host first
    pub players: Vec<String>,
    /// Players who signaled readiness, in signal order
    pub ready_players: Vec<String>,
}

impl Room {
    /// Create a new room with the given code and host
    pub fn new(code: RoomCode, host: String) -> Self {
        Self {
            code,
            players: vec![host.clone()],
            host,
            ready_players: Vec::new(),
        }
    }

    /// Check if a username is a player in this room
    pub fn contains(&self, username: &str) -> bool {
        self.players.iter().any(|p| p == username)
    }

    pub fn is_host(&self, username: &str) -> bool {
        self.host == username
    }

    pub fn is_ready(&self, username: &str) -> bool {
        self.ready_players.iter().any(|p| p == username)
    }

    /// Add a player to the room
    ///
    /// Returns false if the player was already present.
    pub fn add_player(&mut self, username: String) -> bool {
        if self.contains(&username) {
            false
        } else {
            self.players.push(username);
            true
        }
    }

    /// Mark a player as ready
    ///
    /// Returns whether the player was newly marked.
    pub fn mark_ready(&mut self, username: &str) -> Result<bool, RoomError> {
        if !self.contains(username) {
            return Err(RoomError::NotAPlayer {
                code: self.code.clone(),
                username: username.to_string(),
            });
        }
        if self.is_ready(username) {
            return Ok(false);
        }
        self.ready_players.push(username.to_string());
        Ok(true)
    }

    /// Check whether every non-host player is ready
    ///
    /// Compares the ready set against the players minus the host, so a host
    /// who readied up makes this false.
    pub fn all_ready(&self) -> bool {
        let ready: HashSet<&str> = self.ready_players.iter().map(String::as_str).collect();
        let required: HashSet<&str> = self
            .players
            .iter()
            .map(String::as_str)
            .filter(|p| *p != self.host)
            .collect();
        ready == required
    }

    /// Authorize a game start
    pub fn start(&self, username: &str) -> Result<(), RoomError> {
        if self.is_host(username) {
            Ok(())
        } else {
            Err(RoomError::NotHost {
                code: self.code.clone(),
                username: username.to_string(),
            })
        }
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            code: self.code.clone(),
            host: self.host.clone(),
            players: self.players.clone(),
            ready_players: self.ready_players.clone(),
            all_ready: self.all_ready(),
        }
    }
}
