//! Serializable views sent to clients
//!
//! JSON payloads exposed by the HTTP API.

use serde::{Deserialize, Serialize};

use crate::types::RoomCode;

/// Read-only view of a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// Room code
    pub code: RoomCode,
    /// Username of the room creator
    pub host: String,
    /// Players in join order, host first
    pub players: Vec<String>,
    /// Players who signaled readiness
    pub ready_players: Vec<String>,
    /// Every non-host player is ready
    pub all_ready: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_snapshot_serialize() {
        let snapshot = RoomSnapshot {
            code: RoomCode::from_input("a1b2c3"),
            host: "Alice".to_string(),
            players: vec!["Alice".to_string(), "Bob".to_string()],
            ready_players: vec!["Bob".to_string()],
            all_ready: true,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "A1B2C3",
                "host": "Alice",
                "players": ["Alice", "Bob"],
                "ready_players": ["Bob"],
                "all_ready": true,
            })
        );
    }
}
