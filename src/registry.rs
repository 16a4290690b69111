//! Room registry actor
//!
//! The central actor that owns every room, keyed by room code.
//! Request handlers talk to it through a cloneable [`RegistryHandle`]; each
//! command carries a `oneshot` sender for the reply. Commands are processed one
//! at a time, so concurrent requests against the same room never interleave.

use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::error::{AppError, RoomError};
use crate::message::RoomSnapshot;
use crate::room::Room;
use crate::types::RoomCode;

/// Commands sent from request handlers to the registry actor
#[derive(Debug)]
pub enum RegistryCommand {
    /// Create a new room hosted by `host`
    Create {
        host: String,
        reply: oneshot::Sender<RoomCode>,
    },
    /// Join an existing room
    Join {
        code: RoomCode,
        username: String,
        reply: oneshot::Sender<Result<(), RoomError>>,
    },
    /// Mark a player as ready
    MarkReady {
        code: RoomCode,
        username: String,
        reply: oneshot::Sender<Result<bool, RoomError>>,
    },
    /// Ask whether every non-host player is ready
    AllReady {
        code: RoomCode,
        reply: oneshot::Sender<Result<bool, RoomError>>,
    },
    /// Start the game (host only)
    Start {
        code: RoomCode,
        username: String,
        reply: oneshot::Sender<Result<(), RoomError>>,
    },
    /// Read a room's current state
    Snapshot {
        code: RoomCode,
        reply: oneshot::Sender<Result<RoomSnapshot, RoomError>>,
    },
}

/// In-memory room table
///
/// Rooms live for the lifetime of the process; nothing is ever removed.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    /// All rooms: RoomCode -> Room
    rooms: HashMap<RoomCode, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the registry event loop
    ///
    /// Continuously receives and processes commands until all handles are dropped.
    pub async fn run(mut self, mut receiver: mpsc::Receiver<RegistryCommand>) {
        info!("Room registry started");

        while let Some(cmd) = receiver.recv().await {
            self.handle_command(cmd);
        }

        info!("Room registry shutting down ({} rooms)", self.rooms.len());
    }

    /// Process a single command
    ///
    /// A dropped reply receiver means the request was abandoned; the
    /// mutation still stands.
    fn handle_command(&mut self, cmd: RegistryCommand) {
        match cmd {
            RegistryCommand::Create { host, reply } => {
                let _ = reply.send(self.create(host));
            }
            RegistryCommand::Join {
                code,
                username,
                reply,
            } => {
                let _ = reply.send(self.join(&code, username));
            }
            RegistryCommand::MarkReady {
                code,
                username,
                reply,
            } => {
                let _ = reply.send(self.mark_ready(&code, &username));
            }
            RegistryCommand::AllReady { code, reply } => {
                let _ = reply.send(self.all_ready(&code));
            }
            RegistryCommand::Start {
                code,
                username,
                reply,
            } => {
                let _ = reply.send(self.start(&code, &username));
            }
            RegistryCommand::Snapshot { code, reply } => {
                let _ = reply.send(self.snapshot(&code));
            }
        }
    }

    /// Create a room under a fresh, unused code
    pub fn create(&mut self, host: String) -> RoomCode {
        let code = loop {
            let code = RoomCode::generate();
            if !self.rooms.contains_key(&code) {
                break code;
            }
        };

        info!("'{}' created room {}", host, code);
        self.rooms.insert(code.clone(), Room::new(code.clone(), host));
        debug!("Total rooms: {}", self.rooms.len());

        code
    }

    /// Join a room; repeat joins are no-ops
    pub fn join(&mut self, code: &RoomCode, username: String) -> Result<(), RoomError> {
        let room = self.room_mut(code)?;
        if room.add_player(username.clone()) {
            info!("'{}' joined room {}", username, code);
        } else {
            debug!("'{}' is already in room {}", username, code);
        }
        Ok(())
    }

    /// Mark a player ready; returns whether they were newly marked
    pub fn mark_ready(&mut self, code: &RoomCode, username: &str) -> Result<bool, RoomError> {
        let newly_ready = self.room_mut(code)?.mark_ready(username)?;
        if newly_ready {
            info!("'{}' is ready in room {}", username, code);
        }
        Ok(newly_ready)
    }

    pub fn all_ready(&self, code: &RoomCode) -> Result<bool, RoomError> {
        Ok(self.room(code)?.all_ready())
    }

    /// Authorize a game start; only the host may start
    pub fn start(&self, code: &RoomCode, username: &str) -> Result<(), RoomError> {
        self.room(code)?.start(username)?;
        info!("'{}' started the game in room {}", username, code);
        Ok(())
    }

    pub fn snapshot(&self, code: &RoomCode) -> Result<RoomSnapshot, RoomError> {
        Ok(self.room(code)?.snapshot())
    }

    pub fn contains(&self, code: &RoomCode) -> bool {
        self.rooms.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn room(&self, code: &RoomCode) -> Result<&Room, RoomError> {
        self.rooms
            .get(code)
            .ok_or_else(|| RoomError::NotFound(code.clone()))
    }

    fn room_mut(&mut self, code: &RoomCode) -> Result<&mut Room, RoomError> {
        self.rooms
            .get_mut(code)
            .ok_or_else(|| RoomError::NotFound(code.clone()))
    }
}

/// Cloneable handle to a running registry actor
#[derive(Debug, Clone)]
pub struct RegistryHandle {
    sender: mpsc::Sender<RegistryCommand>,
}

impl RegistryHandle {
    /// Spawn a registry actor with an empty room table
    pub fn spawn(buffer: usize) -> Self {
        let (sender, receiver) = mpsc::channel(buffer);
        tokio::spawn(RoomRegistry::new().run(receiver));
        Self { sender }
    }

    pub fn new(sender: mpsc::Sender<RegistryCommand>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, host: String) -> Result<RoomCode, AppError> {
        self.request(|reply| RegistryCommand::Create { host, reply })
            .await
    }

    pub async fn join(&self, code: RoomCode, username: String) -> Result<(), AppError> {
        Ok(self
            .request(|reply| RegistryCommand::Join {
                code,
                username,
                reply,
            })
            .await??)
    }

    pub async fn mark_ready(&self, code: RoomCode, username: String) -> Result<bool, AppError> {
        Ok(self
            .request(|reply| RegistryCommand::MarkReady {
                code,
                username,
                reply,
            })
            .await??)
    }

    pub async fn all_ready(&self, code: RoomCode) -> Result<bool, AppError> {
        Ok(self
            .request(|reply| RegistryCommand::AllReady { code, reply })
            .await??)
    }

    pub async fn start(&self, code: RoomCode, username: String) -> Result<(), AppError> {
        Ok(self
            .request(|reply| RegistryCommand::Start {
                code,
                username,
                reply,
            })
            .await??)
    }

    pub async fn snapshot(&self, code: RoomCode) -> Result<RoomSnapshot, AppError> {
        Ok(self
            .request(|reply| RegistryCommand::Snapshot { code, reply })
            .await??)
    }

    /// Send a command and wait for the actor's reply
    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> RegistryCommand,
    ) -> Result<T, AppError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(build(reply))
            .await
            .map_err(|_| AppError::RegistryClosed)?;
        response.await.map_err(|_| AppError::RegistryClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_yields_fresh_code() {
        let mut registry = RoomRegistry::new();
        for _ in 0..100 {
            let before = registry.len();
            let code = registry.create("Alice".to_string());
            assert_eq!(registry.len(), before + 1);
            assert!(registry.contains(&code));
        }
    }

    #[test]
    fn test_join_unknown_room() {
        let mut registry = RoomRegistry::new();
        let code = RoomCode::from_input("ZZZZZZ");

        let err = registry.join(&code, "Bob".to_string()).unwrap_err();
        assert_eq!(err, RoomError::NotFound(code));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_join_idempotent() {
        let mut registry = RoomRegistry::new();
        let code = registry.create("Alice".to_string());

        registry.join(&code, "Bob".to_string()).unwrap();
        registry.join(&code, "Bob".to_string()).unwrap();

        let snapshot = registry.snapshot(&code).unwrap();
        assert_eq!(snapshot.players, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_mark_ready_unknown_room_and_stranger() {
        let mut registry = RoomRegistry::new();
        let code = registry.create("Alice".to_string());

        assert!(matches!(
            registry.mark_ready(&RoomCode::from_input("nope00"), "Alice"),
            Err(RoomError::NotFound(_))
        ));
        assert!(matches!(
            registry.mark_ready(&code, "Mallory"),
            Err(RoomError::NotAPlayer { .. })
        ));
        assert!(registry.snapshot(&code).unwrap().ready_players.is_empty());
    }

    #[test]
    fn test_start_unknown_room() {
        let registry = RoomRegistry::new();
        assert!(matches!(
            registry.start(&RoomCode::from_input("nope00"), "Alice"),
            Err(RoomError::NotFound(_))
        ));
    }

    #[test]
    fn test_lobby_scenario() {
        let mut registry = RoomRegistry::new();
        let code = registry.create("Alice".to_string());

        registry.join(&code, "Bob".to_string()).unwrap();
        let snapshot = registry.snapshot(&code).unwrap();
        assert_eq!(snapshot.players, vec!["Alice", "Bob"]);
        assert_eq!(snapshot.host, "Alice");
        assert!(!registry.all_ready(&code).unwrap());

        assert!(registry.mark_ready(&code, "Bob").unwrap());
        assert!(registry.all_ready(&code).unwrap());

        assert!(matches!(
            registry.start(&code, "Bob"),
            Err(RoomError::NotHost { .. })
        ));
        assert!(registry.start(&code, "Alice").is_ok());
    }

    #[tokio::test]
    async fn test_handle_round_trip() {
        let handle = RegistryHandle::spawn(8);

        let code = handle.create("Alice".to_string()).await.unwrap();
        handle.join(code.clone(), "Bob".to_string()).await.unwrap();
        assert!(handle.mark_ready(code.clone(), "Bob".to_string()).await.unwrap());
        assert!(handle.all_ready(code.clone()).await.unwrap());
        assert!(handle.start(code.clone(), "Alice".to_string()).await.is_ok());

        let err = handle
            .join(RoomCode::from_input("nope00"), "Bob".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Room(RoomError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_handle_concurrent_joins() {
        let handle = RegistryHandle::spawn(64);
        let code = handle.create("Alice".to_string()).await.unwrap();

        let mut tasks = Vec::new();
        for i in 0..20 {
            let handle = handle.clone();
            let code = code.clone();
            tasks.push(tokio::spawn(async move {
                handle.join(code, format!("player{}", i % 5)).await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let snapshot = handle.snapshot(code).await.unwrap();
        assert_eq!(snapshot.players.len(), 6);
    }

    #[tokio::test]
    async fn test_handle_closed_registry() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);
        let handle = RegistryHandle::new(sender);

        let err = handle.create("Alice".to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::RegistryClosed));
    }
}
