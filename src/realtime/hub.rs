//! In-process connection hub
//!
//! Tracks which users are connected (presence) and which collaborative
//! session rooms they have joined. Each connection is represented by the
//! sending half of an unbounded channel; the socket task owns the
//! receiving half and forwards events onto the wire.
//!
//! Presence lives only in this process and is evicted on disconnect.
//! Room membership here is ephemeral and independent of the persisted
//! `room_participants` table.

use std::collections::{HashMap, HashSet};

use tokio::sync::{mpsc, oneshot, RwLock};
use uuid::Uuid;

use super::event::ServerEvent;

/// Sender half of a connection's outbound event channel
pub type ConnectionSender = mpsc::UnboundedSender<ServerEvent>;

/// A registered connection: its event sender plus the signal that tells
/// the socket tasks to shut down when the connection is replaced
struct Connection {
    sender: ConnectionSender,
    close: oneshot::Sender<()>,
}

/// Shared realtime hub
#[derive(Default)]
pub struct Hub {
    /// user_id -> active connection for that user
    connections: RwLock<HashMap<Uuid, Connection>>,

    /// room_id -> user_ids currently joined over the socket
    rooms: RwLock<HashMap<Uuid, HashSet<Uuid>>>,
}

impl Hub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection for a user, announcing presence to everyone else.
    ///
    /// A second connection for the same user replaces the first: the old
    /// connection's close signal is fired, which tears down its socket.
    pub async fn register(&self, user_id: Uuid, tx: ConnectionSender, close: oneshot::Sender<()>) {
        let previous = {
            let mut connections = self.connections.write().await;
            connections.insert(user_id, Connection { sender: tx, close })
        };

        if let Some(old) = previous {
            let _ = old.close.send(());
            tracing::debug!(user_id = %user_id, "Replaced existing realtime connection");
        } else {
            self.broadcast_except(
                user_id,
                ServerEvent::Presence {
                    user_id,
                    online: true,
                },
            )
            .await;
        }

        tracing::info!(user_id = %user_id, "User connected to realtime hub");
    }

    /// Remove a user's connection and evict them from all rooms.
    ///
    /// `tx` identifies the connection being torn down; if the user has
    /// since reconnected, the newer connection is left untouched.
    pub async fn unregister(&self, user_id: Uuid, tx: &ConnectionSender) {
        let removed = {
            let mut connections = self.connections.write().await;
            match connections.get(&user_id) {
                Some(current) if current.sender.same_channel(tx) => {
                    connections.remove(&user_id);
                    true
                }
                _ => false,
            }
        };

        if !removed {
            return;
        }

        // Drop ephemeral room membership and notify remaining members
        let left_rooms: Vec<Uuid> = {
            let mut rooms = self.rooms.write().await;
            let mut left = Vec::new();
            rooms.retain(|room_id, members| {
                if members.remove(&user_id) {
                    left.push(*room_id);
                }
                !members.is_empty()
            });
            left
        };

        for room_id in left_rooms {
            self.broadcast_room(room_id, Some(user_id), ServerEvent::UserLeft { room_id, user_id })
                .await;
        }

        self.broadcast_except(
            user_id,
            ServerEvent::Presence {
                user_id,
                online: false,
            },
        )
        .await;

        tracing::info!(user_id = %user_id, "User disconnected from realtime hub");
    }

    /// Deliver an event to a single user, if connected
    pub async fn send_to(&self, user_id: Uuid, event: ServerEvent) -> bool {
        let connections = self.connections.read().await;
        match connections.get(&user_id) {
            Some(connection) => connection.sender.send(event).is_ok(),
            None => false,
        }
    }

    /// Whether a user currently has a connection
    pub async fn is_online(&self, user_id: Uuid) -> bool {
        self.connections.read().await.contains_key(&user_id)
    }

    /// Snapshot of all connected user ids
    pub async fn online_users(&self) -> Vec<Uuid> {
        self.connections.read().await.keys().copied().collect()
    }

    /// Number of connected users
    pub async fn online_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Add a user to a session room and notify existing members
    pub async fn join_room(&self, room_id: Uuid, user_id: Uuid) {
        {
            let mut rooms = self.rooms.write().await;
            rooms.entry(room_id).or_default().insert(user_id);
        }
        self.broadcast_room(room_id, Some(user_id), ServerEvent::UserJoined { room_id, user_id })
            .await;
    }

    /// Remove a user from a session room and notify remaining members
    pub async fn leave_room(&self, room_id: Uuid, user_id: Uuid) {
        let was_member = {
            let mut rooms = self.rooms.write().await;
            match rooms.get_mut(&room_id) {
                Some(members) => {
                    let removed = members.remove(&user_id);
                    if members.is_empty() {
                        rooms.remove(&room_id);
                    }
                    removed
                }
                None => false,
            }
        };

        if was_member {
            self.broadcast_room(room_id, Some(user_id), ServerEvent::UserLeft { room_id, user_id })
                .await;
        }
    }

    /// Whether a user has joined a session room over the socket
    pub async fn in_room(&self, room_id: Uuid, user_id: Uuid) -> bool {
        self.rooms
            .read()
            .await
            .get(&room_id)
            .is_some_and(|members| members.contains(&user_id))
    }

    /// Fan an event out to all members of a room, optionally excluding one
    pub async fn broadcast_room(&self, room_id: Uuid, except: Option<Uuid>, event: ServerEvent) {
        let members: Vec<Uuid> = {
            let rooms = self.rooms.read().await;
            match rooms.get(&room_id) {
                Some(members) => members
                    .iter()
                    .copied()
                    .filter(|id| Some(*id) != except)
                    .collect(),
                None => return,
            }
        };

        let connections = self.connections.read().await;
        for member in members {
            if let Some(connection) = connections.get(&member) {
                // A closed channel just means the member is tearing down
                let _ = connection.sender.send(event.clone());
            }
        }
    }

    /// Deliver an event to every connection except one user
    async fn broadcast_except(&self, except: Uuid, event: ServerEvent) {
        let connections = self.connections.read().await;
        for (user_id, connection) in connections.iter() {
            if *user_id != except {
                let _ = connection.sender.send(event.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn connect(
        hub: &Hub,
        user_id: Uuid,
    ) -> (
        ConnectionSender,
        mpsc::UnboundedReceiver<ServerEvent>,
        oneshot::Receiver<()>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (close_tx, close_rx) = oneshot::channel();
        hub.register(user_id, tx.clone(), close_tx).await;
        (tx, rx, close_rx)
    }

    #[tokio::test]
    async fn test_register_and_presence() {
        let hub = Hub::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let (_alice_tx, mut alice_rx, _alice_close) = connect(&hub, alice).await;
        let (_bob_tx, _bob_rx, _bob_close) = connect(&hub, bob).await;

        // Alice sees Bob come online
        match alice_rx.recv().await.unwrap() {
            ServerEvent::Presence { user_id, online } => {
                assert_eq!(user_id, bob);
                assert!(online);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        assert!(hub.is_online(alice).await);
        assert_eq!(hub.online_count().await, 2);
    }

    #[tokio::test]
    async fn test_duplicate_connection_replaces_previous() {
        let hub = Hub::new();
        let alice = Uuid::new_v4();

        let (first_tx, _first_rx, mut first_close) = connect(&hub, alice).await;
        let (second_tx, mut second_rx, mut second_close) = connect(&hub, alice).await;

        // The replaced connection gets the shutdown signal, the new one does not
        assert!(first_close.try_recv().is_ok());
        assert!(second_close.try_recv().is_err());

        // Unregistering the stale connection must not evict the new one
        hub.unregister(alice, &first_tx).await;
        assert!(hub.is_online(alice).await);

        assert!(
            hub.send_to(
                alice,
                ServerEvent::Presence {
                    user_id: alice,
                    online: true
                }
            )
            .await
        );
        assert!(second_rx.recv().await.is_some());

        hub.unregister(alice, &second_tx).await;
        assert!(!hub.is_online(alice).await);
    }

    #[tokio::test]
    async fn test_room_fan_out_excludes_sender() {
        let hub = Hub::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let room = Uuid::new_v4();

        let (_alice_tx, mut alice_rx, _alice_close) = connect(&hub, alice).await;
        let (_bob_tx, mut bob_rx, _bob_close) = connect(&hub, bob).await;
        // Drain Alice's presence notification for Bob
        let _ = alice_rx.recv().await;

        hub.join_room(room, alice).await;
        hub.join_room(room, bob).await;

        // Alice is told Bob joined
        match alice_rx.recv().await.unwrap() {
            ServerEvent::UserJoined { user_id, .. } => assert_eq!(user_id, bob),
            other => panic!("unexpected event: {:?}", other),
        }

        hub.broadcast_room(
            room,
            Some(alice),
            ServerEvent::CodeChange {
                room_id: room,
                user_id: alice,
                code: "x".into(),
            },
        )
        .await;

        match bob_rx.recv().await.unwrap() {
            ServerEvent::CodeChange { user_id, .. } => assert_eq!(user_id, alice),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(alice_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_disconnect_evicts_room_membership() {
        let hub = Hub::new();
        let alice = Uuid::new_v4();
        let room = Uuid::new_v4();

        let (tx, _rx, _close) = connect(&hub, alice).await;
        hub.join_room(room, alice).await;
        assert!(hub.in_room(room, alice).await);

        hub.unregister(alice, &tx).await;
        assert!(!hub.in_room(room, alice).await);
        assert!(!hub.is_online(alice).await);
    }
}
