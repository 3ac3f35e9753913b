//! Realtime wire events
//!
//! Events are tagged JSON objects exchanged over the WebSocket channel,
//! e.g. `{"type": "send_message", "to": "...", "content": "hi"}`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Message;

/// Events sent by a connected client
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Send a direct message to another user
    SendMessage { to: Uuid, content: String },

    /// Notify a peer that the sender started typing
    Typing { to: Uuid },

    /// Notify a peer that the sender stopped typing
    StopTyping { to: Uuid },

    /// Join a collaborative session room
    JoinRoom { room_id: Uuid },

    /// Leave a collaborative session room
    LeaveRoom { room_id: Uuid },

    /// Broadcast a code document update to the room (last-write-wins)
    CodeChange { room_id: Uuid, code: String },

    /// Broadcast a whiteboard update to the room (last-write-wins)
    WhiteboardUpdate {
        room_id: Uuid,
        elements: serde_json::Value,
    },
}

/// Events sent by the server to connected clients
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A direct message delivered to its recipient
    Message { message: Message },

    /// Acknowledgement copy of a sent message, delivered to the sender
    MessageSent { message: Message },

    /// A peer started typing
    Typing { from: Uuid },

    /// A peer stopped typing
    StopTyping { from: Uuid },

    /// A user's online state changed
    Presence { user_id: Uuid, online: bool },

    /// Snapshot of currently connected users, sent once on connect
    OnlineUsers { user_ids: Vec<Uuid> },

    /// A user joined a collaborative session room
    UserJoined { room_id: Uuid, user_id: Uuid },

    /// A user left a collaborative session room
    UserLeft { room_id: Uuid, user_id: Uuid },

    /// Code document update fan-out (excludes the sender)
    CodeChange {
        room_id: Uuid,
        user_id: Uuid,
        code: String,
    },

    /// Whiteboard update fan-out (excludes the sender)
    WhiteboardUpdate {
        room_id: Uuid,
        user_id: Uuid,
        elements: serde_json::Value,
    },

    /// A malformed or rejected client event
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_event_deserializes_tagged_json() {
        let raw = r#"{"type": "typing", "to": "550e8400-e29b-41d4-a716-446655440000"}"#;
        let event: ClientEvent = serde_json::from_str(raw).unwrap();
        match event {
            ClientEvent::Typing { to } => {
                assert_eq!(to.to_string(), "550e8400-e29b-41d4-a716-446655440000");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_code_change_round_trip_fields() {
        let raw = r#"{"type": "code_change", "room_id": "550e8400-e29b-41d4-a716-446655440000", "code": "fn main() {}"}"#;
        let event: ClientEvent = serde_json::from_str(raw).unwrap();
        match event {
            ClientEvent::CodeChange { code, .. } => assert_eq!(code, "fn main() {}"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_server_event_serializes_with_type_tag() {
        let event = ServerEvent::Presence {
            user_id: Uuid::nil(),
            online: true,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "presence");
        assert_eq!(json["online"], true);
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        let raw = r#"{"type": "shutdown_server"}"#;
        assert!(serde_json::from_str::<ClientEvent>(raw).is_err());
    }
}
