//! WebSocket endpoint
//!
//! The socket is authenticated at the handshake via a `?token=` query
//! parameter carrying the JWT access token. After the upgrade each
//! connection runs a writer task draining its hub channel onto the wire
//! and a read loop dispatching tagged [`ClientEvent`]s.

use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::{mpsc, oneshot};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    services::{AuthService, MessageService},
    state::AppState,
};

use super::event::{ClientEvent, ServerEvent};

/// Handshake query parameters
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    token: String,
}

/// Upgrade handler; rejects the handshake if the token is invalid
pub async fn ws_handler(
    State(state): State<AppState>,
    Query(query): Query<WsQuery>,
    ws: WebSocketUpgrade,
) -> AppResult<Response> {
    let claims = AuthService::verify_token(&query.token, &state.config().jwt.secret)?;
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user_id)))
}

async fn handle_socket(socket: WebSocket, state: AppState, user_id: Uuid) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerEvent>();
    let (close_tx, mut close_rx) = oneshot::channel::<()>();

    state.hub().register(user_id, tx.clone(), close_tx).await;

    // Initial presence snapshot for the new connection
    let snapshot = ServerEvent::OnlineUsers {
        user_ids: state.hub().online_users().await,
    };
    let _ = tx.send(snapshot);

    // Writer task: drain hub events onto the wire. Ends once every
    // sender is dropped, after the read loop below has exited.
    let writer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize realtime event");
                    continue;
                }
            };
            if ws_tx.send(WsMessage::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    loop {
        // The close signal fires when a newer connection for the same
        // user replaces this one; the stale socket must stop dispatching.
        let message = tokio::select! {
            _ = &mut close_rx => break,
            incoming = ws_rx.next() => match incoming {
                Some(Ok(message)) => message,
                _ => break,
            },
        };

        match message {
            WsMessage::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                Ok(event) => dispatch(&state, user_id, &tx, event).await,
                Err(e) => {
                    tracing::debug!(user_id = %user_id, error = %e, "Malformed client event");
                    let _ = tx.send(ServerEvent::Error {
                        message: format!("Malformed event: {}", e),
                    });
                }
            },
            WsMessage::Close(_) => break,
            // Pings are answered by axum; binary frames are not part of the protocol
            _ => {}
        }
    }

    state.hub().unregister(user_id, &tx).await;
    drop(tx);
    let _ = writer.await;
}

async fn dispatch(
    state: &AppState,
    user_id: Uuid,
    tx: &mpsc::UnboundedSender<ServerEvent>,
    event: ClientEvent,
) {
    let hub = state.hub();

    match event {
        ClientEvent::SendMessage { to, content } => {
            match MessageService::send(state.db(), hub, &user_id, &to, &content).await {
                Ok(message) => {
                    let _ = tx.send(ServerEvent::MessageSent { message });
                }
                Err(e) => {
                    let _ = tx.send(ServerEvent::Error {
                        message: e.to_string(),
                    });
                }
            }
        }

        ClientEvent::Typing { to } => {
            hub.send_to(to, ServerEvent::Typing { from: user_id }).await;
        }

        ClientEvent::StopTyping { to } => {
            hub.send_to(to, ServerEvent::StopTyping { from: user_id })
                .await;
        }

        ClientEvent::JoinRoom { room_id } => {
            hub.join_room(room_id, user_id).await;
        }

        ClientEvent::LeaveRoom { room_id } => {
            hub.leave_room(room_id, user_id).await;
        }

        ClientEvent::CodeChange { room_id, code } => {
            if !hub.in_room(room_id, user_id).await {
                let _ = tx.send(ServerEvent::Error {
                    message: "Not in this room".to_string(),
                });
                return;
            }
            hub.broadcast_room(
                room_id,
                Some(user_id),
                ServerEvent::CodeChange {
                    room_id,
                    user_id,
                    code,
                },
            )
            .await;
        }

        ClientEvent::WhiteboardUpdate { room_id, elements } => {
            if !hub.in_room(room_id, user_id).await {
                let _ = tx.send(ServerEvent::Error {
                    message: "Not in this room".to_string(),
                });
                return;
            }
            hub.broadcast_room(
                room_id,
                Some(user_id),
                ServerEvent::WhiteboardUpdate {
                    room_id,
                    user_id,
                    elements,
                },
            )
            .await;
        }
    }
}
