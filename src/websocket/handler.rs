//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;

use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::dashboard::Controls;
use crate::session::SessionStore;

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
/// It upgrades the HTTP connection to WebSocket and starts message handling.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let sessions = Arc::clone(&state.sessions);
    ws.on_upgrade(move |socket| handle_socket(socket, sessions))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, sessions: Arc<SessionStore>) {
    let (mut sender, mut receiver) = socket.split();

    let snapshot = match sessions.create_pinned().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open session for WebSocket connection");
            let error_msg = ServerMessage::Error {
                message: e.to_string(),
            };
            let _ = send_message(&mut sender, &error_msg).await;
            return;
        }
    };
    let session_id = snapshot.id;

    let connected_msg = ServerMessage::Connected {
        session_id: session_id.clone(),
        figure: snapshot.figure,
    };
    if !send_message(&mut sender, &connected_msg).await {
        tracing::error!(session_id = %session_id, "Failed to send connected message");
        let _ = sessions.remove(&session_id).await;
        return;
    }

    while let Some(result) = receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(session_id = %session_id, error = %e, "WebSocket receive error");
                break;
            }
        };

        let reply = match message {
            Message::Text(text) => handle_text(&sessions, &session_id, &text).await,
            Message::Binary(_) => Some(ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            }),
            // Axum answers pings itself
            Message::Ping(_) | Message::Pong(_) => None,
            Message::Close(_) => {
                tracing::debug!(session_id = %session_id, "Client requested close");
                break;
            }
        };

        if let Some(reply) = reply {
            if !send_message(&mut sender, &reply).await {
                tracing::debug!(
                    session_id = %session_id,
                    "WebSocket send failed, closing connection"
                );
                break;
            }
        }
    }

    let _ = sessions.remove(&session_id).await;
}

/// Handle a text frame, returning the reply to send
async fn handle_text(
    sessions: &SessionStore,
    session_id: &str,
    text: &str,
) -> Option<ServerMessage> {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(
                session_id = %session_id,
                error = %e,
                text = %text,
                "Invalid client message"
            );
            return Some(ServerMessage::Error {
                message: format!("Invalid message format: {}", e),
            });
        }
    };

    let Some(params) = message.params() else {
        return Some(match sessions.touch(session_id).await {
            Ok(()) => ServerMessage::Pong,
            Err(e) => ServerMessage::Error {
                message: e.to_string(),
            },
        });
    };

    if let Err(e) = Controls::check(&params) {
        return Some(ServerMessage::Error {
            message: e.to_string(),
        });
    }

    match sessions.update(session_id, params).await {
        Ok(snapshot) => Some(ServerMessage::Figure {
            figure: snapshot.figure,
        }),
        Err(e) => {
            tracing::warn!(session_id = %session_id, error = %e, "Update failed");
            Some(ServerMessage::Error {
                message: e.to_string(),
            })
        }
    }
}

/// Serialize and send one message
///
/// Returns false if the message could not be delivered.
async fn send_message(sender: &mut SplitSink<WebSocket, Message>, message: &ServerMessage) -> bool {
    match serde_json::to_string(message) {
        Ok(text) => sender.send(Message::Text(text)).await.is_ok(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize message");
            false
        }
    }
}
