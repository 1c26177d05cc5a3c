//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between
//! the dashboard page and the server.

use serde::{Deserialize, Serialize};

use crate::chart::Figure;
use crate::model::SolowParams;

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// New slider values
    Update {
        s: f64,
        delta: f64,
        n: f64,
        alpha: f64,
        z: f64,
    },
    /// Ping for keepalive
    Ping,
}

impl ClientMessage {
    /// Parameters carried by an update message
    pub fn params(&self) -> Option<SolowParams> {
        match *self {
            ClientMessage::Update {
                s,
                delta,
                n,
                alpha,
                z,
            } => Some(SolowParams::new(s, delta, n, alpha, z)),
            ClientMessage::Ping => None,
        }
    }
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established, session opened
    Connected {
        session_id: String,
        figure: Figure,
    },
    /// Redrawn chart after an update
    Figure { figure: Figure },
    /// Pong response to ping
    Pong,
    /// Error message; the connection stays open
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update() {
        let msg: ClientMessage = serde_json::from_str(
            r#"{"type": "update", "s": 0.5, "delta": 0.2, "n": 0.09, "alpha": 0.7, "z": 9}"#,
        )
        .unwrap();
        assert_eq!(msg.params(), Some(SolowParams::new(0.5, 0.2, 0.09, 0.7, 9.0)));
    }

    #[test]
    fn test_parse_ping() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "ping"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
        assert!(msg.params().is_none());
    }

    #[test]
    fn test_update_requires_all_fields() {
        let result = serde_json::from_str::<ClientMessage>(r#"{"type": "update", "s": 0.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_server_messages() {
        let json = serde_json::to_value(ServerMessage::Pong).unwrap();
        assert_eq!(json["type"], "pong");

        let json = serde_json::to_value(ServerMessage::Error {
            message: "bad".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], "bad");
    }

    #[test]
    fn test_serialize_figure_message() {
        let figure = crate::dashboard::ViewController::default().figure();
        let json = serde_json::to_value(ServerMessage::Figure { figure }).unwrap();
        assert_eq!(json["type"], "figure");
        assert_eq!(json["figure"]["data"].as_array().unwrap().len(), 4);
    }
}
