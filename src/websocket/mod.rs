//! WebSocket Reactive Updates
//!
//! Each WebSocket connection owns one dashboard session for its lifetime:
//! the session is opened on connect and closed on disconnect.
//!
//! ## Protocol
//!
//! - Server sends `connected` with the session id and the initial chart
//! - Client sends `update` with the five parameters, server answers `figure`
//! - Client may send `ping`, server answers `pong`
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'connected' || msg.type === 'figure') {
//!     Plotly.react('graph', msg.figure.data, msg.figure.layout);
//!   }
//! };
//!
//! ws.send(JSON.stringify({type: 'update', s: 0.5, delta: 0.2, n: 0.09, alpha: 0.7, z: 9}));
//! ```

mod handler;
mod messages;

pub use handler::websocket_handler;
pub use messages::{ClientMessage, ServerMessage};
