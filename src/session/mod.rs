//! Viewer Sessions
//!
//! Every viewer owns a private [`ViewController`](crate::dashboard::ViewController),
//! so slider changes in one browser tab never leak into another.
//!
//! Sessions live in memory only. Idle sessions are evicted by a background
//! sweeper started with [`SessionStore::start_sweeper`].

mod error;
mod store;

pub use error::{SessionError, SessionResult};
pub use store::{Session, SessionConfig, SessionId, SessionSnapshot, SessionStore};
