//! Session error types

use thiserror::Error;

/// Errors raised by the session store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// No session with this id (never created, closed, or evicted)
    #[error("Session not found: {0}")]
    NotFound(String),

    /// The store is at capacity
    #[error("Too many sessions (limit {0})")]
    TooManySessions(usize),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
