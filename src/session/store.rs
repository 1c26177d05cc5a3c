//! In-memory session store

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::error::{SessionError, SessionResult};
use crate::chart::Figure;
use crate::dashboard::ViewController;
use crate::model::SolowParams;

/// Session identifier (uuid v4, hyphenated)
pub type SessionId = String;

/// Session store limits
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum number of live sessions
    pub max_sessions: usize,
    /// Sessions untouched for this long are evicted
    pub idle_timeout: std::time::Duration,
    /// How often the sweeper runs
    pub sweep_interval: std::time::Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            idle_timeout: std::time::Duration::from_secs(3600),
            sweep_interval: std::time::Duration::from_secs(60),
        }
    }
}

/// One viewer's dashboard state
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub controller: ViewController,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    /// Owned by a live connection; never evicted for idleness
    pub pinned: bool,
}

impl Session {
    fn new(benchmark: SolowParams, pinned: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            controller: ViewController::new(benchmark),
            created_at: now,
            last_seen: now,
            pinned,
        }
    }

    fn snapshot(&self, figure: Figure) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id.clone(),
            params: *self.controller.current().params(),
            figure,
        }
    }
}

/// What handlers get back from the store: copied out so no lock is held
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub params: SolowParams,
    pub figure: Figure,
}

/// Owns all live sessions
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    benchmark: SolowParams,
    config: SessionConfig,
}

impl SessionStore {
    pub fn new(benchmark: SolowParams, config: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            benchmark,
            config,
        }
    }

    /// Benchmark parameters every new session is seeded with
    pub fn benchmark(&self) -> &SolowParams {
        &self.benchmark
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Open a new session and return its initial chart
    pub async fn create(&self) -> SessionResult<SessionSnapshot> {
        self.open(false).await
    }

    /// Open a session tied to a connection's lifetime.
    ///
    /// The idle sweeper skips it; the owner must `remove` it on disconnect.
    pub async fn create_pinned(&self) -> SessionResult<SessionSnapshot> {
        self.open(true).await
    }

    async fn open(&self, pinned: bool) -> SessionResult<SessionSnapshot> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            tracing::warn!(limit = self.config.max_sessions, "Session limit reached");
            return Err(SessionError::TooManySessions(self.config.max_sessions));
        }

        let session = Session::new(self.benchmark, pinned);
        let snapshot = session.snapshot(session.controller.figure());
        sessions.insert(session.id.clone(), session);

        tracing::info!(
            session_id = %snapshot.id,
            pinned,
            total = sessions.len(),
            "Session created"
        );
        Ok(snapshot)
    }

    /// Current chart of a session, without a transition hint
    pub async fn figure(&self, id: &str) -> SessionResult<SessionSnapshot> {
        let mut sessions = self.sessions.write().await;
        let session = touch(&mut sessions, id)?;
        Ok(session.snapshot(session.controller.figure()))
    }

    /// Mark a session as active without reading or changing it
    pub async fn touch(&self, id: &str) -> SessionResult<()> {
        let mut sessions = self.sessions.write().await;
        touch(&mut sessions, id).map(|_| ())
    }

    /// Current parameters of a session
    pub async fn params(&self, id: &str) -> SessionResult<SolowParams> {
        let mut sessions = self.sessions.write().await;
        let session = touch(&mut sessions, id)?;
        Ok(*session.controller.current().params())
    }

    /// Apply new parameters to a session and return the redrawn chart
    pub async fn update(&self, id: &str, params: SolowParams) -> SessionResult<SessionSnapshot> {
        let mut sessions = self.sessions.write().await;
        let session = touch(&mut sessions, id)?;
        let figure = session.controller.apply(params);
        Ok(session.snapshot(figure))
    }

    /// Close a session
    pub async fn remove(&self, id: &str) -> SessionResult<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(id).is_none() {
            return Err(SessionError::NotFound(id.to_string()));
        }
        tracing::info!(session_id = %id, remaining = sessions.len(), "Session closed");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop unpinned sessions idle for longer than the configured timeout.
    ///
    /// Returns the number of evicted sessions.
    pub async fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        let timeout = self.config.idle_timeout;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| {
            s.pinned
                || now
                    .signed_duration_since(s.last_seen)
                    .to_std()
                    .map(|idle| idle <= timeout)
                    .unwrap_or(true)
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    /// Run `evict_idle` every `sweep_interval` until the handle is aborted
    pub fn start_sweeper(self: &Arc<Self>) -> JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(store.config.sweep_interval);
            interval.tick().await;
            loop {
                interval.tick().await;
                store.evict_idle(Utc::now()).await;
            }
        })
    }
}

fn touch<'a>(
    sessions: &'a mut HashMap<SessionId, Session>,
    id: &str,
) -> SessionResult<&'a mut Session> {
    let session = sessions
        .get_mut(id)
        .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
    session.last_seen = Utc::now();
    Ok(session)
}
