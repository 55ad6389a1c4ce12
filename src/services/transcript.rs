// src/services/transcript.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of a widget conversation.
#[derive(Clone, Debug)]
pub struct Turn {
    pub role: ChatRole,
    pub content: String,
    pub at: Instant,
}

#[derive(Clone, Debug)]
struct Session {
    turns: Vec<Turn>,
    last_active: Instant,
}

impl Session {
    fn new() -> Self {
        let now = Instant::now();
        Self { turns: Vec::new(), last_active: now }
    }
}

/// In-memory conversation transcripts, one per widget session. Nothing is
/// written to disk; a page reload starts a fresh session.
#[derive(Clone)]
pub struct TranscriptStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Debug for TranscriptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptStore")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TranscriptStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    // Start a fresh session and return its id.
    pub async fn create_session(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let mut guard = self.inner.write().await;
        guard.insert(id.clone(), Session::new());
        id
    }

    // Make sure a session with this id exists.
    pub async fn ensure_session(&self, id: &str) -> String {
        {
            let guard = self.inner.read().await;
            if guard.contains_key(id) {
                return id.to_string();
            }
        }
        let mut guard = self.inner.write().await;
        guard.entry(id.to_string()).or_insert_with(Session::new);
        id.to_string()
    }

    // Append a turn to a session's transcript and touch last_active.
    pub async fn append(&self, session_id: &str, role: ChatRole, content: impl Into<String>) -> usize {
        let mut guard = self.inner.write().await;
        let entry = guard
            .entry(session_id.to_string())
            .or_insert_with(Session::new);
        entry.turns.push(Turn {
            role,
            content: content.into(),
            at: Instant::now(),
        });
        entry.last_active = Instant::now();
        entry.turns.len()
    }

    /// Get a copy of the session transcript, oldest turn first.
    pub async fn history(&self, session_id: &str) -> Option<Vec<Turn>> {
        let guard = self.inner.read().await;
        guard.get(session_id).map(|s| s.turns.clone())
    }

    /// Remove a session by id.
    pub async fn remove(&self, session_id: &str) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(session_id).is_some()
    }

    /// Remove sessions idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, s| now.duration_since(s.last_active) < self.ttl);
        before - guard.len()
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }
}
