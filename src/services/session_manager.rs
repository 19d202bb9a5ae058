// src/services/session_manager.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use serde_json::Value;
use thiserror::Error;
use tokio::{sync::RwLock, task::JoinHandle};
use uuid::Uuid;

use super::transcript::{Author, Transcript};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(String),
    #[error("transcript encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub transcript: Transcript,
    pub last_active: Instant,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        let now = Instant::now();
        Self { id: id.into(), transcript: Transcript::new(), last_active: now }
    }
}

/// In-memory map from session token to transcript.
///
/// The lock is held for single operations only. Nothing here survives a
/// restart, and sessions idle longer than `ttl` are treated as gone.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // Create a fresh session with an empty transcript and return its token.
    pub async fn create_session(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());

        let mut guard = self.inner.write().await;
        guard.insert(id.clone(), session);
        id
    }

    /// True if the session exists and has not been idle past the ttl.
    pub async fn contains(&self, session_id: &str) -> bool {
        let guard = self.inner.read().await;
        guard.get(session_id).is_some_and(|s| self.is_live(s))
    }

    /// Clear the transcript to empty.
    pub async fn initialize(&self, session_id: &str) -> Result<(), SessionError> {
        self.with_live(session_id, |s| s.transcript.initialize()).await
    }

    /// Clear the transcript and seed it with the manual, under one lock.
    pub async fn reset(&self, session_id: &str, manual: &str) -> Result<usize, SessionError> {
        self.with_live(session_id, |s| {
            s.transcript.initialize();
            s.transcript.append(Author::Admin, manual)
        })
        .await
    }

    // Append a turn and touch last_active. Returns the new transcript length.
    pub async fn append_turn(
        &self,
        session_id: &str,
        author: Author,
        content: impl Into<Value>,
    ) -> Result<usize, SessionError> {
        let content = content.into();
        self.with_live(session_id, |s| s.transcript.append(author, content)).await
    }

    /// Get a copy of the session transcript
    pub async fn transcript(&self, session_id: &str) -> Option<Transcript> {
        let guard = self.inner.read().await;
        guard
            .get(session_id)
            .filter(|s| self.is_live(s))
            .map(|s| s.transcript.clone())
    }

    /// Render the session transcript as its JSON record array.
    pub async fn serialize(&self, session_id: &str) -> Result<String, SessionError> {
        let transcript = self
            .transcript(session_id)
            .await
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;
        Ok(transcript.to_json()?)
    }

    /// Remove a session by id
    pub async fn remove_session(&self, session_id: &str) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(session_id).is_some()
    }

    /// Remove sessions idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let before = guard.len();
        guard.retain(|_, s| self.is_live(s));
        before - guard.len()
    }

    /// Number of sessions, expired ones included until purged
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Purge expired sessions every `every` until the runtime shuts down.
    pub fn spawn_reaper(&self, every: Duration) -> JoinHandle<()> {
        let manager = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let removed = manager.purge_expired().await;
                if removed > 0 {
                    tracing::debug!(removed, "purged expired sessions");
                }
            }
        })
    }

    fn is_live(&self, session: &Session) -> bool {
        session.last_active.elapsed() < self.ttl
    }

    async fn with_live<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, SessionError> {
        let mut guard = self.inner.write().await;
        let ttl = self.ttl;
        match guard.get_mut(session_id) {
            Some(s) if s.last_active.elapsed() < ttl => {
                let out = f(s);
                s.last_active = Instant::now();
                Ok(out)
            }
            _ => Err(SessionError::NotFound(session_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn basic_session_flow() {
        let mgr = SessionManager::new(Duration::from_secs(60));
        let sid = mgr.create_session().await;
        assert!(!sid.is_empty());
        let len = mgr.append_turn(&sid, Author::User, json!({"answer": "hello"})).await.unwrap();
        assert_eq!(len, 1);
        let transcript = mgr.transcript(&sid).await.unwrap();
        assert_eq!(transcript.len(), 1);
        assert!(mgr.remove_session(&sid).await);
    }

    #[tokio::test]
    async fn unknown_session_is_rejected() {
        let mgr = SessionManager::new(Duration::from_secs(60));
        let err = mgr.append_turn("nope", Author::User, json!({})).await.unwrap_err();
        assert!(matches!(err, SessionError::NotFound(id) if id == "nope"));
        assert!(mgr.initialize("nope").await.is_err());
        assert!(mgr.serialize("nope").await.is_err());
    }
}
