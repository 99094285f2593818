// src/session.rs

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{RngCore, rngs::OsRng};
use tokio::sync::RwLock;

use crate::{
    config::{Config, DEFAULT_SESSION_TTL_SECS},
    error::AppError,
    models::{assessment::Subject, question::Question},
};

/// Payload held for one in-flight assessment: the full question set
/// (canonical answers included) plus the subject it assesses.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    pub subject: Subject,
    pub questions: Vec<Question>,
}

/// Session id: 16 bytes from the OS CSPRNG, base64-encoded. Unguessable;
/// at 128 bits no collision check is needed.
fn new_session_id() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Storage seam between the question-generation call and the later submit
/// call.
///
/// The in-memory implementation below is process-local and therefore
/// single-instance only; a horizontally-scaled deployment must plug in an
/// implementation backed by a shared store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `payload` under a fresh random identifier and returns it.
    async fn create(&self, payload: AssessmentSession) -> String;

    /// Returns a copy of the payload. Unknown ids report `SessionNotFound`;
    /// entries past their TTL report `SessionExpired`.
    async fn get(&self, session_id: &str) -> Result<AssessmentSession, AppError>;

    /// Atomically removes and returns the payload. A session can be taken
    /// at most once; later calls see `SessionNotFound`.
    async fn take(&self, session_id: &str) -> Result<AssessmentSession, AppError>;

    /// Idempotent removal.
    async fn delete(&self, session_id: &str);
}

struct Entry {
    payload: AssessmentSession,
    created_at: Instant,
}

/// Process-local session store guarded by an async RwLock.
///
/// Entries past their TTL become invisible to `get`/`take` immediately and
/// are reclaimed by `purge_expired`, so an abandoned assessment cannot
/// accumulate forever.
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, Entry>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.session_ttl)
    }

    fn is_expired(&self, entry: &Entry) -> bool {
        entry.created_at.elapsed() > self.ttl
    }

    /// Drops every entry past its TTL. Returns the number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.created_at.elapsed() <= self.ttl);
        let removed = before - entries.len();

        if removed > 0 {
            tracing::debug!("Purged {} expired assessment sessions", removed);
        }
        removed
    }

    /// Number of live entries, expired ones included until the next purge.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Spawns a background task that purges expired entries every
    /// `interval`. Abort the returned handle to stop the sweep.
    pub fn start_sweeper(self: Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        let store = self;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                store.purge_expired().await;
            }
        })
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_SESSION_TTL_SECS))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, payload: AssessmentSession) -> String {
        let session_id = new_session_id();
        let entry = Entry {
            payload,
            created_at: Instant::now(),
        };

        self.entries.write().await.insert(session_id.clone(), entry);
        tracing::debug!("Created assessment session {}", session_id);

        session_id
    }

    async fn get(&self, session_id: &str) -> Result<AssessmentSession, AppError> {
        let entries = self.entries.read().await;
        match entries.get(session_id) {
            Some(entry) if self.is_expired(entry) => {
                Err(AppError::SessionExpired(session_id.to_string()))
            }
            Some(entry) => Ok(entry.payload.clone()),
            None => Err(AppError::SessionNotFound(session_id.to_string())),
        }
    }

    async fn take(&self, session_id: &str) -> Result<AssessmentSession, AppError> {
        let mut entries = self.entries.write().await;
        match entries.remove(session_id) {
            Some(entry) if self.is_expired(&entry) => {
                Err(AppError::SessionExpired(session_id.to_string()))
            }
            Some(entry) => Ok(entry.payload),
            None => Err(AppError::SessionNotFound(session_id.to_string())),
        }
    }

    async fn delete(&self, session_id: &str) {
        self.entries.write().await.remove(session_id);
    }
}
