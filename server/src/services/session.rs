//! Session tokens and the in-memory session store.
//!
//! ARCHITECTURE
//! ============
//! The browser holds an opaque random token in an HttpOnly cookie; the
//! server maps it to the signed-in [`SessionUser`]. Sessions live in process
//! memory with a fixed TTL, so a restart signs everyone out.
//!
//! TRADE-OFFS
//! ==========
//! Expiry is checked lazily on validation, with a periodic sweep to bound
//! memory. The TTL is absolute from sign-in and is not extended by use.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use models::SessionUser;
use rand::Rng;
use tokio::sync::RwLock;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

struct Session {
    user: SessionUser,
    expires_at: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Create a session for `user`, returning the token.
    pub async fn create(&self, user: SessionUser) -> String {
        let token = generate_token();
        let expires_at = Instant::now() + self.ttl;
        self.sessions
            .write()
            .await
            .insert(token.clone(), Session { user, expires_at });
        token
    }

    /// Return the user for a live token; expired tokens are dropped.
    pub async fn validate(&self, token: &str) -> Option<SessionUser> {
        let now = Instant::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if session.expires_at > now => return Some(session.user.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        self.sessions.write().await.remove(token);
        None
    }

    pub async fn delete(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Update the cached display name on every session of `user_id`.
    pub async fn rename(&self, user_id: &str, name: &str) {
        let mut sessions = self.sessions.write().await;
        for session in sessions.values_mut().filter(|s| s.user.id == user_id) {
            session.user.name = name.to_owned();
        }
    }

    /// Drop expired sessions. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        before - sessions.len()
    }
}

/// Periodically purge expired sessions.
pub fn spawn_session_sweeper(store: SessionStore, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let removed = store.purge_expired().await;
            if removed > 0 {
                tracing::debug!(removed, "purged expired sessions");
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
