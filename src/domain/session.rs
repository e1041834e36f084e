//! Admin sessions backing the `admin_session` cookie.
//!
//! [`SessionStore`] keeps issued session tokens in a `RwLock<HashMap>`
//! keyed by [`SessionToken`], each with an absolute expiry. Expired
//! sessions are dropped lazily on lookup and by [`SessionStore::purge_expired`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Opaque session identifier handed to the browser.
///
/// Wraps a UUID v4 so tokens are unguessable and cannot be confused with
/// other identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(uuid::Uuid);

impl SessionToken {
    /// Creates a new random token (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Server-side registry of live admin sessions.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<SessionToken, DateTime<Utc>>>,
}

impl SessionStore {
    /// Creates an empty store whose sessions live for `ttl_secs` seconds.
    #[must_use]
    pub fn new(ttl_secs: u64) -> Self {
        let secs = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            ttl: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Session lifetime in whole seconds, as used for the cookie `Max-Age`.
    #[must_use]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Issues a new session token valid until now + TTL.
    pub async fn create(&self) -> SessionToken {
        self.create_at(Utc::now()).await
    }

    async fn create_at(&self, now: DateTime<Utc>) -> SessionToken {
        let token = SessionToken::new();
        let expires_at = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.sessions.write().await.insert(token, expires_at);
        token
    }

    /// Returns `true` if `token` names a live session. Expired sessions are
    /// removed as a side effect.
    pub async fn is_valid(&self, token: SessionToken) -> bool {
        self.is_valid_at(token, Utc::now()).await
    }

    async fn is_valid_at(&self, token: SessionToken, now: DateTime<Utc>) -> bool {
        let expires_at = self.sessions.read().await.get(&token).copied();
        match expires_at {
            Some(expires_at) if expires_at > now => true,
            Some(_) => {
                self.sessions.write().await.remove(&token);
                false
            }
            None => false,
        }
    }

    /// Revokes a session. Returns `true` if it existed.
    pub async fn revoke(&self, token: SessionToken) -> bool {
        self.sessions.write().await.remove(&token).is_some()
    }

    /// Drops every expired session, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut map = self.sessions.write().await;
        let before = map.len();
        map.retain(|_, expires_at| *expires_at > now);
        before - map.len()
    }

    /// Returns the number of stored sessions, including not-yet-purged
    /// expired ones.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns `true` if no sessions are stored.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
