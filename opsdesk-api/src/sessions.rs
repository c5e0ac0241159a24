//! In-memory session store. Tokens are UUID v4 strings handed out at login
//! and validated on every resource request; expired entries are dropped on
//! the next lookup that touches them.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use actix_web::HttpRequest;

use crate::error::ApiError;

#[derive(Clone)]
pub struct Session {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

pub struct SessionStore {
    ttl: Duration,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            ttl: Duration::minutes(ttl_minutes),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Issue a fresh token for a verified user.
    pub async fn issue(&self, username: &str) -> (String, DateTime<Utc>) {
        let token = uuid::Uuid::new_v4().to_string();
        let expires_at = Utc::now() + self.ttl;
        let session = Session {
            username: username.to_string(),
            expires_at,
        };

        let mut sessions = self.sessions.lock().await;
        sessions.insert(token.clone(), session);
        (token, expires_at)
    }

    /// True if the token exists and has not expired. Expired tokens are
    /// removed as a side effect.
    pub async fn validate(&self, token: &str) -> bool {
        let mut sessions = self.sessions.lock().await;
        match sessions.get(token) {
            Some(session) if Utc::now() < session.expires_at => true,
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }

    /// Drop a session at logout. Returns whether the token was live.
    pub async fn revoke(&self, token: &str) -> bool {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(token).is_some()
    }
}

/// Pull the bearer token from an inbound request.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Gate for every resource handler: a missing, unknown, or expired token
/// fails the request before any outbound call happens.
pub async fn require_session(req: &HttpRequest, sessions: &SessionStore) -> Result<(), ApiError> {
    let token = bearer_token(req)
        .ok_or_else(|| ApiError::Unauthorized("Missing session token".to_string()))?;

    if sessions.validate(token).await {
        Ok(())
    } else {
        Err(ApiError::Unauthorized("Session expired or unknown".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_issue_and_validate() {
        let store = SessionStore::new(60);
        let (token, expires_at) = store.issue("admin").await;

        assert!(expires_at > Utc::now());
        assert!(store.validate(&token).await);
        assert!(!store.validate("not-a-token").await);
    }

    #[tokio::test]
    async fn test_expired_token_is_dropped() {
        let store = SessionStore::new(-1);
        let (token, _) = store.issue("admin").await;

        assert!(!store.validate(&token).await);
        // Removed on first failed lookup, so revoking finds nothing
        assert!(!store.revoke(&token).await);
    }

    #[tokio::test]
    async fn test_revoke_ends_session() {
        let store = SessionStore::new(60);
        let (token, _) = store.issue("admin").await;

        assert!(store.revoke(&token).await);
        assert!(!store.validate(&token).await);
        assert!(!store.revoke(&token).await);
    }
}
