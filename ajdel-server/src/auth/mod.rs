//! Admin authentication
//!
//! Deliberately thin: the admin portal is protected by a single passcode
//! (compared against [`Config::admin_passcode`]) that trades for an opaque
//! bearer token held in memory. Tokens expire after [`SESSION_TTL`] and a
//! background task sweeps the expired ones out.
//!
//! [`Config::admin_passcode`]: crate::core::Config

use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use dashmap::DashMap;
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::AppError;

/// Sessions live this long after login
pub const SESSION_TTL: Duration = Duration::from_secs(12 * 3600);

/// In-memory session token store
#[derive(Debug)]
pub struct SessionStore {
    tokens: DashMap<String, Instant>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: DashMap::new(),
            ttl,
        }
    }

    /// Mint a fresh token
    pub fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.insert(token.clone(), Instant::now());
        token
    }

    /// Check a token, dropping it if it has expired
    pub fn validate(&self, token: &str) -> bool {
        let expired = match self.tokens.get(token) {
            Some(issued) => issued.elapsed() > self.ttl,
            None => return false,
        };
        if expired {
            self.tokens.remove(token);
            return false;
        }
        true
    }

    /// Logout: returns whether the token existed
    pub fn revoke(&self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }

    /// Drop expired sessions, returning how many were removed
    pub fn sweep(&self) -> usize {
        let before = self.tokens.len();
        self.tokens.retain(|_, issued| issued.elapsed() <= self.ttl);
        before - self.tokens.len()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_TTL)
    }
}

/// Extractor gating admin handlers
///
/// Pulls `Authorization: Bearer <token>` and checks it against the session
/// store; handlers just take an `AdminSession` argument.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

impl FromRequestParts<ServerState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        if state.sessions.validate(token) {
            Ok(AdminSession {
                token: token.to_string(),
            })
        } else {
            Err(AppError::InvalidToken)
        }
    }
}
