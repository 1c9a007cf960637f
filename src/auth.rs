//! Admin authentication.
//!
//! The admin surface sits behind a single credential pair from configuration.
//! A successful login mints an opaque bearer token with a TTL; every admin
//! mutation route extracts an [`AdminSession`], which validates the token
//! against the in-memory session store.

use crate::clock::Clock;
use crate::config::AdminConfig;
use crate::error::AppError;
use crate::server::state::AppState;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

/// Live admin sessions, token → expiry.
pub struct AdminSessions {
    credentials: AdminConfig,
    clock: Arc<dyn Clock>,
    tokens: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl AdminSessions {
    /// Creates an empty session store for the configured credentials.
    #[must_use]
    pub fn new(credentials: AdminConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            credentials,
            clock,
            tokens: Mutex::new(HashMap::new()),
        }
    }

    /// Checks the credential pair and mints a session token.
    ///
    /// # Errors
    ///
    /// `AppError::Unauthorized` when the credentials do not match.
    pub fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        if email != self.credentials.email || password != self.credentials.password {
            return Err(AppError::unauthorized("invalid credentials"));
        }
        let token = Uuid::new_v4().to_string();
        let ttl = i64::try_from(self.credentials.session_ttl).unwrap_or(i64::MAX);
        let expires_at = self.clock.now() + Duration::seconds(ttl);
        self.lock().insert(token.clone(), expires_at);
        tracing::info!(email, "admin login");
        Ok(token)
    }

    /// Validates a bearer token, pruning it if expired.
    ///
    /// # Errors
    ///
    /// `AppError::Unauthorized` when the token is unknown or expired.
    pub fn validate(&self, token: &str) -> Result<(), AppError> {
        let now = self.clock.now();
        let mut tokens = self.lock();
        match tokens.get(token) {
            Some(expires_at) if *expires_at > now => Ok(()),
            Some(_) => {
                tokens.remove(token);
                Err(AppError::unauthorized("session expired"))
            }
            None => Err(AppError::unauthorized("invalid session token")),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, DateTime<Utc>>> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Admin email
    pub email: String,
    /// Admin password
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent admin requests
    pub token: String,
}

/// A validated admin session, extracted from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The validated token
    pub token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("expected 'Bearer <token>'"))?;
        if token.is_empty() {
            return Err(AppError::unauthorized("empty bearer token"));
        }

        state.admin.validate(token)?;
        Ok(Self {
            token: token.to_string(),
        })
    }
}
