//! Authentication service - Login, logout and session resolution.
//!
//! A login persists a session row and hands back a signed token naming it;
//! the token alone is never trusted, the row must still exist.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::CredentialHasher;
use crate::config::{Config, SECONDS_PER_HOUR};
use crate::domain::{route_after_login, Principal};
use crate::errors::{AppError, AppResult};
use crate::infra::{SessionRepository, UserRepository};

/// Signed session token payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i32,
    /// Session id
    pub sid: Uuid,
    pub exp: i64,
    pub iat: i64,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub principal: Principal,
    /// Landing route for the principal's role
    pub destination: &'static str,
    /// Session lifetime in seconds
    pub expires_in: i64,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and open a session.
    ///
    /// Unknown users and wrong passwords fail identically.
    async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome>;

    /// Revoke the session named by `token`. Unreadable tokens are ignored.
    async fn logout(&self, token: &str) -> AppResult<()>;

    /// Resolve a session token to its principal; `None` means anonymous.
    async fn authenticate(&self, token: &str) -> AppResult<Option<Principal>>;

    /// Verify token signature and expiry and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    hasher: Arc<CredentialHasher>,
    config: Config,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        hasher: Arc<CredentialHasher>,
        config: Config,
    ) -> Self {
        Self {
            users,
            sessions,
            hasher,
            config,
        }
    }

    fn sign(&self, claims: &Claims) -> AppResult<String> {
        let token = encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;
        Ok(token)
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self.users.find_by_username(username).await?;

        let verified = match &user {
            Some(user) => self.hasher.verify(password, &user.password_hash),
            None => self.hasher.verify_dummy(password),
        };

        let user = match user {
            Some(user) if verified => user,
            _ => {
                tracing::info!(username, "Login failed");
                return Err(AppError::InvalidCredentials);
            }
        };

        let now = Utc::now();
        let purged = self.sessions.purge_expired(now).await?;
        if purged > 0 {
            tracing::debug!(purged, "Expired sessions removed");
        }

        let expires_at = now + Duration::hours(self.config.session_ttl_hours);
        let session = self.sessions.create(user.id, expires_at).await?;

        let claims = Claims {
            sub: user.id,
            sid: session.id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };
        let token = self.sign(&claims)?;

        let principal = user.principal();
        let destination = route_after_login(&principal.roles());
        tracing::info!(user_id = user.id, destination, "Login succeeded");

        Ok(LoginOutcome {
            token,
            principal,
            destination,
            expires_in: self.config.session_ttl_hours * SECONDS_PER_HOUR,
        })
    }

    async fn logout(&self, token: &str) -> AppResult<()> {
        match self.verify_token(token) {
            Ok(claims) => {
                self.sessions.revoke(claims.sid).await?;
                tracing::info!(user_id = claims.sub, "Session revoked");
            }
            Err(e) => tracing::debug!("Logout with unreadable token: {}", e),
        }
        Ok(())
    }

    async fn authenticate(&self, token: &str) -> AppResult<Option<Principal>> {
        let claims = match self.verify_token(token) {
            Ok(claims) => claims,
            Err(_) => return Ok(None),
        };

        if self.sessions.find_active(claims.sid).await?.is_none() {
            return Ok(None);
        }

        // Role comes from the stored user, so directory edits apply immediately
        let user = self.users.find_by_id(claims.sub).await?;
        Ok(user.map(|user| user.principal()))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
