//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_SESSION_TTL_HOURS, MIN_JWT_SECRET_LENGTH,
};

/// Argon2 cost parameters shared by every password hash in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub session_ttl_hours: i64,
    pub hashing: HashingParams,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("hashing", &self.hashing)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            session_ttl_hours: parse_env("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS),
            hashing: HashingParams {
                memory_kib: parse_env("HASH_MEMORY_KIB", DEFAULT_HASH_MEMORY_KIB),
                iterations: parse_env("HASH_ITERATIONS", DEFAULT_HASH_ITERATIONS),
                parallelism: parse_env("HASH_PARALLELISM", DEFAULT_HASH_PARALLELISM),
            },
        }
    }

    /// Build a configuration without touching the environment.
    ///
    /// Used by tests and tooling that wire services by hand.
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: jwt_secret.into(),
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            hashing: HashingParams::default(),
        }
    }

    /// Get JWT secret bytes for session token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

/// Read and parse an environment variable, falling back to `default`.
fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::with_secret("a-very-secret-value-that-is-long-enough");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("a-very-secret-value"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_default_hashing_params() {
        let config = Config::with_secret("x".repeat(32));
        assert_eq!(config.hashing, HashingParams::default());
        assert_eq!(config.session_ttl_hours, DEFAULT_SESSION_TTL_HOURS);
    }
}
