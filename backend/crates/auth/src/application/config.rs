//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};

/// Auth application configuration
///
/// The token secret is process-wide state: loaded once at startup and
/// read-only thereafter. It is injected here at construction and never
/// read from an ambient global, so tests can run with distinct secrets.
/// Rotating the secret invalidates every outstanding token; there is no
/// runtime rotation path, which is the accepted tradeoff of stateless
/// tokens.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Session token TTL (1 hour)
    pub session_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            session_ttl: Duration::from_secs(3600), // 1 hour
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for tests and local runs)
    pub fn with_random_secret() -> Self {
        let bytes = platform::crypto::random_bytes(32);
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&bytes);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Load config from the environment
    ///
    /// `SESSION_SECRET` (base64, 32 bytes) is required; a missing or
    /// malformed value is a startup-fatal condition for the embedding
    /// process, not a per-request error.
    ///
    /// Optional overrides: `SESSION_TTL_SECS`, `PASSWORD_PEPPER` (base64).
    pub fn from_env() -> AppResult<Self> {
        let secret_b64 = std::env::var("SESSION_SECRET")
            .map_err(|_| AppError::internal("SESSION_SECRET must be set"))?;

        let secret_bytes = platform::crypto::from_base64(&secret_b64)
            .map_err(|e| AppError::internal("SESSION_SECRET is not valid base64").with_source(e))?;

        let token_secret: [u8; 32] = secret_bytes
            .try_into()
            .map_err(|_| AppError::internal("SESSION_SECRET must decode to exactly 32 bytes"))?;

        let session_ttl = match std::env::var("SESSION_TTL_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|e| {
                    AppError::internal("SESSION_TTL_SECS must be an integer").with_source(e)
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Self::default().session_ttl,
        };

        let password_pepper = match std::env::var("PASSWORD_PEPPER") {
            Ok(raw) => Some(platform::crypto::from_base64(&raw).map_err(|e| {
                AppError::internal("PASSWORD_PEPPER is not valid base64").with_source(e)
            })?),
            Err(_) => None,
        };

        Ok(Self {
            token_secret,
            session_ttl,
            password_pepper,
        })
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
