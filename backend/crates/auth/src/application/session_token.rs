//! Session Token Service
//!
//! Issues and validates stateless, signed session tokens. A token is
//! `payload.signature` where the payload is base64url-encoded JSON claims
//! `{userId, expiresAtMs}` and the signature is HMAC-SHA256 over the
//! payload string, keyed by the process-wide secret.
//!
//! Tokens are never persisted or revoked server-side: they stay valid
//! until the expiry elapses or the signature fails to verify.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::TokenError;

/// Claims embedded in a session token
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenClaims {
    user_id: Uuid,
    expires_at_ms: i64,
}

/// Stateless session token service
#[derive(Clone)]
pub struct SessionTokenService {
    secret: [u8; 32],
}

impl SessionTokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.token_secret,
        }
    }

    /// Issue a signed token binding `user_id`, expiring after `ttl`
    pub fn issue(&self, user_id: &UserId, ttl: Duration) -> String {
        let claims = TokenClaims {
            user_id: *user_id.as_uuid(),
            expires_at_ms: Utc::now().timestamp_millis() + ttl.as_millis() as i64,
        };

        let payload_json =
            serde_json::to_vec(&claims).expect("token claims serialize to JSON");
        let payload = URL_SAFE_NO_PAD.encode(&payload_json);

        format!("{}.{}", payload, self.sign(&payload))
    }

    /// Validate a token and extract the user id
    ///
    /// Checks run in a fixed order: shape, then signature, then expiry.
    /// A forged or bit-flipped token is rejected before its contents are
    /// ever decoded.
    pub fn validate(&self, token: &str) -> Result<UserId, TokenError> {
        let (payload, signature_b64) = match token.split_once('.') {
            Some((p, s)) if !s.contains('.') => (p, s),
            _ => return Err(TokenError::Malformed),
        };

        // Verify signature first
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::InvalidSignature)?;

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::InvalidSignature)?;

        // Only a payload we signed ourselves gets decoded
        let payload_json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload_json).map_err(|_| TokenError::Malformed)?;

        if Utc::now().timestamp_millis() > claims.expires_at_ms {
            return Err(TokenError::Expired);
        }

        Ok(UserId::from_uuid(claims.user_id))
    }

    /// HMAC-SHA256 signature over the payload string, base64url-encoded
    fn sign(&self, payload: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionTokenService {
        SessionTokenService::new(&AuthConfig::with_random_secret())
    }

    #[test]
    fn test_issue_validate_roundtrip() {
        let tokens = service();
        let user_id = UserId::new();

        let token = tokens.issue(&user_id, Duration::from_secs(3600));
        let resolved = tokens.validate(&token).unwrap();

        assert_eq!(resolved, user_id);
    }

    #[test]
    fn test_expired_token() {
        let tokens = service();
        let token = tokens.issue(&UserId::new(), Duration::ZERO);

        std::thread::sleep(Duration::from_millis(10));

        assert_eq!(tokens.validate(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_malformed_tokens() {
        let tokens = service();

        assert_eq!(tokens.validate(""), Err(TokenError::Malformed));
        assert_eq!(tokens.validate("no-separator"), Err(TokenError::Malformed));
        assert_eq!(tokens.validate("a.b.c"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_tampered_payload() {
        let tokens = service();
        let user_id = UserId::new();
        let token = tokens.issue(&user_id, Duration::from_secs(3600));

        // Flip one payload character to a different base64url character
        let (payload, signature) = token.split_once('.').unwrap();
        for (i, ch) in payload.char_indices() {
            let replacement = if ch == 'A' { 'B' } else { 'A' };
            let mut tampered_payload = payload.to_string();
            tampered_payload.replace_range(i..i + ch.len_utf8(), &replacement.to_string());
            let tampered = format!("{}.{}", tampered_payload, signature);

            // Never a different user id, always an integrity failure
            assert_eq!(
                tokens.validate(&tampered),
                Err(TokenError::InvalidSignature),
                "payload byte {i} flip must invalidate the signature"
            );
        }
    }

    #[test]
    fn test_tampered_signature() {
        let tokens = service();
        let token = tokens.issue(&UserId::new(), Duration::from_secs(3600));

        let (payload, signature) = token.split_once('.').unwrap();
        let first = signature.chars().next().unwrap();
        let replacement = if first == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}{}", payload, replacement, &signature[1..]);

        assert_eq!(
            tokens.validate(&tampered),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issuer = service();
        let verifier = service(); // distinct random secret

        let token = issuer.issue(&UserId::new(), Duration::from_secs(3600));
        assert_eq!(
            verifier.validate(&token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_token_is_opaque_but_stable() {
        let tokens = service();
        let user_id = UserId::new();
        let token = tokens.issue(&user_id, Duration::from_secs(3600));

        // Re-validation is pure computation
        assert_eq!(tokens.validate(&token).unwrap(), user_id);
        assert_eq!(tokens.validate(&token).unwrap(), user_id);
    }
}
