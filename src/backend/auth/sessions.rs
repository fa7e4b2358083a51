/**
 * Session Tokens
 *
 * This module handles JWT token issuance and verification. Tokens are
 * stateless: validity is decided only by the HS256 signature and the `exp`
 * claim, so nothing is stored server-side.
 */

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::users::UserId;

/// Default token lifetime (30 days)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Longest accepted token lifetime (ten years)
pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Reasons a token can fail
///
/// The variants stay distinct for logging; clients only ever see a
/// generic 401.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token expired")]
    Expired,

    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error("token expiry out of range")]
    ExpiryOverflow,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            _ => Self::Malformed,
        }
    }
}

/// Issues and verifies signed, time-bounded tokens
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from the server secret
    ///
    /// # Arguments
    /// * `secret` - HMAC secret shared by issuance and verification
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Create a token for a user, valid from now
    pub fn issue(&self, subject: UserId) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Create a token for a user as if it had been issued at `issued_at`
    pub fn issue_at(&self, subject: UserId, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = issued_at.timestamp().max(0) as u64;
        let exp = iat
            .checked_add(self.ttl.as_secs())
            .filter(|exp| *exp <= i64::MAX as u64)
            .ok_or(TokenError::ExpiryOverflow)?;

        let claims = Claims {
            sub: subject.to_string(),
            exp,
            iat,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify a token and return its subject
    ///
    /// The signature is checked before the expiry, so a tampered token
    /// reports `InvalidSignature` even when it is also expired.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        data.claims.sub.parse::<UserId>().map_err(|_| TokenError::Malformed)
    }
}
