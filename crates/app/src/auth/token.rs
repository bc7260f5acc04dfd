//! Bearer token issuance and validation (HS256 JWT).

use jiff::Timestamp;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::Error as JwtError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::models::{AuthenticatedUser, Role, User};

/// Default token lifetime in seconds (24 hours).
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Claims embedded in every issued token.
///
/// Downstream components trust this identity; no database lookup
/// happens on authentication.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    email: String,
    role: Role,
    iat: i64,
    exp: i64,
}

/// Errors from token processing.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token")]
    Sign(#[source] JwtError),

    #[error("token is invalid or expired")]
    Invalid(#[source] JwtError),
}

/// Signs and verifies bearer tokens with a shared HS256 secret.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl_seconds,
        }
    }

    /// Issue a token for `user`, valid for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Timestamp::now().as_second();

        let claims = Claims {
            sub: user.uuid.into_uuid(),
            email: user.email.clone(),
            role: user.role,
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Sign)
    }

    /// Verify a bearer token and extract the identity it carries.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed, tampered, or expired tokens.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        let data =
            decode::<Claims>(token, &self.decoding, &self.validation).map_err(TokenError::Invalid)?;

        Ok(AuthenticatedUser {
            uuid: data.claims.sub.into(),
            email: data.claims.email,
            role: data.claims.role,
        })
    }
}
