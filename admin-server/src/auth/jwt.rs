//! Session tokens
//!
//! Login issues an HS256 JWT carrying the employee id and email, valid for
//! one hour. No route checks it; [`SessionTokens::verify`] exists for
//! consumers that want to.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime in seconds
pub const SESSION_TTL_SECS: i64 = 3600;

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Employee id
    pub id: i64,
    /// Employee email
    pub email: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds), always `iat + SESSION_TTL_SECS`
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Token generation failed: {0}")]
    GenerationFailed(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("Token expired")]
    ExpiredToken,
}

/// Issues and verifies session tokens with one process-wide secret
#[derive(Clone)]
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionTokens {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token valid for the next hour
    pub fn issue(&self, employee_id: i64, email: &str) -> Result<String, JwtError> {
        self.issue_at(employee_id, email, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (Unix seconds)
    pub fn issue_at(&self, employee_id: i64, email: &str, now: i64) -> Result<String, JwtError> {
        let claims = SessionClaims {
            id: employee_id,
            email: email.to_string(),
            iat: now,
            exp: now + SESSION_TTL_SECS,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(JwtError::GenerationFailed)
    }

    /// Verify signature and expiry against the current time
    pub fn verify(&self, token: &str) -> Result<SessionClaims, JwtError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify signature and expiry against `now` (Unix seconds).
    ///
    /// Valid strictly before `exp`; expired at `exp` and after, with no leeway.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<SessionClaims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(JwtError::InvalidToken)?
            .claims;

        if now >= claims.exp {
            return Err(JwtError::ExpiredToken);
        }
        Ok(claims)
    }
}
