//! Authentication: session token issuance

pub mod jwt;

pub use jwt::{JwtError, SESSION_TTL_SECS, SessionClaims, SessionTokens};
