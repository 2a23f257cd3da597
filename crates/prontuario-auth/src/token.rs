//! Read-only view of the claims inside a JWT access token.
//!
//! The signature is not checked here; the backend verifies every request.
//! Tokens that are not JWTs are treated as opaque.

use jsonwebtoken::dangerous::insecure_decode;
use serde::Deserialize;

use crate::error::AuthError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl TokenClaims {
    pub fn is_expired(&self, now: jiff::Timestamp) -> bool {
        self.exp.is_some_and(|exp| now.as_second() >= exp)
    }

    pub fn expires_at(&self) -> Option<jiff::Timestamp> {
        self.exp.and_then(|exp| jiff::Timestamp::from_second(exp).ok())
    }
}

/// Read the claims without checking the signature or expiry.
pub fn decode_claims(token: &str) -> Result<TokenClaims, AuthError> {
    let data = insecure_decode::<TokenClaims>(token)?;
    Ok(data.claims)
}
