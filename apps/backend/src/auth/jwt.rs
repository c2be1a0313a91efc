use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Identity payload carried inside every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Store identifier of the user document
    pub id: String,
    pub username: String,
}

/// Claims included in our backend-issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub id: String,
    pub username: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

fn unix_seconds(at: SystemTime) -> Result<i64, AppError> {
    at.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AppError::internal("Failed to get current time"))
}

/// Mint a HS256 JWT access token that expires `security.token_ttl`
/// (seven days) after `now`.
pub fn mint_access_token(
    identity: &Identity,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    if identity.id.is_empty() {
        return Err(AppError::internal("Cannot mint a token without an id"));
    }

    let iat = unix_seconds(now)?;
    let exp = iat + security.token_ttl.as_secs() as i64;

    let claims = Claims {
        id: identity.id.clone(),
        username: identity.username.clone(),
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify a JWT and return its claims.
///
/// Every failure (malformed, tampered, wrong algorithm, expired) yields the
/// same `AppError::Unauthorized`; the reason is only logged.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = true;
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(reason = ?e.kind(), "token_rejected");
        AppError::unauthorized()
    })?;

    // jsonwebtoken still accepts a token in the very second it expires.
    if claims.exp <= unix_seconds(SystemTime::now())? {
        debug!(reason = "expired", "token_rejected");
        return Err(AppError::unauthorized());
    }

    Ok(claims)
}
