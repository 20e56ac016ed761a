use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{self, SecurityConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Granted capability tags, e.g. `create:items`
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Claims for `sub` expiring after the configured `jwt_expiry_hours`
    pub fn new(sub: impl Into<String>, permissions: Vec<String>) -> Result<Self, JwtError> {
        let expiry_hours = config::config().security.jwt_expiry_hours;
        let hours = i64::try_from(expiry_hours).map_err(|_| lifetime_out_of_range(expiry_hours))?;
        Self::with_expiry_hours(sub, permissions, hours)
    }

    pub fn with_expiry_hours(sub: impl Into<String>, permissions: Vec<String>, hours: i64) -> Result<Self, JwtError> {
        let now = Utc::now();
        let expires_at = Duration::try_hours(hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| lifetime_out_of_range(hours))?;
        let security = &config::config().security;

        Ok(Self {
            sub: sub.into(),
            permissions,
            aud: security.jwt_audience.clone(),
            iss: security.jwt_issuer.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        })
    }
}

fn lifetime_out_of_range(hours: impl std::fmt::Display) -> JwtError {
    JwtError::TokenGeneration(format!("token lifetime of {} hours is out of range", hours))
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,
}

/// Sign claims with an explicit HS256 secret
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::new(Algorithm::HS256), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Sign claims with the configured secret
pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    encode_token(claims, &config::config().security.jwt_secret)
}

/// Validate a token against the given security settings and extract its claims
pub fn validate_token(token: &str, security: &SecurityConfig) -> Result<Claims, JwtError> {
    if security.jwt_secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(security.jwt_secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    let mut required = vec!["exp"];
    match &security.jwt_audience {
        Some(audience) => {
            validation.set_audience(&[audience]);
            required.push("aud");
        }
        None => validation.validate_aud = false,
    }
    if let Some(issuer) = &security.jwt_issuer {
        validation.set_issuer(&[issuer]);
        required.push("iss");
    }
    validation.set_required_spec_claims(required.as_slice());

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| JwtError::InvalidToken(e.to_string()))
}
