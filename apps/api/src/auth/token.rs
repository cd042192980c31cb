//! HS256 bearer tokens.

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;

use crate::auth::AuthError;
use crate::models::user::{Account, Role};

/// JWT claims carried by every bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// Issues and verifies tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    key: Hmac<Sha256>,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_hours: i64) -> Result<Self, AuthError> {
        let key = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|e| AuthError::Signing(e.to_string()))?;
        Ok(Self {
            key,
            ttl: Duration::hours(ttl_hours),
        })
    }

    pub fn issue(&self, account: &Account) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account.id,
            email: account.email.clone(),
            role: account.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        self.sign(&claims)
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        claims
            .sign_with_key(&self.key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Checks signature, then expiry against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let claims: Claims = token
            .verify_with_key(&self.key)
            .map_err(|e| AuthError::Malformed(e.to_string()))?;
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(AuthError::Expired);
        }
        Ok(claims)
    }
}
