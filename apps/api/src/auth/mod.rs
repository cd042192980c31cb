//! Authentication: accounts, password digests and bearer JWTs.
//!
//! Every authenticated handler takes an `AuthUser` extractor, which verifies the
//! token signature and expiry before the handler body runs.

pub mod accounts;
pub mod extractor;
pub mod handlers;
pub mod password;
pub mod token;

use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("token expired")]
    Expired,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Signing(msg) | AuthError::Hashing(msg) => {
                AppError::Internal(anyhow::anyhow!(msg))
            }
            other => {
                tracing::debug!("auth rejected: {other}");
                AppError::Unauthorized
            }
        }
    }
}
