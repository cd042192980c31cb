use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::models::user::{PublicAccount, Role};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::User
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicAccount,
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let account = state
        .accounts
        .write()
        .await
        .register(&req.email, &req.name, &req.password, req.role)?;
    let token = state.tokens.issue(&account)?;

    info!(user_id = %account.id, role = ?account.role, "account registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: PublicAccount::from(&account),
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let accounts = state.accounts.read().await;
    let account = accounts.authenticate(&req.email, &req.password)?;
    let token = state.tokens.issue(account)?;

    Ok(Json(AuthResponse {
        token,
        user: PublicAccount::from(account),
    }))
}

/// GET /api/auth/profile
pub async fn handle_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<PublicAccount>, AppError> {
    let accounts = state.accounts.read().await;
    let account = accounts
        .get(user.id)
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", user.id)))?;
    Ok(Json(PublicAccount::from(account)))
}
