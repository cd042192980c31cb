use axum::{extract::State, Json};

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::profiles::models::{CompanyProfile, CompanyProfilePatch, UserProfile, UserProfilePatch};
use crate::state::AppState;

/// GET /api/user-profile
pub async fn handle_get_user_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    Ok(Json(state.profiles.read().await.user(user.id)))
}

/// PATCH /api/user-profile
pub async fn handle_patch_user_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(patch): Json<UserProfilePatch>,
) -> Result<Json<UserProfile>, AppError> {
    let mut profiles = state.profiles.write().await;
    let profile = profiles.user_mut(user.id);
    profile.apply_patch(patch);
    Ok(Json(profile.clone()))
}

/// GET /api/company-profile
pub async fn handle_get_company_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<CompanyProfile>, AppError> {
    user.require_company()?;
    Ok(Json(state.profiles.read().await.company(user.id)))
}

/// PATCH /api/company-profile
pub async fn handle_patch_company_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(patch): Json<CompanyProfilePatch>,
) -> Result<Json<CompanyProfile>, AppError> {
    user.require_company()?;
    let mut profiles = state.profiles.write().await;
    let profile = profiles.company_mut(user.id);
    profile.apply_patch(patch);
    Ok(Json(profile.clone()))
}
