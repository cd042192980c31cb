use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::applications::store::NewApplication;
use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::listing::ListingKind;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub listing_id: i64,
    #[serde(default = "default_kind")]
    pub listing_kind: ListingKind,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    #[serde(default)]
    pub answers: Value,
}

fn default_kind() -> ListingKind {
    ListingKind::Job
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// POST /api/applications/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    // Board lock first, then applications; status updates take them in the same order.
    let mut board = state.board.write().await;
    let listings = board.collection_mut(req.listing_kind);
    if listings.get_by_id(req.listing_id).is_none() {
        return Err(AppError::NotFound(format!(
            "{} {} not found",
            req.listing_kind.as_str(),
            req.listing_id
        )));
    }

    let application = state.applications.write().await.submit(NewApplication {
        user_id: user.id,
        listing_id: req.listing_id,
        listing_kind: req.listing_kind,
        cover_letter: req.cover_letter,
        resume_url: req.resume_url,
        answers: req.answers,
    })?;
    listings.record_application(req.listing_id);

    info!(
        user_id = %user.id,
        email = %user.email,
        listing_id = req.listing_id,
        kind = req.listing_kind.as_str(),
        "application submitted"
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications/user/:id
pub async fn handle_user_applications(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Application>>, AppError> {
    if user.id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(Json(state.applications.read().await.for_user(user_id)))
}

/// PATCH /api/applications/:id/status
///
/// Only the company that posted the listing may change the status.
pub async fn handle_update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdate>,
) -> Result<Json<Application>, AppError> {
    user.require_company()?;

    let board = state.board.read().await;
    let mut applications = state.applications.write().await;
    let application = applications
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    let owner = board
        .collection(application.listing_kind)
        .get_raw(application.listing_id)
        .and_then(|l| l.posted_by);
    if owner.is_some_and(|owner| owner != user.id) {
        return Err(AppError::Forbidden);
    }

    let updated = applications
        .set_status(id, req.status)
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;
    Ok(Json(updated))
}
