//! Axum route handlers for job and internship listings.
//!
//! Both collections share one implementation; the thin per-kind wrappers exist
//! only so each route has a plain handler function.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::models::listing::{Listing, ListingKind, ListingPatch, NewListing};
use crate::search::ListingFilter;
use crate::state::AppState;

async fn list(state: &AppState, kind: ListingKind, filter: &ListingFilter) -> Vec<Listing> {
    let board = state.board.read().await;
    let listings = board.collection(kind);
    let candidates = match filter.text_query() {
        Some(q) => listings.search(q),
        None => listings.get_all(),
    };
    filter.apply(candidates)
}

async fn get_one(state: &AppState, kind: ListingKind, id: i64) -> Result<Listing, AppError> {
    state
        .board
        .write()
        .await
        .collection_mut(kind)
        .record_view(id)
        .ok_or_else(|| not_found(kind, id))
}

async fn create(
    state: &AppState,
    kind: ListingKind,
    user: &AuthUser,
    mut new: NewListing,
) -> Result<Listing, AppError> {
    user.require_company()?;
    if new.title.trim().is_empty() || new.company.trim().is_empty() {
        return Err(AppError::Validation(
            "title and company are required".to_string(),
        ));
    }
    new.posted_by = Some(user.id);

    let listing = state.board.write().await.collection_mut(kind).add(new);
    info!(kind = kind.as_str(), id = listing.id, company_id = %user.id, "listing created");
    Ok(listing)
}

async fn update(
    state: &AppState,
    kind: ListingKind,
    user: &AuthUser,
    id: i64,
    patch: ListingPatch,
) -> Result<Listing, AppError> {
    user.require_company()?;
    let mut board = state.board.write().await;
    let listings = board.collection_mut(kind);
    ensure_owner(listings.get_by_id(id), kind, id, user)?;
    listings.update(id, patch).ok_or_else(|| not_found(kind, id))
}

async fn remove(
    state: &AppState,
    kind: ListingKind,
    user: &AuthUser,
    id: i64,
) -> Result<StatusCode, AppError> {
    user.require_company()?;
    let mut board = state.board.write().await;
    let listings = board.collection_mut(kind);
    ensure_owner(listings.get_by_id(id), kind, id, user)?;
    listings.delete(id);
    info!(kind = kind.as_str(), id, "listing deactivated");
    Ok(StatusCode::NO_CONTENT)
}

/// Seeded listings have no owner and may be managed by any company account.
fn ensure_owner(
    listing: Option<&Listing>,
    kind: ListingKind,
    id: i64,
    user: &AuthUser,
) -> Result<(), AppError> {
    let listing = listing.ok_or_else(|| not_found(kind, id))?;
    match listing.posted_by {
        Some(owner) if owner != user.id => Err(AppError::Forbidden),
        _ => Ok(()),
    }
}

fn not_found(kind: ListingKind, id: i64) -> AppError {
    AppError::NotFound(format!("{} {id} not found", kind.as_str()))
}

// ────────────────────────────────────────────────────────────────────────────
// Jobs
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
) -> Json<Vec<Listing>> {
    Json(list(&state, ListingKind::Job, &filter).await)
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Listing>, AppError> {
    get_one(&state, ListingKind::Job, id).await.map(Json)
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    user: AuthUser,
    Json(new): Json<NewListing>,
) -> Result<(StatusCode, Json<Listing>), AppError> {
    let listing = create(&state, ListingKind::Job, &user, new).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// PATCH /api/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(patch): Json<ListingPatch>,
) -> Result<Json<Listing>, AppError> {
    update(&state, ListingKind::Job, &user, id, patch).await.map(Json)
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    remove(&state, ListingKind::Job, &user, id).await
}

// ────────────────────────────────────────────────────────────────────────────
// Internships
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/internships
pub async fn handle_list_internships(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
) -> Json<Vec<Listing>> {
    Json(list(&state, ListingKind::Internship, &filter).await)
}

/// GET /api/internships/:id
pub async fn handle_get_internship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Listing>, AppError> {
    get_one(&state, ListingKind::Internship, id).await.map(Json)
}

/// POST /api/internships
pub async fn handle_create_internship(
    State(state): State<AppState>,
    user: AuthUser,
    Json(new): Json<NewListing>,
) -> Result<(StatusCode, Json<Listing>), AppError> {
    let listing = create(&state, ListingKind::Internship, &user, new).await?;
    Ok((StatusCode::CREATED, Json(listing)))
}

/// PATCH /api/internships/:id
pub async fn handle_update_internship(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(patch): Json<ListingPatch>,
) -> Result<Json<Listing>, AppError> {
    update(&state, ListingKind::Internship, &user, id, patch)
        .await
        .map(Json)
}

/// DELETE /api/internships/:id
pub async fn handle_delete_internship(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    remove(&state, ListingKind::Internship, &user, id).await
}
