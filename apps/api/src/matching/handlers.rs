use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::matching::client::MatchRequest;
use crate::matching::normalizer::{normalize_match, AiMatchData};
use crate::models::listing::ListingKind;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiMatchRequest {
    pub resume_text: String,
    pub listing_id: i64,
    #[serde(default = "default_kind")]
    pub listing_kind: ListingKind,
}

fn default_kind() -> ListingKind {
    ListingKind::Job
}

/// POST /api/ai-matching/match
///
/// Sends the resume and the listing's text to the AI service and returns the
/// normalized result. Upstream failures map to dedicated error codes so the
/// client can offer a retry.
pub async fn handle_match(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<AiMatchRequest>,
) -> Result<Json<AiMatchData>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resumeText cannot be empty".to_string()));
    }

    let upstream_request = {
        let board = state.board.read().await;
        let listing = board
            .collection(req.listing_kind)
            .get_by_id(req.listing_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{} {} not found",
                    req.listing_kind.as_str(),
                    req.listing_id
                ))
            })?;
        MatchRequest {
            resume_text: req.resume_text,
            job_title: listing.title.clone(),
            job_description: listing.description.clone(),
            skills: listing.skills.clone(),
            requirements: listing.requirements.clone(),
        }
    };

    let payload = state.matcher.match_resume(&upstream_request).await?;
    let data = normalize_match(&payload);

    info!(
        user_id = %user.id,
        listing_id = req.listing_id,
        fit_score = data.fit_score,
        "AI match completed"
    );
    Ok(Json(data))
}
