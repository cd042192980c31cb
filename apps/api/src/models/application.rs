use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::listing::ListingKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub listing_id: i64,
    pub listing_kind: ListingKind,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    /// Free-form answers to listing questions; shape varies per listing.
    pub answers: Value,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}
