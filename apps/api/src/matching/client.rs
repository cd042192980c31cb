//! Resume matcher backends.
//!
//! `AppState` holds an `Arc<dyn ResumeMatcher>`. The default backend forwards
//! to the remote AI service over HTTP; tests plug in canned payloads.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Body sent to the AI matching service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_title: String,
    pub job_description: String,
    pub skills: Vec<String>,
    pub requirements: Vec<String>,
}

/// Returns the upstream payload as-is; callers normalize it.
#[async_trait]
pub trait ResumeMatcher: Send + Sync {
    async fn match_resume(&self, request: &MatchRequest) -> Result<Value, AppError>;
}

/// Forwards match requests to the configured AI service URL.
/// No automatic retries: clients retry explicitly.
pub struct HttpResumeMatcher {
    client: Client,
    url: String,
}

impl HttpResumeMatcher {
    pub fn new(url: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            url,
        })
    }
}

#[async_trait]
impl ResumeMatcher for HttpResumeMatcher {
    async fn match_resume(&self, request: &MatchRequest) -> Result<Value, AppError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("AI matching request failed: {e}");
                AppError::AiUnreachable
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_upstream_error(status, &body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| AppError::AiUpstream(format!("invalid JSON from AI service: {e}")))?;
        debug!("AI matching call succeeded");
        Ok(payload)
    }
}

/// 403, 502 and 503 get dedicated errors; anything else carries the body's
/// `error` field, or the status text when the body has none.
pub fn map_upstream_error(status: StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        403 => AppError::AiForbidden,
        502 => AppError::AiUnreachable,
        503 => AppError::AiBusy,
        _ => {
            let message = serde_json::from_str::<Value>(body)
                .ok()
                .and_then(|v| error_message(&v))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown status")
                        .to_string()
                });
            AppError::AiUpstream(message)
        }
    }
}

fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj.get("message").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}
