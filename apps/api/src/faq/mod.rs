//! Scripted FAQ chat. Keyword lookup over a fixed list of answers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

struct FaqEntry {
    topic: &'static str,
    keywords: &'static [&'static str],
    answer: &'static str,
}

/// Checked in order; the first entry with a keyword in the message wins.
const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        topic: "apply",
        keywords: &["apply", "application", "submit"],
        answer: "Open a job or internship, press Apply, attach your resume and answer any questions. You can track submissions under My Applications.",
    },
    FaqEntry {
        topic: "ai_matching",
        keywords: &["ai", "match", "fit score", "resume score"],
        answer: "AI Resume Matching compares your resume with a listing and returns a fit score from 0 to 100 with strengths, gaps and suggestions.",
    },
    FaqEntry {
        topic: "account",
        keywords: &["password", "login", "sign in", "register", "account"],
        answer: "Create an account from the Sign Up page. Sessions expire after a day; sign in again if you are logged out.",
    },
    FaqEntry {
        topic: "internships",
        keywords: &["internship", "intern", "stipend"],
        answer: "Internships are listed separately from jobs. Filter them by location, stipend and duration on the Internships page.",
    },
    FaqEntry {
        topic: "employers",
        keywords: &["post a job", "employer", "company", "hire", "hiring"],
        answer: "Companies register with a company account, complete their company profile and post listings from the dashboard.",
    },
    FaqEntry {
        topic: "profile",
        keywords: &["profile", "resume", "cv"],
        answer: "Update your headline, skills and resume link from your profile page. Employers see this when you apply.",
    },
];

const FALLBACK_ANSWER: &str =
    "I'm not sure about that one. Try asking about applying, AI matching, internships or your account.";

const SUGGESTIONS: &[&str] = &[
    "How do I apply for a job?",
    "What is AI resume matching?",
    "How do internships work?",
];

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
    pub topic: Option<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Default)]
pub struct FaqBot;

impl FaqBot {
    pub fn reply(&self, message: &str) -> ChatReply {
        let lower = message.to_lowercase();
        let hit = FAQ_ENTRIES
            .iter()
            .find(|e| e.keywords.iter().any(|k| contains_word(&lower, k)));

        ChatReply {
            reply: hit.map_or(FALLBACK_ANSWER, |e| e.answer).to_string(),
            topic: hit.map(|e| e.topic.to_string()),
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Substring match on word boundaries, so "ai" does not fire on "email".
/// A trailing plural "s" still counts as a match.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let rest = &haystack[end..];
        let after = rest.strip_prefix('s').unwrap_or(rest).chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// POST /api/faq/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    Ok(Json(state.faq.reply(&req.message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_picks_topic() {
        let reply = FaqBot.reply("How do I APPLY to this role?");
        assert_eq!(reply.topic.as_deref(), Some("apply"));
    }

    #[test]
    fn test_first_entry_wins() {
        // "application" (apply) comes before "internship"
        let reply = FaqBot.reply("internship application deadline?");
        assert_eq!(reply.topic.as_deref(), Some("apply"));
    }

    #[test]
    fn test_word_boundaries() {
        let reply = FaqBot.reply("I never got the email");
        assert_eq!(reply.topic, None);
        assert_eq!(reply.reply, FALLBACK_ANSWER);
        assert_eq!(FaqBot.reply("what does the AI do").topic.as_deref(), Some("ai_matching"));
    }

    #[test]
    fn test_plural_matches() {
        let reply = FaqBot.reply("How do internships work?");
        assert_eq!(reply.topic.as_deref(), Some("internships"));
    }

    #[test]
    fn test_fallback_has_suggestions() {
        let reply = FaqBot.reply("hello there");
        assert!(reply.topic.is_none());
        assert_eq!(reply.suggestions.len(), SUGGESTIONS.len());
    }
}
