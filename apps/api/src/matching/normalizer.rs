//! Maps a loosely-shaped upstream payload onto the fixed `AiMatchData` shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized AI match result returned to clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiMatchData {
    pub fit_score: u32, // 0 – 100
    pub summary: String,
    pub strengths: Vec<Value>,
    pub weaknesses: Vec<Value>,
    pub recommendations: Vec<Value>,
}

const SCORE_KEYS: &[&str] = &["fitScore", "score", "matchScore"];
const SUMMARY_KEYS: &[&str] = &["summary", "explanation", "analysis"];
const STRENGTH_KEYS: &[&str] = &["strengths", "matchedSkills", "matched"];
const WEAKNESS_KEYS: &[&str] = &["weaknesses", "missingSkills", "gaps"];
const RECOMMENDATION_KEYS: &[&str] = &["recommendations", "suggestions", "tips"];

/// Never fails: absent or mistyped fields fall back to defaults.
pub fn normalize_match(payload: &Value) -> AiMatchData {
    if !payload.is_object() {
        return AiMatchData::default();
    }

    // First present, non-null key decides; a non-numeric value scores 0.
    let fit_score = SCORE_KEYS
        .iter()
        .find_map(|k| payload.get(*k).filter(|v| !v.is_null()))
        .and_then(coerce_number)
        .map(|n| n.clamp(0.0, 100.0).round() as u32)
        .unwrap_or(0);

    let summary = SUMMARY_KEYS
        .iter()
        .find_map(|k| payload.get(*k).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string();

    AiMatchData {
        fit_score,
        summary,
        strengths: merge_lists(payload, STRENGTH_KEYS),
        weaknesses: merge_lists(payload, WEAKNESS_KEYS),
        recommendations: merge_lists(payload, RECOMMENDATION_KEYS),
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Concatenates the arrays under `keys`, keeping the first occurrence of each value.
fn merge_lists(payload: &Value, keys: &[&str]) -> Vec<Value> {
    let mut merged: Vec<Value> = Vec::new();
    for item in keys
        .iter()
        .filter_map(|k| payload.get(*k).and_then(Value::as_array))
        .flatten()
    {
        if !merged.contains(item) {
            merged.push(item.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(normalize_match(&json!({ "score": 150 })).fit_score, 100);
        assert_eq!(normalize_match(&json!({ "fitScore": -4 })).fit_score, 0);
    }

    #[test]
    fn test_empty_payload_gives_defaults() {
        let data = normalize_match(&json!({}));
        assert_eq!(data, AiMatchData::default());
        assert_eq!(data.summary, "");
        assert!(data.strengths.is_empty());
    }

    #[test]
    fn test_non_object_payload_gives_defaults() {
        assert_eq!(normalize_match(&json!([1, 2])), AiMatchData::default());
        assert_eq!(normalize_match(&Value::Null), AiMatchData::default());
    }

    #[test]
    fn test_strengths_deduplicated_in_first_seen_order() {
        let data = normalize_match(&json!({
            "strengths": ["A"],
            "matchedSkills": ["A", "B"]
        }));
        assert_eq!(data.strengths, vec![json!("A"), json!("B")]);
    }

    #[test]
    fn test_score_key_precedence() {
        let data = normalize_match(&json!({ "matchScore": 10, "score": 55 }));
        assert_eq!(data.fit_score, 55);
        let data = normalize_match(&json!({ "fitScore": 72.6, "score": 55 }));
        assert_eq!(data.fit_score, 73);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        assert_eq!(normalize_match(&json!({ "fitScore": "81" })).fit_score, 81);
        assert_eq!(normalize_match(&json!({ "score": "64%" })).fit_score, 0);
        assert_eq!(normalize_match(&json!({ "score": "high" })).fit_score, 0);
    }

    #[test]
    fn test_non_numeric_first_key_does_not_fall_through() {
        let data = normalize_match(&json!({ "fitScore": "high", "score": 55 }));
        assert_eq!(data.fit_score, 0);
        // null counts as absent
        let data = normalize_match(&json!({ "fitScore": null, "score": 55 }));
        assert_eq!(data.fit_score, 55);
    }

    #[test]
    fn test_nested_data_field_does_not_hide_top_level() {
        let data = normalize_match(&json!({
            "fitScore": 80,
            "summary": "good",
            "strengths": ["Rust"],
            "data": { "resumeId": "abc" }
        }));
        assert_eq!(data.fit_score, 80);
        assert_eq!(data.summary, "good");
        assert_eq!(data.strengths, vec![json!("Rust")]);
    }

    #[test]
    fn test_alternate_names() {
        let data = normalize_match(&json!({
            "matchScore": 40,
            "explanation": "Partial overlap",
            "missingSkills": ["Kubernetes"],
            "gaps": ["Kubernetes", "Go"],
            "tips": ["Add a cloud project"]
        }));
        assert_eq!(data.fit_score, 40);
        assert_eq!(data.summary, "Partial overlap");
        assert_eq!(data.weaknesses, vec![json!("Kubernetes"), json!("Go")]);
        assert_eq!(data.recommendations, vec![json!("Add a cloud project")]);
    }

    #[test]
    fn test_malformed_entries_pass_through() {
        let data = normalize_match(&json!({ "strengths": [1, {"skill": "SQL"}, null] }));
        assert_eq!(data.strengths, vec![json!(1), json!({"skill": "SQL"}), Value::Null]);
    }
}
