//! Response validator: gates every analysis before it is persisted or returned.
//!
//! Collects every violated field instead of stopping at the first one, and
//! never coerces: a value is either exactly right or reported.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::analysis::{ResumeAnalysis, ScoreLabel};

/// Pseudo-field reported when the payload is not a JSON object at all.
pub const ROOT_FIELD: &str = "$";

const LIST_FIELDS: [&str; 5] = [
    "strengths",
    "contentImprovements",
    "formatImprovements",
    "keywordsFound",
    "keywordsMissing",
];

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("analysis violates the response schema (fields: {})", .fields.join(", "))]
pub struct SchemaViolation {
    pub fields: Vec<String>,
}

/// Validates a raw analysis payload and returns the typed result.
///
/// Rules:
/// - `score`: number in [0, 100] with no fractional part
/// - `scoreLabel`: string naming the band that contains `score`
/// - the five list fields: arrays of strings (empty is fine)
/// - `summary`: absent, null, or a string
pub fn validate_analysis(payload: &Value) -> Result<ResumeAnalysis, SchemaViolation> {
    let Some(obj) = payload.as_object() else {
        return Err(SchemaViolation {
            fields: vec![ROOT_FIELD.to_string()],
        });
    };

    let mut violations: Vec<String> = Vec::new();

    let score = obj.get("score").and_then(parse_score);
    if score.is_none() {
        violations.push("score".to_string());
    }

    let label = match obj.get("scoreLabel").and_then(Value::as_str) {
        Some(raw) => match (ScoreLabel::parse(raw), score) {
            (Some(label), Some(score)) if label == ScoreLabel::from_score(score) => Some(label),
            // Score already reported; a recognised label is not a second violation.
            (Some(label), None) => Some(label),
            _ => None,
        },
        None => None,
    };
    if label.is_none() {
        violations.push("scoreLabel".to_string());
    }

    let mut lists: Vec<Option<Vec<String>>> = Vec::with_capacity(LIST_FIELDS.len());
    for field in LIST_FIELDS {
        let list = string_list(obj, field);
        if list.is_none() {
            violations.push(field.to_string());
        }
        lists.push(list);
    }

    let summary = match obj.get("summary") {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => {
            violations.push("summary".to_string());
            None
        }
    };

    let mut lists = lists.into_iter();
    match (
        score,
        label,
        lists.next().flatten(),
        lists.next().flatten(),
        lists.next().flatten(),
        lists.next().flatten(),
        lists.next().flatten(),
        summary,
    ) {
        (
            Some(score),
            Some(score_label),
            Some(strengths),
            Some(content_improvements),
            Some(format_improvements),
            Some(keywords_found),
            Some(keywords_missing),
            Some(summary),
        ) if violations.is_empty() => Ok(ResumeAnalysis {
            score,
            score_label,
            strengths,
            content_improvements,
            format_improvements,
            keywords_found,
            keywords_missing,
            summary,
        }),
        _ => Err(SchemaViolation { fields: violations }),
    }
}

fn parse_score(value: &Value) -> Option<u8> {
    let n = value.as_f64()?;
    if !(0.0..=100.0).contains(&n) || n.fract() != 0.0 {
        return None;
    }
    Some(n as u8)
}

fn string_list(obj: &Map<String, Value>, field: &str) -> Option<Vec<String>> {
    obj.get(field)?
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(String::from))
        .collect()
}
