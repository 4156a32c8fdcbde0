//! Advisory Sanitizer — validates an untrusted generated advisory.
//!
//! All-or-nothing: an unsafe term anywhere in the narrative, or a missing Hindi
//! signal under the Hindi lock, discards the whole candidate. Empty list fields
//! are backfilled from the fallback one by one.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::advisory::language::{contains_devanagari, LanguageConfig};
use crate::advisory::schemes::dedup_preserving_order;
use crate::models::advice::AdvisoryResult;

pub const MAX_ROADMAP: usize = 8;
pub const MAX_SKILLS: usize = 10;
pub const MAX_RESOURCES: usize = 10;
pub const MAX_GOVT_SCHEMES: usize = 10;
pub const MAX_SAFETY_NOTES: usize = 6;

/// Case-insensitive substrings that disqualify a generated advisory.
const UNSAFE_TERMS: &[&str] = &[
    "betting",
    "gambling",
    "hack",
    "illegal",
    "fraud",
    "dark web",
    "dark-web",
    "money laundering",
    "money-laundering",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("candidate is not a JSON object")]
    NotAnObject,

    #[error("candidate contains unsafe term '{0}'")]
    UnsafeContent(&'static str),

    #[error("candidate has no Devanagari text under the Hindi lock")]
    MissingHindi,
}

/// Returns the sanitized candidate, or `fallback` if it was rejected.
pub fn sanitize(
    candidate: Option<&Value>,
    config: &LanguageConfig,
    fallback: &AdvisoryResult,
    base_schemes: &[String],
) -> AdvisoryResult {
    match review(candidate, config, fallback, base_schemes) {
        Ok(advice) => advice,
        Err(rejection) => {
            warn!("Generated advisory rejected: {rejection}");
            fallback.clone()
        }
    }
}

/// Same checks as `sanitize`, but reports why a candidate was rejected.
pub fn review(
    candidate: Option<&Value>,
    config: &LanguageConfig,
    fallback: &AdvisoryResult,
    base_schemes: &[String],
) -> Result<AdvisoryResult, Rejection> {
    let fields = candidate
        .and_then(Value::as_object)
        .ok_or(Rejection::NotAnObject)?;

    let mut safe = AdvisoryResult {
        recommended_career: text_field(fields, "recommended_career")
            .unwrap_or_else(|| fallback.recommended_career.clone()),
        reason: text_field(fields, "reason").unwrap_or_else(|| fallback.reason.clone()),
        aptitude_reasoning: text_field(fields, "aptitude_reasoning")
            .unwrap_or_else(|| fallback.aptitude_reasoning.clone()),
        roadmap: list_field(fields, "roadmap", MAX_ROADMAP),
        skills: list_field(fields, "skills", MAX_SKILLS),
        resources: list_field(fields, "resources", MAX_RESOURCES),
        govt_schemes: dedup_preserving_order(
            string_items(fields.get("govt_schemes")).chain(base_schemes.iter().cloned()),
        )
        .into_iter()
        .take(MAX_GOVT_SCHEMES)
        .collect(),
        safety_notes: list_field(fields, "safety_notes", MAX_SAFETY_NOTES),
        language: config.language(),
    };

    let narrative = [safe.reason.as_str(), safe.aptitude_reasoning.as_str()]
        .into_iter()
        .chain(safe.roadmap.iter().map(String::as_str))
        .chain(safe.skills.iter().map(String::as_str))
        .chain(safe.resources.iter().map(String::as_str))
        .chain(safe.govt_schemes.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(term) = find_unsafe_term(&narrative) {
        return Err(Rejection::UnsafeContent(term));
    }

    if config.must_use_hindi {
        let hindi_signal = [safe.reason.as_str(), safe.aptitude_reasoning.as_str()]
            .into_iter()
            .chain(safe.roadmap.iter().map(String::as_str))
            .chain(safe.safety_notes.iter().map(String::as_str))
            .any(contains_devanagari);
        if !hindi_signal {
            return Err(Rejection::MissingHindi);
        }
    }

    backfill(&mut safe.roadmap, &fallback.roadmap);
    backfill(&mut safe.skills, &fallback.skills);
    backfill(&mut safe.resources, &fallback.resources);
    backfill(&mut safe.safety_notes, &fallback.safety_notes);

    Ok(safe)
}

pub fn find_unsafe_term(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    UNSAFE_TERMS.iter().copied().find(|term| lower.contains(term))
}

/// Non-empty text for a scalar field. Empty strings, zero, false, null and
/// nested structures count as absent.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn string_items(value: Option<&Value>) -> impl Iterator<Item = String> + '_ {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| match item {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
}

fn list_field(fields: &Map<String, Value>, key: &str, cap: usize) -> Vec<String> {
    dedup_preserving_order(string_items(fields.get(key)))
        .into_iter()
        .take(cap)
        .collect()
}

fn backfill(list: &mut Vec<String>, fallback: &[String]) {
    if list.is_empty() {
        *list = fallback.to_vec();
    }
}
