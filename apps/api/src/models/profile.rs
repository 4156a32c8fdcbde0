//! Student profile — the normalized input to matching and advisory.
//!
//! `StudentProfile::from_raw` is total: every malformed or missing field is
//! replaced with a safe default instead of rejecting the request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Financial {
    #[default]
    Low,
    Medium,
    High,
}

impl Financial {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Urban,
    Rural,
}

impl Location {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "urban" => Some(Self::Urban),
            "rural" => Some(Self::Rural),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "english" => Some(Self::English),
            "hindi" => Some(Self::Hindi),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marks {
    pub math: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    /// `None` when the age was missing or not a usable number.
    pub age: Option<u32>,
    pub interests: Vec<String>,
    pub marks: Marks,
    pub aptitude: Vec<String>,
    pub personality: Vec<String>,
    pub financial: Financial,
    pub location: Location,
    pub language: Language,
}

impl StudentProfile {
    /// Normalizes an arbitrary JSON body into a profile. Non-object bodies
    /// are treated as an empty object.
    pub fn from_raw(raw: &Value) -> Self {
        let empty = Map::new();
        let fields = raw.as_object().unwrap_or(&empty);

        let math = fields
            .get("marks")
            .and_then(|m| m.get("math"))
            .filter(|v| !v.is_null())
            .or_else(|| fields.get("math"))
            .and_then(as_number)
            .map(|m| m.clamp(0.0, 100.0) as u32)
            .unwrap_or(0);

        let age = fields
            .get("age")
            .and_then(as_number)
            .filter(|a| *a >= 0.0 && *a <= u32::MAX as f64)
            .map(|a| a as u32);

        Self {
            name: fields
                .get("name")
                .and_then(Value::as_str)
                .map(|n| n.trim().to_string())
                .unwrap_or_default(),
            age,
            interests: tag_set(fields.get("interests")),
            marks: Marks { math },
            aptitude: tag_set(fields.get("aptitude")),
            personality: tag_set(fields.get("personality")),
            financial: lowered(fields.get("financial"))
                .and_then(|v| Financial::parse(&v))
                .unwrap_or_default(),
            location: lowered(fields.get("location"))
                .and_then(|v| Location::parse(&v))
                .unwrap_or_default(),
            language: lowered(fields.get("language"))
                .and_then(|v| Language::parse(&v))
                .unwrap_or_default(),
        }
    }

    pub fn is_rural(&self) -> bool {
        self.location == Location::Rural
    }

    pub fn has_low_finances(&self) -> bool {
        self.financial == Financial::Low
    }
}

/// Finite number from a JSON number or a numeric string.
fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn lowered(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(|s| s.trim().to_lowercase())
}

/// Lower-cased, trimmed, de-duplicated tags in first-seen order.
/// Accepts an array or a comma-separated string.
fn tag_set(value: Option<&Value>) -> Vec<String> {
    let raw: Vec<String> = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(true) => Some("true".to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };

    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
