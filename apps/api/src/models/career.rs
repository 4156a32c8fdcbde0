use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationCost {
    Low,
    Medium,
    High,
}

/// Growth outlook. Anything other than "high" or "medium" is the low tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Growth {
    High,
    Medium,
    Low,
}

impl From<String> for Growth {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }
}

impl Growth {
    pub fn bonus(self) -> i32 {
        match self {
            Self::High => 6,
            Self::Medium => 3,
            Self::Low => 0,
        }
    }
}

/// One static career definition from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerEntry {
    pub career: String,
    pub category: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub aptitude: Vec<String>,
    #[serde(default)]
    pub personality: Vec<String>,
    pub min_math: u32,
    pub education_cost: EducationCost,
    pub growth: Growth,
    #[serde(default)]
    pub rural_friendly: bool,
}

/// Per-dimension detail behind a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitBreakdown {
    pub interest_overlap: Vec<String>,
    pub aptitude_overlap: Vec<String>,
    pub personality_overlap: Vec<String>,
    pub math_gap: u32,
    pub education_cost: EducationCost,
    pub growth: Growth,
    pub realism_penalty: u32,
}

/// A scored catalog entry. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub career: String,
    pub category: String,
    pub score: u32, // 0 – 100
    /// Always true: unrealistic entries never become results.
    pub realistic: bool,
    pub aptitude_reasoning: String,
    pub explanation: Vec<String>,
    pub fit_breakdown: FitBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_growth_is_low_tier() {
        let growth: Growth = serde_json::from_value(json!("stagnant")).unwrap();
        assert_eq!(growth, Growth::Low);
        assert_eq!(growth.bonus(), 0);
    }

    #[test]
    fn test_growth_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Growth::Medium).unwrap(), json!("medium"));
    }

    #[test]
    fn test_entry_tag_lists_default_to_empty() {
        let entry: CareerEntry = serde_json::from_value(json!({
            "career": "Welder",
            "category": "Technical",
            "min_math": 30,
            "education_cost": "low",
            "growth": "medium"
        }))
        .unwrap();
        assert!(entry.interests.is_empty());
        assert!(!entry.rural_friendly);
    }
}
