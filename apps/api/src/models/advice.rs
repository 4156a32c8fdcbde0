use serde::{Deserialize, Serialize};

use crate::models::profile::Language;

/// Final advisory returned to the caller, whether generated or fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryResult {
    pub recommended_career: String,
    pub reason: String,
    pub aptitude_reasoning: String,
    pub roadmap: Vec<String>,      // ≤ 8
    pub skills: Vec<String>,       // ≤ 10
    pub resources: Vec<String>,    // ≤ 10
    pub govt_schemes: Vec<String>, // ≤ 10
    pub safety_notes: Vec<String>, // ≤ 6
    pub language: Language,
}
