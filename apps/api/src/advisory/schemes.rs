//! Scheme Recommender — rule-based shortlist of support programs.
//!
//! Rules append in a fixed order; the list is de-duplicated (first seen wins)
//! and truncated to `MAX_SCHEMES`.

use crate::models::career::MatchResult;
use crate::models::profile::StudentProfile;

pub const MAX_SCHEMES: usize = 8;

const LOW_INCOME_SCHEMES: &[&str] = &[
    "NSP (National Scholarship Portal) - central/state scholarships for eligible students",
    "PM-YASASVI Scholarship - support for eligible OBC/EBC/DNT students",
    "PM eVIDYA + DIKSHA - free learning content for school and skill prep",
];

const RURAL_SCHEMES: &[&str] = &[
    "DDU-GKY - placement-linked skilling for rural youth",
    "PMKVY (Pradhan Mantri Kaushal Vikas Yojana) - free short-term skill courses",
];

const URBAN_SCHEMES: &[&str] = &["NAPS - apprenticeship opportunities with stipend in industry"];

const AGRICULTURE_SCHEMES: &[&str] = &[
    "Agri-Clinics & Agri-Business Centres - agri entrepreneurship support",
    "Kisan Credit Card - credit support for agriculture activities",
];

const PUBLIC_SERVICE_SCHEMES: &[&str] = &[
    "NCC / Sainik School preparation pathways (state-specific support varies)",
    "Free coaching schemes by state welfare departments for competitive exams",
];

const DIGITAL_SCHEMES: &[&str] = &[
    "Skill India Digital Hub - digital training and certification pathways",
    "CSC Academy programs - digital and entrepreneurial skilling modules",
];

pub fn recommend_schemes(profile: &StudentProfile, matches: &[MatchResult]) -> Vec<String> {
    let mut schemes: Vec<&str> = Vec::new();

    if profile.has_low_finances() {
        schemes.extend(LOW_INCOME_SCHEMES);
    }

    if profile.is_rural() {
        schemes.extend(RURAL_SCHEMES);
    } else {
        schemes.extend(URBAN_SCHEMES);
    }

    if has_category(matches, &["Agriculture"]) {
        schemes.extend(AGRICULTURE_SCHEMES);
    }

    if has_category(matches, &["Government", "Defense"]) {
        schemes.extend(PUBLIC_SERVICE_SCHEMES);
    }

    if has_category(matches, &["IT", "Technical"]) {
        schemes.extend(DIGITAL_SCHEMES);
    }

    dedup_preserving_order(schemes.into_iter().map(str::to_string))
        .into_iter()
        .take(MAX_SCHEMES)
        .collect()
}

fn has_category(matches: &[MatchResult], names: &[&str]) -> bool {
    matches
        .iter()
        .any(|m| names.contains(&m.category.as_str()))
}

/// Drops repeats, keeping the first occurrence of each item.
pub fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::{EducationCost, FitBreakdown, Growth};
    use crate::models::profile::{Financial, Location};

    fn match_in(category: &str) -> MatchResult {
        MatchResult {
            career: format!("{category} career"),
            category: category.to_string(),
            score: 50,
            realistic: true,
            aptitude_reasoning: String::new(),
            explanation: vec![],
            fit_breakdown: FitBreakdown {
                interest_overlap: vec![],
                aptitude_overlap: vec![],
                personality_overlap: vec![],
                math_gap: 0,
                education_cost: EducationCost::Low,
                growth: Growth::Medium,
                realism_penalty: 0,
            },
        }
    }

    fn profile(financial: Financial, location: Location) -> StudentProfile {
        StudentProfile {
            financial,
            location,
            ..StudentProfile::default()
        }
    }

    #[test]
    fn test_low_income_urban_without_matches() {
        let schemes = recommend_schemes(&profile(Financial::Low, Location::Urban), &[]);
        let expected: Vec<&str> = LOW_INCOME_SCHEMES
            .iter()
            .chain(URBAN_SCHEMES)
            .copied()
            .collect();
        assert_eq!(schemes, expected);
    }

    #[test]
    fn test_high_income_rural_gets_only_rural_schemes() {
        let schemes = recommend_schemes(&profile(Financial::High, Location::Rural), &[]);
        assert_eq!(schemes, RURAL_SCHEMES.to_vec());
    }

    #[test]
    fn test_category_rules_append_in_order() {
        let matches = vec![match_in("IT"), match_in("Agriculture")];
        let schemes = recommend_schemes(&profile(Financial::Medium, Location::Urban), &matches);
        assert_eq!(schemes[0], URBAN_SCHEMES[0]);
        assert_eq!(schemes[1], AGRICULTURE_SCHEMES[0]);
        assert_eq!(schemes[3], DIGITAL_SCHEMES[0]);
        assert_eq!(schemes.len(), 5);
    }

    #[test]
    fn test_government_and_defense_add_public_service_once() {
        let matches = vec![match_in("Government"), match_in("Defense")];
        let schemes = recommend_schemes(&profile(Financial::Medium, Location::Urban), &matches);
        assert_eq!(schemes.len(), 3);
        assert!(schemes.contains(&PUBLIC_SERVICE_SCHEMES[1].to_string()));
    }

    #[test]
    fn test_truncates_to_eight() {
        let matches = vec![
            match_in("Agriculture"),
            match_in("Government"),
            match_in("Technical"),
        ];
        let schemes = recommend_schemes(&profile(Financial::Low, Location::Rural), &matches);
        // 3 + 2 + 2 + 2 + 2 = 11 candidates
        assert_eq!(schemes.len(), MAX_SCHEMES);
        assert_eq!(schemes[7], PUBLIC_SERVICE_SCHEMES[0]);
        assert!(!schemes.contains(&DIGITAL_SCHEMES[0].to_string()));
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let schemes =
            recommend_schemes(&profile(Financial::High, Location::Urban), &[match_in("it")]);
        assert_eq!(schemes.len(), 1);
    }

    #[test]
    fn test_dedup_preserving_order() {
        let out = dedup_preserving_order(["b", "a", "b", "c", "a"].map(String::from));
        assert_eq!(out, vec!["b", "a", "c"]);
    }
}
