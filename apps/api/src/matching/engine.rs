//! Matching Engine — ranks the catalog against a student profile.
//!
//! Algorithm:
//! 1. Drop entries that fail the realism gate
//! 2. Fold the scoring rules for each surviving entry, clamp to 0–100
//! 3. Stable sort by score descending (ties keep catalog order)
//! 4. Keep the first entry per category until `MAX_MATCHES` are collected

use std::collections::HashSet;

use tracing::debug;

use crate::matching::catalog::Catalog;
use crate::matching::rules::{
    is_realistic, overlap, realism_penalty, score_entry, AgeStage, ScoringContext,
};
use crate::models::career::{FitBreakdown, MatchResult};
use crate::models::profile::StudentProfile;

pub const MAX_MATCHES: usize = 5;

/// Pure and total: the same inputs always give the same ranked list.
pub fn match_careers(profile: &StudentProfile, catalog: &Catalog) -> Vec<MatchResult> {
    let mut scored: Vec<MatchResult> = catalog
        .entries()
        .iter()
        .map(|entry| ScoringContext::new(profile, entry))
        .filter(is_realistic)
        .map(|ctx| build_result(&ctx))
        .collect();

    let realistic = scored.len();
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let results = diversify(scored);
    debug!(
        "Matched {} of {} catalog entries ({} realistic), age stage {}",
        results.len(),
        catalog.len(),
        realistic,
        AgeStage::from_age(profile.age).as_str()
    );
    results
}

/// One result per category, in ranked order, at most `MAX_MATCHES`.
fn diversify(ranked: Vec<MatchResult>) -> Vec<MatchResult> {
    let mut used_categories: HashSet<String> = HashSet::new();
    ranked
        .into_iter()
        .filter(|result| used_categories.insert(result.category.clone()))
        .take(MAX_MATCHES)
        .collect()
}

fn build_result(ctx: &ScoringContext<'_>) -> MatchResult {
    let tally = score_entry(ctx);
    let entry = ctx.entry;

    let aptitude_overlap: Vec<String> = overlap(&entry.aptitude, &ctx.profile.aptitude)
        .into_iter()
        .map(str::to_string)
        .collect();

    let aptitude_reasoning = if aptitude_overlap.is_empty() {
        "Limited direct aptitude match; requires deliberate skill-building.".to_string()
    } else {
        format!("Aptitude alignment on {}.", aptitude_overlap.join(", "))
    };

    MatchResult {
        career: entry.career.clone(),
        category: entry.category.clone(),
        score: tally.score.clamp(0, 100) as u32,
        realistic: true,
        aptitude_reasoning,
        explanation: tally.explanation,
        fit_breakdown: FitBreakdown {
            interest_overlap: to_owned(overlap(&entry.interests, &ctx.profile.interests)),
            aptitude_overlap,
            personality_overlap: to_owned(overlap(&entry.personality, &ctx.profile.personality)),
            math_gap: entry.min_math.saturating_sub(ctx.profile.marks.math),
            education_cost: entry.education_cost,
            growth: entry.growth,
            realism_penalty: realism_penalty(ctx),
        },
    }
}

fn to_owned(tags: Vec<&str>) -> Vec<String> {
    tags.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::{CareerEntry, EducationCost, Growth};
    use crate::models::profile::{Financial, Language, Location, Marks};

    fn entry(
        career: &str,
        category: &str,
        min_math: u32,
        cost: EducationCost,
        growth: Growth,
    ) -> CareerEntry {
        CareerEntry {
            career: career.to_string(),
            category: category.to_string(),
            interests: vec![],
            aptitude: vec![],
            personality: vec![],
            min_math,
            education_cost: cost,
            growth,
            rural_friendly: false,
        }
    }

    fn engineering_entry() -> CareerEntry {
        CareerEntry {
            interests: vec!["machines".to_string(), "design".to_string()],
            aptitude: vec!["logic".to_string(), "spatial".to_string()],
            rural_friendly: true,
            ..entry(
                "Mechanical Technician",
                "Engineering",
                70,
                EducationCost::Medium,
                Growth::High,
            )
        }
    }

    fn rural_student() -> StudentProfile {
        StudentProfile {
            name: "Ravi".to_string(),
            age: Some(16),
            interests: vec!["machines".to_string()],
            marks: Marks { math: 85 },
            aptitude: vec!["logic".to_string()],
            personality: vec![],
            financial: Financial::Low,
            location: Location::Rural,
            language: Language::English,
        }
    }

    fn diverse_profiles() -> Vec<StudentProfile> {
        let mut profiles = Vec::new();
        for math in [0, 20, 45, 70, 100] {
            for financial in [Financial::Low, Financial::Medium, Financial::High] {
                for location in [Location::Urban, Location::Rural] {
                    for age in [None, Some(12), Some(16), Some(20), Some(35)] {
                        profiles.push(StudentProfile {
                            age,
                            interests: vec!["computers".into(), "farming".into(), "art".into()],
                            aptitude: vec!["logic".into(), "memory".into()],
                            personality: vec!["patient".into(), "disciplined".into()],
                            marks: Marks { math },
                            financial,
                            location,
                            ..StudentProfile::default()
                        });
                    }
                }
            }
        }
        profiles
    }

    #[test]
    fn test_worked_example_scores_32() {
        let catalog = Catalog::new(vec![
            engineering_entry(),
            entry("Clerk", "Government", 90, EducationCost::Medium, Growth::Low),
        ])
        .unwrap();

        let results = match_careers(&rural_student(), &catalog);
        let top = &results[0];
        assert_eq!(top.career, "Mechanical Technician");
        // +10 interest +8 math +7 aptitude +5 rural +6 growth −4 medium-cost penalty
        assert_eq!(top.score, 32);
        assert_eq!(top.fit_breakdown.realism_penalty, 4);
        assert_eq!(top.fit_breakdown.math_gap, 0);
        assert_eq!(top.fit_breakdown.interest_overlap, vec!["machines"]);
        assert_eq!(top.aptitude_reasoning, "Aptitude alignment on logic.");
    }

    #[test]
    fn test_unrealistic_entries_are_excluded() {
        let catalog = Catalog::new(vec![
            entry("Surgeon", "Healthcare", 95, EducationCost::High, Growth::High),
            entry("Farmer", "Agriculture", 10, EducationCost::Low, Growth::Low),
        ])
        .unwrap();
        let profile = StudentProfile {
            marks: Marks { math: 40 },
            ..StudentProfile::default()
        };

        let results = match_careers(&profile, &catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].career, "Farmer");
    }

    #[test]
    fn test_one_result_per_category() {
        let catalog = Catalog::new(vec![
            entry("A1", "A", 0, EducationCost::Low, Growth::High),
            entry("A2", "A", 0, EducationCost::Low, Growth::High),
            entry("B1", "B", 0, EducationCost::Low, Growth::Medium),
        ])
        .unwrap();

        let results = match_careers(&StudentProfile::default(), &catalog);
        let careers: Vec<&str> = results.iter().map(|r| r.career.as_str()).collect();
        assert_eq!(careers, vec!["A1", "B1"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            entry("First", "X", 0, EducationCost::Low, Growth::Low),
            entry("Second", "Y", 0, EducationCost::Low, Growth::Low),
            entry("Third", "Z", 0, EducationCost::Low, Growth::Low),
        ])
        .unwrap();

        let results = match_careers(&StudentProfile::default(), &catalog);
        let careers: Vec<&str> = results.iter().map(|r| r.career.as_str()).collect();
        assert_eq!(careers, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_caps_at_five_results() {
        let entries = (0..8)
            .map(|i| entry(&format!("C{i}"), &format!("Cat{i}"), 0, EducationCost::Low, Growth::Low))
            .collect();
        let catalog = Catalog::new(entries).unwrap();
        assert_eq!(match_careers(&StudentProfile::default(), &catalog).len(), MAX_MATCHES);
    }

    #[test]
    fn test_score_is_clamped_at_zero() {
        let catalog = Catalog::new(vec![entry(
            "Pilot",
            "Aviation",
            60,
            EducationCost::High,
            Growth::Low,
        )])
        .unwrap();
        let profile = StudentProfile {
            marks: Marks { math: 36 },
            location: Location::Rural,
            ..StudentProfile::default()
        };
        // gate passes (36 + 25 ≥ 60), penalty 16 + 18 + 4 drives score negative
        let results = match_careers(&profile, &catalog);
        assert_eq!(results[0].score, 0);
        assert_eq!(results[0].fit_breakdown.realism_penalty, 38);
        assert_eq!(results[0].fit_breakdown.math_gap, 24);
    }

    #[test]
    fn test_no_aptitude_match_reasoning() {
        let catalog = Catalog::new(vec![engineering_entry()]).unwrap();
        let results = match_careers(&StudentProfile::default(), &catalog);
        assert!(results[0].aptitude_reasoning.starts_with("Limited direct aptitude match"));
    }

    #[test]
    fn test_empty_catalog_yields_no_matches() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert!(match_careers(&rural_student(), &catalog).is_empty());
    }

    #[test]
    fn test_invariants_hold_across_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        for profile in diverse_profiles() {
            let results = match_careers(&profile, &catalog);
            assert!(results.len() <= MAX_MATCHES);

            let categories: HashSet<&str> = results.iter().map(|r| r.category.as_str()).collect();
            assert_eq!(categories.len(), results.len());

            for pair in results.windows(2) {
                assert!(pair[0].score >= pair[1].score);
            }

            for result in &results {
                assert!(result.score <= 100);
                let entry = catalog
                    .entries()
                    .iter()
                    .find(|e| e.career == result.career)
                    .unwrap();
                let gated = entry.education_cost == EducationCost::High
                    && profile.financial == Financial::Low
                    && (profile.marks.math as i32) + 25 < entry.min_math as i32;
                assert!(!gated, "{} should have been gated", entry.career);
            }
        }
    }

    #[test]
    fn test_matching_is_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        let profile = rural_student();
        assert_eq!(
            match_careers(&profile, &catalog),
            match_careers(&profile, &catalog)
        );
    }
}
