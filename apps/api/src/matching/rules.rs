//! Scoring rules — each rule inspects one (profile, entry) pair and emits zero or
//! more score adjustments. The engine folds every adjustment into a running tally,
//! so rule order is explanation order.

use tracing::trace;

use crate::models::career::{CareerEntry, EducationCost};
use crate::models::profile::StudentProfile;

const INTEREST_POINTS: i32 = 10;
const MATH_POINTS: i32 = 8;
const AFFORDABLE_POINTS: i32 = 10;
const APTITUDE_POINTS: i32 = 7;
const PERSONALITY_POINTS: i32 = 4;
const RURAL_POINTS: i32 = 5;
const EARLY_STAGE_LONG_PATH: i32 = -3;

/// Extra headroom on math before the hard realism gate excludes an entry.
const GATE_MATH_MARGIN: i32 = 25;

/// Age band used by age-specific rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeStage {
    Early,
    School,
    College,
    Adult,
    Unknown,
}

impl AgeStage {
    /// Ages outside 10..=80 are not trusted and map to `Unknown`.
    pub fn from_age(age: Option<u32>) -> Self {
        match age {
            Some(a) if !(10..=80).contains(&a) => Self::Unknown,
            Some(a) if a <= 14 => Self::Early,
            Some(a) if a <= 17 => Self::School,
            Some(a) if a <= 22 => Self::College,
            Some(_) => Self::Adult,
            None => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::School => "school",
            Self::College => "college",
            Self::Adult => "adult",
            Self::Unknown => "unknown",
        }
    }
}

/// Everything a rule may look at.
pub struct ScoringContext<'a> {
    pub profile: &'a StudentProfile,
    pub entry: &'a CareerEntry,
    pub stage: AgeStage,
    pub math: i32,
}

impl<'a> ScoringContext<'a> {
    pub fn new(profile: &'a StudentProfile, entry: &'a CareerEntry) -> Self {
        Self {
            profile,
            entry,
            stage: AgeStage::from_age(profile.age),
            math: profile.marks.math as i32,
        }
    }

    fn min_math(&self) -> i32 {
        self.entry.min_math as i32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    pub delta: i32,
    pub explanation: Option<String>,
}

impl Adjustment {
    fn explained(delta: i32, explanation: impl Into<String>) -> Self {
        Self {
            delta,
            explanation: Some(explanation.into()),
        }
    }

    fn silent(delta: i32) -> Self {
        Self {
            delta,
            explanation: None,
        }
    }
}

pub struct ScoreRule {
    pub name: &'static str,
    pub evaluate: fn(&ScoringContext<'_>) -> Vec<Adjustment>,
}

/// Running score plus the reasons that were logged along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: i32,
    pub explanation: Vec<String>,
}

impl Tally {
    fn apply(mut self, adjustment: Adjustment) -> Self {
        self.score += adjustment.delta;
        if let Some(reason) = adjustment.explanation {
            self.explanation.push(reason);
        }
        self
    }
}

pub const RULES: &[ScoreRule] = &[
    ScoreRule {
        name: "interest_match",
        evaluate: interest_match,
    },
    ScoreRule {
        name: "math_requirement",
        evaluate: math_requirement,
    },
    ScoreRule {
        name: "affordable_path",
        evaluate: affordable_path,
    },
    ScoreRule {
        name: "aptitude_match",
        evaluate: aptitude_match,
    },
    ScoreRule {
        name: "personality_fit",
        evaluate: personality_fit,
    },
    ScoreRule {
        name: "rural_friendly",
        evaluate: rural_friendly,
    },
    ScoreRule {
        name: "early_stage_long_path",
        evaluate: early_stage_long_path,
    },
    ScoreRule {
        name: "growth_outlook",
        evaluate: growth_outlook,
    },
    ScoreRule {
        name: "realism_penalty",
        evaluate: realism_penalty_rule,
    },
];

/// Folds every rule into a tally. The score is not clamped here.
pub fn score_entry(ctx: &ScoringContext<'_>) -> Tally {
    RULES
        .iter()
        .flat_map(|rule| {
            let adjustments = (rule.evaluate)(ctx);
            trace!(rule = rule.name, career = %ctx.entry.career, ?adjustments);
            adjustments
        })
        .fold(Tally::default(), Tally::apply)
}

/// Hard gate: a high-cost path under low finances with a math gap wider than
/// the gate margin is never scored or shown.
pub fn is_realistic(ctx: &ScoringContext<'_>) -> bool {
    let high_cost_barrier =
        ctx.entry.education_cost == EducationCost::High && ctx.profile.has_low_finances();
    let major_academic_gap = ctx.math + GATE_MATH_MARGIN < ctx.min_math();
    !(high_cost_barrier && major_academic_gap)
}

/// Soft penalty for partial affordability and academic gaps.
pub fn realism_penalty(ctx: &ScoringContext<'_>) -> u32 {
    let low_finances = ctx.profile.has_low_finances();
    let mut penalty = 0;

    match ctx.entry.education_cost {
        EducationCost::High if low_finances => penalty += 16,
        EducationCost::Medium if low_finances => penalty += 4,
        _ => {}
    }

    let shortfall = ctx.min_math() - ctx.math;
    penalty += if shortfall > 20 {
        18
    } else if shortfall > 10 {
        8
    } else if shortfall > 0 {
        4
    } else {
        0
    };

    if ctx.profile.is_rural() && !ctx.entry.rural_friendly && low_finances {
        penalty += 4;
    }

    penalty
}

/// Catalog tags (original casing) that appear in the student's tag set.
pub fn overlap<'a>(catalog_tags: &'a [String], student_tags: &[String]) -> Vec<&'a str> {
    catalog_tags
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            student_tags.iter().any(|s| *s == tag)
        })
        .map(String::as_str)
        .collect()
}

fn interest_match(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    overlap(&ctx.entry.interests, &ctx.profile.interests)
        .into_iter()
        .map(|tag| Adjustment::explained(INTEREST_POINTS, format!("Interest match: {tag}")))
        .collect()
}

fn math_requirement(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    if ctx.math >= ctx.min_math() {
        vec![Adjustment::explained(MATH_POINTS, "Math requirement satisfied")]
    } else {
        vec![]
    }
}

fn affordable_path(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    if ctx.profile.has_low_finances() && ctx.entry.education_cost == EducationCost::Low {
        vec![Adjustment::explained(AFFORDABLE_POINTS, "Affordable education path")]
    } else {
        vec![]
    }
}

fn aptitude_match(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    overlap(&ctx.entry.aptitude, &ctx.profile.aptitude)
        .into_iter()
        .map(|tag| Adjustment::explained(APTITUDE_POINTS, format!("Aptitude match: {tag}")))
        .collect()
}

fn personality_fit(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    overlap(&ctx.entry.personality, &ctx.profile.personality)
        .into_iter()
        .map(|tag| Adjustment::explained(PERSONALITY_POINTS, format!("Personality fit: {tag}")))
        .collect()
}

fn rural_friendly(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    if ctx.profile.is_rural() && ctx.entry.rural_friendly {
        vec![Adjustment::explained(RURAL_POINTS, "Rural friendly career")]
    } else {
        vec![]
    }
}

fn early_stage_long_path(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    if ctx.stage == AgeStage::Early && ctx.entry.education_cost == EducationCost::High {
        vec![Adjustment::explained(
            EARLY_STAGE_LONG_PATH,
            "Long preparation path for current age stage",
        )]
    } else {
        vec![]
    }
}

fn growth_outlook(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    vec![Adjustment::silent(ctx.entry.growth.bonus())]
}

fn realism_penalty_rule(ctx: &ScoringContext<'_>) -> Vec<Adjustment> {
    vec![Adjustment::silent(-(realism_penalty(ctx) as i32))]
}
