//! Fallback advisory: deterministic, on-topic, and in the locked language.
//! Every other advisory path either matches this shape or is replaced by it.

use crate::advisory::language::LanguageConfig;
use crate::models::advice::AdvisoryResult;
use crate::models::career::MatchResult;
use crate::models::profile::StudentProfile;

pub const PLACEHOLDER_CAREER: &str = "Skilled Career Path";

pub fn build_fallback(
    profile: &StudentProfile,
    matches: &[MatchResult],
    schemes: &[String],
    config: &LanguageConfig,
) -> AdvisoryResult {
    let top = matches.first();
    let best = top.map_or(PLACEHOLDER_CAREER, |m| m.career.as_str());
    let top_reasoning = top
        .map(|m| m.aptitude_reasoning.as_str())
        .filter(|r| !r.is_empty());
    let skills = to_strings(&["Communication", "Problem Solving", "Digital Literacy"]);

    if config.must_use_hindi {
        let first_step = match profile.age {
            Some(age) => format!(
                "आयु {age} के अनुसार अगले 3 महीनों में बुनियादी कौशल और दैनिक अभ्यास शुरू करें।"
            ),
            None => "अगले 3 महीनों में बुनियादी कौशल और दैनिक अभ्यास शुरू करें।".to_string(),
        };

        return AdvisoryResult {
            recommended_career: best.to_string(),
            reason: format!(
                "{best} आपकी रुचि, योग्यता और वर्तमान परिस्थितियों के आधार पर एक व्यावहारिक विकल्प है।"
            ),
            aptitude_reasoning: top_reasoning
                .unwrap_or("आपकी योग्यता प्रोफाइल को देखते हुए इस क्षेत्र में नियमित अभ्यास से अच्छा प्रदर्शन संभव है।")
                .to_string(),
            roadmap: vec![
                first_step,
                "6-12 महीनों में प्रमाणपत्र/डिप्लोमा और छोटे प्रोजेक्ट पूरे करें।".to_string(),
                "12-24 महीनों में इंटर्नशिप/एप्रेंटिसशिप या एंट्री-लेवल जॉब पर फोकस करें।"
                    .to_string(),
            ],
            skills,
            resources: to_strings(&["SWAYAM", "DIKSHA", "YouTube educational channels (Hindi)"]),
            govt_schemes: schemes.to_vec(),
            safety_notes: to_strings(&[
                "यह सलाह शैक्षिक मार्गदर्शन के लिए है, अंतिम निर्णय परिवार/मेंटॉर के साथ लें।",
                "किसी भी अवैध या अनैतिक आय स्रोत से दूर रहें।",
            ]),
            language: config.language(),
        };
    }

    let first_step = match profile.age {
        Some(age) => format!(
            "At age {age}, start with foundational skills and daily practice in the next 3 months."
        ),
        None => "Start with foundational skills and daily practice in the next 3 months.".to_string(),
    };

    AdvisoryResult {
        recommended_career: best.to_string(),
        reason: format!("{best} is a practical fit for your profile, finances, and growth potential."),
        aptitude_reasoning: top_reasoning
            .unwrap_or("Your profile indicates workable aptitude fit, with strong outcomes possible through guided practice.")
            .to_string(),
        roadmap: vec![
            first_step,
            "Complete a certificate/diploma and 2-3 practical projects in 6-12 months.".to_string(),
            "Target internship/apprenticeship or entry-level role in 12-24 months.".to_string(),
        ],
        skills,
        resources: to_strings(&["SWAYAM", "DIKSHA", "NPTEL / Skill India courses"]),
        govt_schemes: schemes.to_vec(),
        safety_notes: to_strings(&[
            "This is educational guidance, not a guaranteed outcome.",
            "Avoid illegal or unethical career shortcuts.",
        ]),
        language: config.language(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
