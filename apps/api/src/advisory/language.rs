use crate::models::profile::Language;

/// Output-language lock applied to every advisory path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConfig {
    pub code: &'static str,
    pub name: &'static str,
    pub must_use_hindi: bool,
}

impl LanguageConfig {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Hindi => Self {
                code: "hi",
                name: "Hindi",
                must_use_hindi: true,
            },
            Language::English => Self {
                code: "en",
                name: "English",
                must_use_hindi: false,
            },
        }
    }

    pub fn language(&self) -> Language {
        if self.must_use_hindi {
            Language::Hindi
        } else {
            Language::English
        }
    }
}

/// True if the text has at least one character in the Devanagari block.
pub fn contains_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}

/// Age-banded roadmap guidance passed to the generator.
pub fn age_roadmap_hint(age: Option<u32>, config: &LanguageConfig) -> &'static str {
    let hindi = config.must_use_hindi;
    match age {
        None if hindi => "उम्र नहीं दी गई है, इसलिए रोडमैप को निकट अवधि (0-6 महीने), मध्य अवधि (6-24 महीने) और दीर्घ अवधि (2+ वर्ष) में बनाएं।",
        None => "Age is not provided, so build roadmap in near-term (0-6 months), mid-term (6-24 months), and long-term (2+ years).",
        Some(a) if a <= 14 && hindi => "रोडमैप आयु 14 या उससे कम के लिए बनाएं: foundation, exploration, class selection.",
        Some(a) if a <= 14 => "Build roadmap for age 14 or below: foundation, exploration, class selection.",
        Some(a) if a <= 17 && hindi => "रोडमैप आयु 15-17 के लिए बनाएं: बोर्ड/एंट्रेंस तैयारी, बेसिक स्किल पोर्टफोलियो, शुरुआती प्रमाणपत्र।",
        Some(a) if a <= 17 => "Build roadmap for age 15-17: board/entrance prep, skill portfolio, starter certifications.",
        Some(a) if a <= 22 && hindi => "रोडमैप आयु 18-22 के लिए बनाएं: डिप्लोमा/डिग्री/ITI विकल्प, इंटर्नशिप, जॉब-रेडी स्किल।",
        Some(a) if a <= 22 => "Build roadmap for age 18-22: degree/diploma/ITI choices, internships, job-ready skills.",
        Some(_) if hindi => "रोडमैप वयस्क शिक्षार्थी के लिए बनाएं: तेज री-स्किलिंग, प्रमाणपत्र, और आय-सक्षम भूमिकाएं।",
        Some(_) => "Build roadmap for adult learner: accelerated reskilling, certifications, and income-ready roles.",
    }
}
