//! Advisory Orchestrator — scheme lookup, fallback, one bounded generation attempt,
//! then sanitization.
//!
//! Flow: language lock → age hint → schemes → fallback →
//!       (no generator? return fallback) → generate with timeout →
//!       strip fences → parse JSON → sanitize.
//!
//! `get_advice` never fails: every error on the generation path yields the
//! fallback computed up front.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use serde_json::Value;
use tracing::{info, warn};

use crate::advisory::fallback::build_fallback;
use crate::advisory::language::{age_roadmap_hint, LanguageConfig};
use crate::advisory::prompts::{
    ADVISORY_PROMPT_TEMPLATE, ADVISORY_SYSTEM_TEMPLATE, ENGLISH_RULE, HINDI_RULE,
};
use crate::advisory::sanitizer::sanitize;
use crate::advisory::schemes::recommend_schemes;
use crate::config::Config;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, SAFETY_INSTRUCTION};
use crate::llm_client::{strip_json_fences, AdviceGenerator, LlmClient, LlmError};
use crate::models::advice::AdvisoryResult;
use crate::models::career::MatchResult;
use crate::models::profile::StudentProfile;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct Advisor {
    /// `None` when no generation credential is configured.
    generator: Option<Arc<dyn AdviceGenerator>>,
    timeout: Duration,
}

impl Advisor {
    pub fn new(generator: Option<Arc<dyn AdviceGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Builds an `LlmClient` only when an API key is configured.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let timeout = config.llm_timeout();
        let generator = match &config.openrouter_api_key {
            Some(key) => {
                let client = LlmClient::new(
                    key.clone(),
                    config.llm_api_url.clone(),
                    config.llm_model.clone(),
                    timeout,
                )
                .context("Failed to build LLM HTTP client")?;
                info!("LLM advisory enabled (model: {})", client.model());
                Some(Arc::new(client) as Arc<dyn AdviceGenerator>)
            }
            None => {
                info!("OPENROUTER_API_KEY not set; advisories will use the fallback builder");
                None
            }
        };
        Ok(Self::new(generator, timeout))
    }

    pub fn generation_enabled(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn get_advice(
        &self,
        profile: &StudentProfile,
        matches: &[MatchResult],
    ) -> AdvisoryResult {
        let config = LanguageConfig::for_language(profile.language);
        let age_hint = age_roadmap_hint(profile.age, &config);
        let schemes = recommend_schemes(profile, matches);
        let fallback = build_fallback(profile, matches, &schemes, &config);

        let Some(generator) = &self.generator else {
            info!("No generator configured; using fallback advisory");
            return fallback;
        };

        match self
            .generate_candidate(generator.as_ref(), profile, matches, &schemes, age_hint, &config)
            .await
        {
            Ok(candidate) => {
                info!("Generated advisory received ({}); sanitizing", config.name);
                sanitize(Some(&candidate), &config, &fallback, &schemes)
            }
            Err(e) => {
                warn!("Advisory generation failed, using fallback: {e}");
                fallback
            }
        }
    }

    async fn generate_candidate(
        &self,
        generator: &dyn AdviceGenerator,
        profile: &StudentProfile,
        matches: &[MatchResult],
        schemes: &[String],
        age_hint: &str,
        config: &LanguageConfig,
    ) -> Result<Value, LlmError> {
        let system = build_system_prompt(config);
        let prompt = build_user_prompt(profile, matches, schemes, age_hint)?;

        let raw = tokio::time::timeout(self.timeout, generator.generate(&system, &prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))??;

        Ok(serde_json::from_str(strip_json_fences(&raw))?)
    }
}

fn build_system_prompt(config: &LanguageConfig) -> String {
    let language_rule = if config.must_use_hindi {
        HINDI_RULE
    } else {
        ENGLISH_RULE
    };

    ADVISORY_SYSTEM_TEMPLATE
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{safety_instruction}", SAFETY_INSTRUCTION)
        .replace("{language_name}", config.name)
        .replace("{language_rule}", language_rule)
}

fn build_user_prompt(
    profile: &StudentProfile,
    matches: &[MatchResult],
    schemes: &[String],
    age_hint: &str,
) -> Result<String, serde_json::Error> {
    Ok(ADVISORY_PROMPT_TEMPLATE
        .replace("{profile_json}", &serde_json::to_string(profile)?)
        .replace("{matches_json}", &serde_json::to_string(matches)?)
        .replace("{schemes_json}", &serde_json::to_string(schemes)?)
        .replace("{age_hint}", age_hint))
}
