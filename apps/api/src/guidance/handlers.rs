use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::match_careers;
use crate::models::advice::AdvisoryResult;
use crate::models::career::{CareerEntry, MatchResult};
use crate::models::profile::{Language, StudentProfile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GuidanceMeta {
    pub language: Language,
    pub age: Option<u32>,
    pub realistic_matches_count: usize,
}

#[derive(Debug, Serialize)]
pub struct GuidanceResponse {
    pub matches: Vec<MatchResult>,
    pub ai_advice: AdvisoryResult,
    pub best_match: Option<MatchResult>,
    pub meta: GuidanceMeta,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse<'a> {
    pub categories: Vec<&'a str>,
    pub careers: Vec<&'a CareerEntry>,
}

/// POST /career-guidance, POST /api/v1/career-guidance
///
/// Any JSON value is accepted; unusable fields fall back to profile defaults.
pub async fn handle_career_guidance(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GuidanceResponse>, AppError> {
    let Json(raw) = body?;
    let request_id = Uuid::new_v4();

    async move {
        let profile = StudentProfile::from_raw(&raw);
        let matches = match_careers(&profile, &state.catalog);
        info!(
            matches = matches.len(),
            language = ?profile.language,
            "Career matching complete"
        );

        let ai_advice = state.advisor.get_advice(&profile, &matches).await;

        Ok(Json(GuidanceResponse {
            best_match: matches.first().cloned(),
            meta: GuidanceMeta {
                language: profile.language,
                age: profile.age,
                realistic_matches_count: matches.len(),
            },
            matches,
            ai_advice,
        }))
    }
    .instrument(info_span!("career_guidance", %request_id))
    .await
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
    Query(params): Query<CategoryQuery>,
) -> Result<Json<Value>, AppError> {
    let catalog = &state.catalog;
    let careers = match params.category.as_deref() {
        Some(category) => {
            let entries = catalog.in_category(category);
            if entries.is_empty() {
                return Err(AppError::NotFound(format!("Unknown category: {category}")));
            }
            entries
        }
        None => catalog.entries().iter().collect(),
    };

    let response = CatalogResponse {
        categories: catalog.categories(),
        careers,
    };
    Ok(Json(
        serde_json::to_value(&response).map_err(anyhow::Error::from)?,
    ))
}
