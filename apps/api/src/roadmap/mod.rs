//! Roadmap generation — a 3-level, 6-lesson curriculum for one subject
//! category, grounded in the catalog's reference text and scaled to the
//! learner's rank.
//!
//! Flow: catalog lookup (with default) → prompt build → one structured-output
//! Gemini call → parse-or-fallback. On any failure the result is an empty
//! level list; callers treat empty as "no roadmap available".

pub mod catalog;
pub mod handlers;
pub mod prompts;

use serde::Deserialize;
use tracing::warn;

use crate::language;
use crate::llm_client::{strip_json_fences, GeminiClient, Generated};
use crate::models::learning::Level;
use crate::models::progress::RankTier;
use crate::roadmap::prompts::{quiz_guidance, roadmap_schema, tier_guidance, ROADMAP_PROMPT_TEMPLATE};

/// Topic titles for the three levels of a roadmap.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelTopics {
    pub level1: String,
    pub level2: String,
    pub level3: String,
}

/// Inputs to roadmap generation, as supplied by the frontend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapParams {
    pub category_id: String,
    /// Kept for frontend compatibility; complexity is driven by `user_rank`.
    #[allow(dead_code)]
    #[serde(default)]
    pub difficulty: String,
    pub topics: LevelTopics,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_rank")]
    pub user_rank: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_rank() -> String {
    "Beginner I".to_string()
}

/// Builds the roadmap prompt. Unknown category ids ground against the
/// default category's text rather than failing.
pub fn build_roadmap_prompt(params: &RoadmapParams) -> String {
    let tier = RankTier::for_rank(&params.user_rank);
    ROADMAP_PROMPT_TEMPLATE
        .replace("{category_id}", &params.category_id)
        .replace("{target_language}", language::display_name(&params.language))
        .replace("{user_rank}", &params.user_rank)
        .replace("{source_material}", catalog::source_material(&params.category_id))
        .replace("{tier_guidance}", tier_guidance(tier))
        .replace("{quiz_guidance}", quiz_guidance(tier))
        .replace("{level1}", &params.topics.level1)
        .replace("{level2}", &params.topics.level2)
        .replace("{level3}", &params.topics.level3)
}

/// Decodes a raw model response into levels. Any mismatch yields an empty
/// list, never an error.
pub fn parse_roadmap(text: &str) -> Generated<Vec<Level>> {
    match serde_json::from_str::<Vec<Level>>(strip_json_fences(text)) {
        Ok(levels) => Generated::Fresh(levels),
        Err(e) => {
            warn!("roadmap response did not match schema, returning empty: {e}");
            Generated::Fallback(Vec::new())
        }
    }
}

/// Generates a custom roadmap for one category.
pub async fn custom_roadmap(llm: &GeminiClient, params: &RoadmapParams) -> Generated<Vec<Level>> {
    let prompt = build_roadmap_prompt(params);

    match llm.generate(&prompt, roadmap_schema()).await {
        Ok(text) => parse_roadmap(&text),
        Err(e) => {
            warn!(
                "roadmap generation call failed for category {}: {e}",
                params.category_id
            );
            Generated::Fallback(Vec::new())
        }
    }
}
