//! Recommendation Generation: orchestrates the recommendation pipeline.
//!
//! Flow: format_profile → build prompt → TextGenerator::generate →
//!       extract_recommendations → normalize_batch (sorted by match score).
//!
//! All-or-nothing fallback: a missing credential, a failed call, or output that
//! does not extract to a well-shaped array yields `mock_recommendations()`
//! unchanged. Per-field defaults only apply when extraction succeeded.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::{COUNSELLOR_PERSONA, INDIA_CONTEXT_INSTRUCTION, JSON_ARRAY_ONLY};
use crate::llm_client::{LlmError, TextGenerator};
use crate::profile::formatter::format_profile;
use crate::profile::models::UserProfile;
use crate::recommendation::extractor::{extract_recommendations, ExtractionError};
use crate::recommendation::fallback::mock_recommendations;
use crate::recommendation::models::RecommendationRecord;
use crate::recommendation::normalize::normalize_batch;
use crate::recommendation::prompts::{RECOMMENDATION_COUNT, RECOMMENDATION_PROMPT_TEMPLATE};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("unusable generation output: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Produces recommendations for a profile. Never fails and never returns an
/// empty list: every failure path resolves to the static fallback list.
pub async fn generate_recommendations(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
) -> Vec<RecommendationRecord> {
    if !llm.is_configured() {
        warn!("No generation API key configured; using fallback recommendations");
        return mock_recommendations();
    }

    match try_generate(llm, profile).await {
        Ok(records) => {
            info!("Generated {} career recommendations", records.len());
            records
        }
        Err(e) => {
            warn!("Recommendation generation failed, using fallback list: {e}");
            mock_recommendations()
        }
    }
}

async fn try_generate(
    llm: &dyn TextGenerator,
    profile: &UserProfile,
) -> Result<Vec<RecommendationRecord>, GenerationError> {
    let prompt = build_recommendation_prompt(profile);
    let text = llm.generate(&prompt).await?;
    let items = extract_recommendations(&text)?;

    let stamp = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    Ok(normalize_batch(&items, stamp, &mut rng))
}

/// Builds the recommendation prompt by filling the template with the formatted profile.
pub fn build_recommendation_prompt(profile: &UserProfile) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{persona}", COUNSELLOR_PERSONA)
        .replace("{india_context}", INDIA_CONTEXT_INSTRUCTION)
        .replace("{count}", &RECOMMENDATION_COUNT.to_string())
        .replace("{json_only}", JSON_ARRAY_ONLY)
        .replace("{profile}", &format_profile(profile))
}
