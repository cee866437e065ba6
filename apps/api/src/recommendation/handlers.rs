//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::profile::models::UserProfile;
use crate::recommendation::fallback::mock_recommendations;
use crate::recommendation::generator::generate_recommendations;
use crate::recommendation::models::RecommendationRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendationRecord>,
}

/// POST /api/v1/recommendations
///
/// Generates recommendations for an ad-hoc profile. Always 200: failures resolve
/// to the fallback list.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Json<RecommendationsResponse> {
    let recommendations = generate_recommendations(state.llm.as_ref(), &profile).await;
    Json(RecommendationsResponse { recommendations })
}

/// GET /api/v1/recommendations/mock
pub async fn handle_mock() -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        recommendations: mock_recommendations(),
    })
}
