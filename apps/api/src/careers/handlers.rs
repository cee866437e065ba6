//! Axum route handlers for browsing a session's careers.
//!
//! A session without suggestions browses the fallback list, so the pages have
//! content before any generation has run.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::careers::browse::{
    all_industries, find_career, search_careers, similar_careers, CareerFilter,
};
use crate::errors::AppError;
use crate::recommendation::fallback::mock_recommendations;
use crate::recommendation::models::RecommendationRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<RecommendationRecord>,
    pub industries: Vec<String>,
    pub bookmarked: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerDetailResponse {
    pub career: RecommendationRecord,
    pub similar: Vec<RecommendationRecord>,
    pub bookmarked: bool,
}

async fn session_careers(
    state: &AppState,
    id: Uuid,
) -> Result<(Vec<RecommendationRecord>, Vec<String>), AppError> {
    let session = state.sessions.get(id).await?;
    let careers = if session.career_suggestions.is_empty() {
        mock_recommendations()
    } else {
        session.career_suggestions
    };
    Ok((careers, session.bookmarked_careers))
}

/// GET /api/v1/sessions/:id/careers?q=&industry=
pub async fn handle_list(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(filter): Query<CareerFilter>,
) -> Result<Json<CareerListResponse>, AppError> {
    let (careers, bookmarked) = session_careers(&state, id).await?;
    let industries = all_industries(&careers);
    let matches = search_careers(&careers, &filter)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(CareerListResponse {
        careers: matches,
        industries,
        bookmarked,
    }))
}

/// GET /api/v1/sessions/:id/careers/:career_id
///
/// Looks in the session's suggestions first, then in the fallback list.
pub async fn handle_detail(
    State(state): State<AppState>,
    Path((id, career_id)): Path<(Uuid, String)>,
) -> Result<Json<CareerDetailResponse>, AppError> {
    let (careers, bookmarked) = session_careers(&state, id).await?;
    let fallback = mock_recommendations();

    let (career, pool) = match find_career(&careers, &career_id) {
        Some(career) => (career, &careers),
        None => match find_career(&fallback, &career_id) {
            Some(career) => (career, &fallback),
            None => return Err(AppError::NotFound(format!("Career {career_id} not found"))),
        },
    };

    let similar = similar_careers(pool, career).into_iter().cloned().collect();

    Ok(Json(CareerDetailResponse {
        career: career.clone(),
        similar,
        bookmarked: bookmarked.contains(&career_id),
    }))
}
