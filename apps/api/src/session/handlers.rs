//! Axum route handlers for the Session API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::models::ProfileUpdate;
use crate::recommendation::generator::generate_recommendations;
use crate::session::store::Session;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StepRequest {
    pub step: u8,
}

/// POST /api/v1/sessions
pub async fn handle_create(State(state): State<AppState>) -> (StatusCode, Json<Session>) {
    let session = state.sessions.create().await;
    info!("Created session {}", session.id);
    (StatusCode::CREATED, Json(session))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.update_profile(id, update).await?))
}

/// PUT /api/v1/sessions/:id/step
pub async fn handle_set_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StepRequest>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.set_current_step(id, request.step).await?))
}

/// POST /api/v1/sessions/:id/complete
pub async fn handle_complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.complete_assessment(id).await?))
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.reset_form(id).await?))
}

/// POST /api/v1/sessions/:id/recommendations
///
/// Generates from the stored profile and replaces the session's suggestions.
/// The store lock is not held during generation.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    let profile = state.sessions.get(id).await?.profile;
    let suggestions = generate_recommendations(state.llm.as_ref(), &profile).await;
    Ok(Json(state.sessions.set_suggestions(id, suggestions).await?))
}

/// DELETE /api/v1/sessions/:id/recommendations
pub async fn handle_clear_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.clear_suggestions(id).await?))
}

/// POST /api/v1/sessions/:id/bookmarks/:career_id
pub async fn handle_bookmark(
    State(state): State<AppState>,
    Path((id, career_id)): Path<(Uuid, String)>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.bookmark(id, &career_id).await?))
}

/// DELETE /api/v1/sessions/:id/bookmarks/:career_id
pub async fn handle_remove_bookmark(
    State(state): State<AppState>,
    Path((id, career_id)): Path<(Uuid, String)>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.remove_bookmark(id, &career_id).await?))
}
