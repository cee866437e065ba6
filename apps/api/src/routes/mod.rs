pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::careers::handlers as careers;
use crate::chat::handlers as chat;
use crate::profile::handlers as profile;
use crate::recommendation::handlers as recommendation;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless API
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_generate),
        )
        .route(
            "/api/v1/recommendations/mock",
            get(recommendation::handle_mock),
        )
        .route("/api/v1/profile/format", post(profile::handle_format))
        .route("/api/v1/chat", post(chat::handle_chat))
        // Session API
        .route("/api/v1/sessions", post(session::handle_create))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get).delete(session::handle_delete),
        )
        .route(
            "/api/v1/sessions/:id/profile",
            put(session::handle_update_profile),
        )
        .route("/api/v1/sessions/:id/step", put(session::handle_set_step))
        .route(
            "/api/v1/sessions/:id/complete",
            post(session::handle_complete),
        )
        .route("/api/v1/sessions/:id/reset", post(session::handle_reset))
        .route(
            "/api/v1/sessions/:id/recommendations",
            post(session::handle_generate).delete(session::handle_clear_recommendations),
        )
        .route(
            "/api/v1/sessions/:id/bookmarks/:career_id",
            post(session::handle_bookmark).delete(session::handle_remove_bookmark),
        )
        // Careers API
        .route("/api/v1/sessions/:id/careers", get(careers::handle_list))
        .route(
            "/api/v1/sessions/:id/careers/:career_id",
            get(careers::handle_detail),
        )
        .with_state(state)
}
