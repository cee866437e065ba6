use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

/// GET /health
/// Returns service status, version, and whether live generation is available.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let generation = if state.llm.is_configured() {
        "live"
    } else {
        "fallback"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-api",
        "model": MODEL,
        "generation": generation
    }))
}
