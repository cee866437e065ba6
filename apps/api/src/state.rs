use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. Default: the Gemini `LlmClient`; tests inject stubs.
    pub llm: Arc<dyn TextGenerator>,
    pub sessions: SessionStore,
}
