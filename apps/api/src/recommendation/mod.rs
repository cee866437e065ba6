// Career recommendations: prompt construction, tolerant extraction of the model's
// JSON array, per-field normalization, and the static fallback list.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod extractor;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
