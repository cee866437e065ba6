// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Persona fragment prepended to every prompt.
pub const COUNSELLOR_PERSONA: &str = "You are a career guidance expert specializing in the \
    Indian education system and job market.";

/// Market instruction shared by recommendation and chat prompts.
pub const INDIA_CONTEXT_INSTRUCTION: &str = "\
    Focus on information relevant to Indian students and professionals: \
    Indian degrees, entrance exams, certifications, institutions, \
    and salary figures in Indian Rupees (₹).";

/// Instruction that enforces a bare JSON array response.
pub const JSON_ARRAY_ONLY: &str = "\
    Return ONLY a valid JSON array with NO additional text. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
