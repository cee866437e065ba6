//! Question answering: wraps a free-text question in the counsellor template and
//! returns the model's text verbatim. No JSON extraction.
//!
//! When the call fails the answer degrades to a keyword-matched canned paragraph,
//! and to a generic apology when no keyword matches.

use tracing::{info, warn};

use crate::chat::prompts::{CANNED_ANSWERS, GENERIC_APOLOGY, QUESTION_PROMPT_TEMPLATE};
use crate::llm_client::prompts::{COUNSELLOR_PERSONA, INDIA_CONTEXT_INSTRUCTION};
use crate::llm_client::{LlmError, TextGenerator};

/// Answers a career question. Never fails and never returns an empty string.
pub async fn answer_question(llm: &dyn TextGenerator, question: &str) -> String {
    match try_answer(llm, question).await {
        Ok(answer) => {
            info!("Answered career question ({} chars)", answer.len());
            answer
        }
        Err(e) => {
            warn!("Question answering failed, using canned answer: {e}");
            canned_answer(question).to_string()
        }
    }
}

async fn try_answer(llm: &dyn TextGenerator, question: &str) -> Result<String, LlmError> {
    if !llm.is_configured() {
        return Err(LlmError::MissingApiKey);
    }
    let answer = llm.generate(&build_question_prompt(question)).await?;
    if answer.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(answer)
}

pub fn build_question_prompt(question: &str) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{persona}", COUNSELLOR_PERSONA)
        .replace("{india_context}", INDIA_CONTEXT_INSTRUCTION)
        .replace("{question}", question.trim())
}

/// Picks the offline answer for a question by case-insensitive keyword match.
pub fn canned_answer(question: &str) -> &'static str {
    let question = question.to_lowercase();
    CANNED_ANSWERS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| question.contains(k)))
        .map(|(_, answer)| *answer)
        .unwrap_or(GENERIC_APOLOGY)
}
