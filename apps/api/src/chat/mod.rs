// Career chat: free-text questions answered by the generation endpoint, with
// keyword-matched canned answers when it is unavailable.

pub mod answer;
pub mod handlers;
pub mod prompts;
