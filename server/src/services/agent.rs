//! Agent service — prompt composition and completion orchestration.
//!
//! DESIGN
//! ======
//! Receives the full message history plus an optional DAO context, builds
//! the system prompt, and resolves a single completion through the
//! configured provider. Stateless: nothing is persisted or deduplicated
//! across calls.

use tracing::info;
use wire::{ChatMessage, DaoContext};

use super::prompt;
use crate::llm::types::{ChatRequest, LlmError};
use crate::state::AppState;

/// Errors surfaced to the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// No provider credential was configured at startup.
    #[error("AI service not configured")]
    NotConfigured,

    /// The gateway call failed after configuration checks passed.
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Resolve one user turn into reply text.
///
/// # Errors
///
/// Returns [`AgentError::NotConfigured`] before any outbound call when no
/// LLM client is available, or [`AgentError::Llm`] when the completion
/// fails.
pub async fn respond(
    state: &AppState,
    messages: Vec<ChatMessage>,
    context: Option<&DaoContext>,
) -> Result<String, AgentError> {
    let llm = state.llm.as_ref().ok_or(AgentError::NotConfigured)?;

    let system = prompt::build_system_prompt(context);
    let request = ChatRequest::new(system, messages);
    info!(history_len = request.history.len(), has_context = context.is_some(), "agent: prompt received");

    Ok(llm.complete(&request).await?)
}

#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;
