//! LLM types — provider-neutral request/response types and errors.
//!
//! Shared by the `OpenAI` and Anthropic clients. The normalized outcome of
//! a completion is either the reply text or an [`LlmError`]; provider wire
//! shapes never cross this boundary.

use wire::{ChatMessage, Role};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Neither provider credential is present in the environment.
    #[error("no LLM provider configured")]
    NotConfigured,

    /// The HTTP request to the LLM provider failed before a status was read.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider success body could not be interpreted.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Client-facing detail text: the raw upstream body for a non-success
    /// status, the error display otherwise.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::ApiResponse { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// Provider-neutral completion request: the composed system prompt plus
/// the conversation history.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub system: String,
    /// User/assistant turns only; inbound system-role entries are dropped
    /// at construction so the composed prompt stays the single source of
    /// system instructions.
    pub history: Vec<ChatMessage>,
}

impl ChatRequest {
    #[must_use]
    pub fn new(system: String, messages: Vec<ChatMessage>) -> Self {
        let history = messages
            .into_iter()
            .filter(|message| message.role != Role::System)
            .collect();
        Self { system, history }
    }
}

// =============================================================================
// CHAT TRAIT
// =============================================================================

/// Provider-neutral async completion contract. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AgentChat: Send + Sync {
    /// Resolve a completion request into reply text.
    ///
    /// Exactly one outbound call is made per invocation; there are no
    /// hidden retries at this layer.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails in transport, the
    /// provider returns a non-success status, or the success body cannot
    /// be interpreted.
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
