//! LLM — multi-provider gateway for the DAO agent.
//!
//! DESIGN
//! ======
//! `LlmClient` dispatches to `OpenAI` or Anthropic based on which API key
//! is present in the environment, `OpenAI` first. The choice is made once
//! at construction; every completion after that goes through the uniform
//! [`AgentChat`] contract and yields exactly one normalized `Ok`/`Err`
//! outcome. Model, temperature, and output length are fixed per backend
//! rather than request-controlled.

pub mod anthropic;
pub mod config;
pub mod openai;
pub mod types;

use config::{Backend, Credentials, LlmTimeouts, select_backend};
pub use types::AgentChat;
use types::{ChatRequest, LlmError};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client that dispatches to either `OpenAI` or Anthropic.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: Provider,
}

enum Provider {
    OpenAi(openai::OpenAiClient),
    Anthropic(anthropic::AnthropicClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// - `OPENAI_API_KEY`: selects the `OpenAI` backend (takes precedence)
    /// - `ANTHROPIC_API_KEY`: selects the Anthropic backend
    /// - `LLM_REQUEST_TIMEOUT_SECS` / `LLM_CONNECT_TIMEOUT_SECS`: optional
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::NotConfigured`] when neither key is set, or an
    /// error if the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_credentials(Credentials::from_env(), LlmTimeouts::from_env())
    }

    /// Build an LLM client from explicit credentials.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::NotConfigured`] when no usable credential is
    /// present, or an error if the HTTP client fails to build.
    pub fn from_credentials(credentials: Credentials, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let inner = match select_backend(credentials) {
            Some(Backend::OpenAi(key)) => Provider::OpenAi(openai::OpenAiClient::new(key, timeouts)?),
            Some(Backend::Anthropic(key)) => Provider::Anthropic(anthropic::AnthropicClient::new(key, timeouts)?),
            None => return Err(LlmError::NotConfigured),
        };
        Ok(Self { inner })
    }

    /// Name of the selected backend, for startup logging.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        match &self.inner {
            Provider::OpenAi(_) => "openai",
            Provider::Anthropic(_) => "anthropic",
        }
    }
}

#[async_trait::async_trait]
impl AgentChat for LlmClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        match &self.inner {
            Provider::OpenAi(client) => client.complete(request).await,
            Provider::Anthropic(client) => client.complete(request).await,
        }
    }
}
