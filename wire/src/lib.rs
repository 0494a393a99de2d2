//! Shared wire types for the DAO governance agent.
//!
//! This crate owns the JSON shapes exchanged between the UI-side state
//! layer (`client`) and the agent endpoint (`server`): chat messages, the
//! DAO context snapshot injected into the system prompt, and the HTTP
//! request/response bodies of `POST /api/dao-agent`. Backend-specific
//! request schemas live in `server::llm` and never appear here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// ROLES & MESSAGES
// =============================================================================

/// Author of a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// Lowercase wire name, as the LLM provider APIs expect it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// A single history element as exchanged over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

// =============================================================================
// DAO CONTEXT SNAPSHOT
// =============================================================================

/// Point-in-time summary of the DAO under discussion.
///
/// All fields are absent-tolerant; absent fields are omitted from the
/// serialized form rather than emitted as placeholders. Field declaration
/// order is fixed so serialization is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_supply: Option<String>,
    /// Opaque proposal records, passed through verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current_proposals: Vec<Value>,
    /// Opaque voting-round records, passed through verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub voting_rounds: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_address: Option<String>,
}

// =============================================================================
// ENDPOINT BODIES
// =============================================================================

/// Inbound payload of `POST /api/dao-agent`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(rename = "daoContext", default, skip_serializing_if = "Option::is_none")]
    pub dao_context: Option<DaoContext>,
}

/// Success body of `POST /api/dao-agent`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    pub message: String,
    pub success: bool,
}

/// Error body of `POST /api/dao-agent` (400/500/503).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorReply {
    #[must_use]
    pub fn new(error: &str) -> Self {
        Self { error: error.to_owned(), details: None }
    }

    #[must_use]
    pub fn with_details(error: &str, details: Option<String>) -> Self {
        Self { error: error.to_owned(), details }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
