//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The LLM client is resolved once at startup; `None` means no provider
//! credential was configured and AI requests answer 503. Handlers are
//! stateless across calls — conversation history arrives in full with
//! every request.

use std::sync::Arc;

use crate::llm::AgentChat;

/// Shared application state, injected into Axum handlers via State
/// extractor. Clone is required by Axum; all inner fields are Arc-wrapped
/// or Copy.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if no provider credential is configured.
    pub llm: Option<Arc<dyn AgentChat>>,
    /// When `false` (the default), upstream error text is withheld from
    /// client responses.
    pub expose_error_details: bool,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn AgentChat>>, expose_error_details: bool) -> Self {
        Self { llm, expose_error_details }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
