//! Agent route — `POST /api/dao-agent`.
//!
//! The API key never leaves this process; the browser talks to this
//! endpoint, not to the LLM providers. Payload validation happens here,
//! before any downstream work; orchestration lives in `services::agent`.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::error;
use wire::{AgentReply, ChatMessage, DaoContext, ErrorReply};

use crate::services::agent::{self, AgentError};
use crate::state::AppState;

/// `POST /api/dao-agent` — resolve one user turn into an assistant reply.
///
/// Responses:
/// - `200 {message, success: true}`
/// - `400 {error: "Invalid messages format"}` — malformed payload, no
///   downstream call attempted
/// - `503 {error: "AI service not configured"}` — no provider credential;
///   the body never says which one is missing
/// - `500 {error: "Failed to process request", details?}` — gateway
///   failure; `details` only when the state allows exposing it
pub async fn prompt(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    let Some(messages) = parse_messages(&payload) else {
        return (StatusCode::BAD_REQUEST, Json(ErrorReply::new("Invalid messages format"))).into_response();
    };
    let context = parse_context(&payload);

    match agent::respond(&state, messages, context.as_ref()).await {
        Ok(message) => (StatusCode::OK, Json(AgentReply { message, success: true })).into_response(),
        Err(AgentError::NotConfigured) => {
            error!("no LLM API key configured");
            (StatusCode::SERVICE_UNAVAILABLE, Json(ErrorReply::new("AI service not configured"))).into_response()
        }
        Err(AgentError::Llm(e)) => {
            error!(error = %e, "agent request failed");
            let details = state.expose_error_details.then(|| e.detail());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorReply::with_details("Failed to process request", details)),
            )
                .into_response()
        }
    }
}

/// Extract and validate `payload.messages`: must be present, an array,
/// and shaped as role/content records.
fn parse_messages(payload: &Value) -> Option<Vec<ChatMessage>> {
    let raw = payload.get("messages")?;
    raw.as_array()?;
    serde_json::from_value(raw.clone()).ok()
}

/// Extract `payload.daoContext`. Optional and lenient: a missing, null, or
/// unusable context degrades to an uncontextualized prompt rather than a
/// client error.
fn parse_context(payload: &Value) -> Option<DaoContext> {
    let raw = payload.get("daoContext")?;
    if raw.is_null() {
        return None;
    }
    serde_json::from_value(raw.clone()).ok()
}

#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;
