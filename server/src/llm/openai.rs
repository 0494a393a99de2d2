//! `OpenAI` Chat Completions client.
//!
//! Thin HTTP wrapper for `/v1/chat/completions`. The composed system
//! prompt rides as the leading message of the `messages` array. Pure
//! parsing in `parse_response` for testability.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::{ChatRequest, LlmError};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;

// =============================================================================
// CLIENT
// =============================================================================

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key })
    }

    pub async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let messages = build_messages(request);
        let body = ApiRequest { model: MODEL, messages: &messages, temperature: TEMPERATURE, max_tokens: MAX_TOKENS };

        let response = self
            .http
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ApiMessage<'a>],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

fn build_messages(request: &ChatRequest) -> Vec<ApiMessage<'_>> {
    let mut out = Vec::with_capacity(request.history.len() + 1);
    out.push(ApiMessage { role: "system", content: &request.system });
    for message in &request.history {
        out.push(ApiMessage { role: message.role.as_str(), content: &message.content });
    }
    out
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<String, LlmError> {
    let root: Value = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    root.get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| LlmError::ApiParse("chat completions: missing choices[0].message.content".to_string()))
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
