//! Provider credentials and backend selection.

pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

/// API keys read from the process environment. Zero, one, or both may be
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub openai: Option<String>,
    pub anthropic: Option<String>,
}

impl Credentials {
    /// Read `OPENAI_API_KEY` and `ANTHROPIC_API_KEY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self { openai: std::env::var("OPENAI_API_KEY").ok(), anthropic: std::env::var("ANTHROPIC_API_KEY").ok() }
    }
}

/// The backend chosen for all completions of one client instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    OpenAi(String),
    Anthropic(String),
}

/// Pick exactly one backend from the available credentials. First
/// configured wins: `OpenAI`, then Anthropic. Blank keys count as absent.
/// `None` means no backend is usable; callers must not attempt a call.
#[must_use]
pub fn select_backend(credentials: Credentials) -> Option<Backend> {
    let openai = credentials.openai.filter(|key| !key.trim().is_empty());
    if let Some(key) = openai {
        return Some(Backend::OpenAi(key));
    }
    credentials
        .anthropic
        .filter(|key| !key.trim().is_empty())
        .map(Backend::Anthropic)
}

/// Outbound HTTP timeouts applied to both provider clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for LlmTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    }
}

impl LlmTimeouts {
    /// Read `LLM_REQUEST_TIMEOUT_SECS` / `LLM_CONNECT_TIMEOUT_SECS`,
    /// falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_secs: env_parse_u64("LLM_REQUEST_TIMEOUT_SECS", DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("LLM_CONNECT_TIMEOUT_SECS", DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
