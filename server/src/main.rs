mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize LLM client (non-fatal: agent answers 503 if config missing).
    let llm = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(provider = client.provider_name(), "LLM client initialized");
            Some(Arc::new(client) as Arc<dyn llm::AgentChat>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured — agent disabled");
            None
        }
    };

    let expose_error_details = env_bool("EXPOSE_ERROR_DETAILS").unwrap_or(false);
    let state = state::AppState::new(llm, expose_error_details);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dao-agent listening");
    axum::serve(listener, app).await.expect("server failed");
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}
