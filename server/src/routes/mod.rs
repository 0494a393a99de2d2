//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One JSON API route plus a health check. The UI is served elsewhere and
//! talks to this service cross-origin, hence the permissive CORS layer.

pub mod agent;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// API routes used by the web UI.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/dao-agent", post(agent::prompt))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
