use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

/// GET /health
/// Service status with version, AI model and PDF renderer state.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "rankup-api",
        "ai": {
            "model": MODEL,
            "status": "ready"
        },
        "pdf_renderer": {
            "configured": state.config.pdf_render_url.is_some(),
            "loaded": state.exporter.is_loaded()
        },
        "active_sessions": state.sessions.len().await
    }))
}
