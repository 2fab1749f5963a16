pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::generation::handlers as generation;
use crate::preview::handlers as preview;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/render", post(preview::handle_render))
        // Wizard sessions
        .route("/api/v1/wizard", post(wizard::handle_create))
        .route(
            "/api/v1/wizard/:id",
            get(wizard::handle_get).delete(wizard::handle_delete),
        )
        .route(
            "/api/v1/wizard/:id/sections",
            put(wizard::handle_update_section),
        )
        .route("/api/v1/wizard/:id/form", post(wizard::handle_form_edit))
        .route("/api/v1/wizard/:id/advance", post(wizard::handle_advance))
        .route("/api/v1/wizard/:id/retreat", post(wizard::handle_retreat))
        // Generation and preview
        .route(
            "/api/v1/wizard/:id/generate",
            post(generation::handle_generate),
        )
        .route("/api/v1/wizard/:id/preview", get(preview::handle_preview))
        .route(
            "/api/v1/wizard/:id/preview/html",
            get(preview::handle_preview_html),
        )
        .route("/api/v1/wizard/:id/export", post(preview::handle_export))
        .with_state(state)
}
