//! Axum route handlers for preview, printable HTML, PDF export and the
//! stand-alone Markdown render endpoint.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::PdfOptions;
use crate::preview::{export_filename, GeneratedPanel, PreviewPanel, ReadyPanel};
use crate::render::html::render_document;
use crate::render::{render_all, Block};
use crate::state::AppState;
use crate::wizard::session::Session;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub markdown: String,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub blocks: Vec<Block>,
}

/// POST /api/v1/render
pub async fn handle_render(Json(request): Json<RenderRequest>) -> Json<RenderResponse> {
    Json(RenderResponse {
        blocks: render_all(&request.markdown),
    })
}

/// GET /api/v1/wizard/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewPanel>, AppError> {
    let session = state.sessions.get(id).await?;
    let ready = || ReadyPanel::from_data(session.wizard.data());

    let panel = if session.generating {
        PreviewPanel::Generating(ready())
    } else if let Some(resume) = &session.preview {
        PreviewPanel::Generated(GeneratedPanel::from(resume))
    } else {
        PreviewPanel::Ready(ready())
    };
    Ok(Json(panel))
}

/// GET /api/v1/wizard/:id/preview/html
pub async fn handle_preview_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = state.sessions.get(id).await?;
    printable_html(&session).map(Html)
}

/// POST /api/v1/wizard/:id/export
///
/// Renders the printable HTML to PDF and returns it as a download.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = state.sessions.get(id).await?;
    let html = printable_html(&session)?;
    let options = PdfOptions::for_resume(export_filename(session.wizard.data()));

    let pdf = state.exporter.export(&html, &options).await?;

    let disposition = format!("attachment; filename=\"{}\"", options.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}

fn printable_html(session: &Session) -> Result<String, AppError> {
    let resume = session
        .preview
        .as_ref()
        .ok_or_else(|| AppError::Validation("No resume has been generated yet".to_string()))?;

    let data = session.wizard.data();
    let title = data
        .personal
        .full_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or("Resume");
    Ok(render_document(title, &render_all(&resume.markdown)))
}
