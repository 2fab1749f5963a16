//! Axum route handlers for the Wizard API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;
use crate::wizard::forms::{apply_edit, FormEdit, FormView};
use crate::wizard::session::Session;
use crate::wizard::{SectionUpdate, Step};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct WizardView {
    pub session_id: Uuid,
    pub step: Step,
    pub index: usize,
    pub total: usize,
    pub title: &'static str,
    pub can_advance: bool,
    pub is_first: bool,
    pub is_last: bool,
    pub data: ResumeData,
    pub form: FormView,
    pub created_at: DateTime<Utc>,
}

impl WizardView {
    pub fn from_session(session: &Session) -> Self {
        let wizard = &session.wizard;
        let step = wizard.step();
        Self {
            session_id: session.id,
            step,
            index: step.index(),
            total: Step::ALL.len(),
            title: step.title(),
            can_advance: wizard.can_advance(),
            is_first: wizard.is_first(),
            is_last: wizard.is_last(),
            data: wizard.data().clone(),
            form: FormView::for_step(step, wizard.data()),
            created_at: session.created_at,
        }
    }
}

/// A wizard view plus whether the request changed anything.
#[derive(Debug, Serialize)]
pub struct WizardChange {
    pub changed: bool,
    pub wizard: WizardView,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/wizard
pub async fn handle_create(State(state): State<AppState>) -> (StatusCode, Json<WizardView>) {
    let session = state.sessions.create().await;
    info!("Wizard session {} started", session.id);
    (StatusCode::CREATED, Json(WizardView::from_session(&session)))
}

/// GET /api/v1/wizard/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(WizardView::from_session(&session)))
}

/// DELETE /api/v1/wizard/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    info!("Wizard session {id} ended");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/wizard/:id/sections
///
/// Replaces one section wholesale with the submitted value.
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<SectionUpdate>,
) -> Result<Json<WizardView>, AppError> {
    let view = state
        .sessions
        .update(id, |session| {
            session.wizard.update(update);
            WizardView::from_session(session)
        })
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/wizard/:id/form
///
/// Applies one edit to the owning step form and submits its section.
pub async fn handle_form_edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(edit): Json<FormEdit>,
) -> Result<Json<WizardChange>, AppError> {
    let change = state
        .sessions
        .try_update(id, |session| {
            let changed = apply_edit(&mut session.wizard, edit)?;
            Ok(WizardChange {
                changed,
                wizard: WizardView::from_session(session),
            })
        })
        .await?;
    Ok(Json(change))
}

/// POST /api/v1/wizard/:id/advance
///
/// A failed step gate is not an error: the step stays and `changed` is false.
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardChange>, AppError> {
    let change = state
        .sessions
        .update(id, |session| WizardChange {
            changed: session.wizard.advance(),
            wizard: WizardView::from_session(session),
        })
        .await?;
    Ok(Json(change))
}

/// POST /api/v1/wizard/:id/retreat
pub async fn handle_retreat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardChange>, AppError> {
    let change = state
        .sessions
        .update(id, |session| WizardChange {
            changed: session.wizard.retreat(),
            wizard: WizardView::from_session(session),
        })
        .await?;
    Ok(Json(change))
}
