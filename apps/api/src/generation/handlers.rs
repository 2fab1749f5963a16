//! Axum route handlers for the Generation API.

use anyhow::anyhow;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::generate_resume;
use crate::generation::likelihood::evaluate_likelihood;
use crate::models::resume::ResumeData;
use crate::preview::{GeneratedPanel, GeneratedResume, PreviewPanel};
use crate::state::AppState;
use crate::wizard::Step;

/// POST /api/v1/wizard/:id/generate
///
/// Generates the resume, then evaluates it. Only allowed on the Preview step
/// and only once at a time per session. The session lock is released while
/// the model is called.
///
/// The model calls and the store run in a spawned task: a client that goes
/// away mid-request drops this future, but the task still finishes and clears
/// the session's `generating` flag.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreviewPanel>, AppError> {
    let data = state
        .sessions
        .try_update(id, |session| {
            if session.wizard.step() != Step::Preview {
                return Err(AppError::Conflict(
                    "Resume can only be generated from the Preview step".to_string(),
                ));
            }
            if session.generating {
                return Err(AppError::Conflict(
                    "Resume generation already in progress".to_string(),
                ));
            }
            session.generating = true;
            Ok(session.wizard.data().clone())
        })
        .await?;

    let task_state = state.clone();
    let task = tokio::spawn(async move { run_generation(task_state, id, data).await });

    match task.await {
        Ok(result) => result.map(|panel| Json(PreviewPanel::Generated(panel))),
        Err(e) => {
            error!("Generation task for session {id} failed: {e}");
            // Ignore NotFound: the session may have been deleted meanwhile.
            let _ = state
                .sessions
                .update(id, |session| session.generating = false)
                .await;
            Err(AppError::Internal(anyhow!("resume generation task failed: {e}")))
        }
    }
}

async fn run_generation(
    state: AppState,
    id: Uuid,
    data: ResumeData,
) -> Result<GeneratedPanel, AppError> {
    info!("Generating resume for session {id}");
    let outcome = generate_resume(state.llm.as_ref(), &data).await;
    let likelihood = evaluate_likelihood(state.llm.as_ref(), outcome.text()).await;

    let resume = GeneratedResume::new(outcome, likelihood);
    let panel = GeneratedPanel::from(&resume);
    info!(
        "Session {id}: resume ready (likelihood {likelihood}, fallback: {})",
        panel.used_fallback
    );

    state
        .sessions
        .update(id, |session| {
            session.preview = Some(resume);
            session.generating = false;
        })
        .await?;

    Ok(panel)
}
