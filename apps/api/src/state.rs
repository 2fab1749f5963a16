use std::sync::Arc;

use crate::config::Config;
use crate::export::PdfExporter;
use crate::llm_client::TextGenerator;
use crate::wizard::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Text generator used for resume generation and likelihood evaluation.
    /// `LlmClient` in production; tests inject scripted fakes.
    pub llm: Arc<dyn TextGenerator>,
    /// PDF export; loads its renderer on first use.
    pub exporter: Arc<PdfExporter>,
    pub config: Config,
}
