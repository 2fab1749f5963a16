//! PDF export through an external HTML-to-PDF collaborator.
//!
//! The renderer is loaded lazily on the first export. Concurrent first
//! exports share a single load; a failed load leaves nothing cached, so the
//! next export tries again.
//!
//! `AppState` holds an `Arc<PdfExporter>`; the loader behind it is a trait
//! object so tests can count and fail loads.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{info, warn};

const LOAD_TIMEOUT: Duration = Duration::from_secs(10);
const RENDER_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF renderer is not configured")]
    NotConfigured,

    #[error("PDF renderer failed to load: {0}")]
    Load(String),

    #[error("PDF rendering failed: {0}")]
    Render(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperFormat {
    Letter,
}

impl PaperFormat {
    /// Portrait (width, height) in inches.
    pub fn size_in(self) -> (f32, f32) {
        match self {
            PaperFormat::Letter => (8.5, 11.0),
        }
    }
}

/// Options handed to the renderer along with the document. Every field ends
/// up in the conversion request.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub filename: String,
    /// Uniform page margin in inches.
    pub margin_in: f32,
    pub format: PaperFormat,
    pub landscape: bool,
    pub image_quality: f32,
    pub scale: f32,
}

impl PdfOptions {
    pub fn for_resume(filename: String) -> Self {
        Self {
            filename,
            margin_in: 0.5,
            format: PaperFormat::Letter,
            landscape: false,
            image_quality: 0.98,
            scale: 2.0,
        }
    }
}

#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str, options: &PdfOptions) -> Result<Bytes, ExportError>;
}

/// Produces a ready renderer; called at most once per successful load.
#[async_trait]
pub trait RendererLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn PdfRenderer>, ExportError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP collaborator
// ────────────────────────────────────────────────────────────────────────────

/// Loads the HTTP renderer once `{base}/health` answers.
pub struct HttpRendererLoader {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpRendererLoader {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
        }
    }
}

#[async_trait]
impl RendererLoader for HttpRendererLoader {
    async fn load(&self) -> Result<Arc<dyn PdfRenderer>, ExportError> {
        let base_url = self.base_url.clone().ok_or(ExportError::NotConfigured)?;

        let response = self
            .client
            .get(format!("{base_url}/health"))
            .timeout(LOAD_TIMEOUT)
            .send()
            .await
            .map_err(|e| ExportError::Load(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ExportError::Load(format!(
                "health check returned {}",
                response.status()
            )));
        }

        info!("PDF renderer ready at {base_url}");
        Ok(Arc::new(HttpPdfRenderer {
            client: self.client.clone(),
            base_url,
        }))
    }
}

pub struct HttpPdfRenderer {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl PdfRenderer for HttpPdfRenderer {
    async fn render(&self, html: &str, options: &PdfOptions) -> Result<Bytes, ExportError> {
        let document = Part::bytes(html.as_bytes().to_vec())
            .file_name("index.html")
            .mime_str("text/html")
            .map_err(|e| ExportError::Render(e.to_string()))?;

        let form = form_fields(options)
            .into_iter()
            .fold(Form::new().part("files", document), |form, (name, value)| {
                form.text(name, value)
            });

        let response = self
            .client
            .post(format!("{}/forms/chromium/convert/html", self.base_url))
            .multipart(form)
            .timeout(RENDER_TIMEOUT)
            .send()
            .await
            .map_err(|e| ExportError::Render(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExportError::Render(format!("{status}: {body}")));
        }

        response
            .bytes()
            .await
            .map_err(|e| ExportError::Render(e.to_string()))
    }
}

/// Text fields of the conversion request.
fn form_fields(options: &PdfOptions) -> Vec<(&'static str, String)> {
    let (width, height) = options.format.size_in();
    let margin = options.margin_in.to_string();
    vec![
        ("paperWidth", width.to_string()),
        ("paperHeight", height.to_string()),
        ("marginTop", margin.clone()),
        ("marginBottom", margin.clone()),
        ("marginLeft", margin.clone()),
        ("marginRight", margin),
        ("landscape", options.landscape.to_string()),
        ("printBackground", "true".to_string()),
        ("scale", options.scale.to_string()),
        ("imageQuality", options.image_quality.to_string()),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Exporter
// ────────────────────────────────────────────────────────────────────────────

pub struct PdfExporter {
    loader: Arc<dyn RendererLoader>,
    renderer: OnceCell<Arc<dyn PdfRenderer>>,
}

impl PdfExporter {
    pub fn new(loader: Arc<dyn RendererLoader>) -> Self {
        Self {
            loader,
            renderer: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.renderer.initialized()
    }

    pub async fn export(&self, html: &str, options: &PdfOptions) -> Result<Bytes, ExportError> {
        let renderer = self
            .renderer
            .get_or_try_init(|| async {
                info!("Loading PDF renderer");
                self.loader.load().await.map_err(|e| {
                    warn!("PDF renderer load failed: {e}");
                    e
                })
            })
            .await?;

        let pdf = renderer.render(html, options).await?;
        info!("Exported {} ({} bytes)", options.filename, pdf.len());
        Ok(pdf)
    }
}
