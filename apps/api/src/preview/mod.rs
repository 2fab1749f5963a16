//! Preview panels for the terminal wizard step.
//!
//! Before generation the client sees a "ready" summary of what was
//! collected; afterwards, the generated Markdown with its rendered blocks,
//! likelihood score and tier.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::generation::generator::GenerationOutcome;
use crate::models::resume::{ResumeData, TargetKind};
use crate::render::{render_all, Block};

pub mod handlers;

/// Result of one generate request, kept on the session.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedResume {
    pub markdown: String,
    /// Set when the offline template stood in for the model.
    pub fallback_reason: Option<String>,
    pub likelihood: u8,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedResume {
    pub fn new(outcome: GenerationOutcome, likelihood: u8) -> Self {
        let fallback_reason = outcome.fallback_reason().map(str::to_string);
        let markdown = match outcome {
            GenerationOutcome::Generated(text) => text,
            GenerationOutcome::Fallback { text, .. } => text,
        };
        Self {
            markdown,
            fallback_reason,
            likelihood,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreTier::High,
            50..=79 => ScoreTier::Medium,
            _ => ScoreTier::Low,
        }
    }
}

/// Summary of the collected data shown before generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadyPanel {
    pub education_entries: usize,
    pub technical_skills: usize,
    pub experiences: usize,
    /// A session targets exactly one role.
    pub target_roles: usize,
    pub target_kind: TargetKind,
    pub industry: Option<String>,
}

impl ReadyPanel {
    pub fn from_data(data: &ResumeData) -> Self {
        Self {
            education_entries: data.education.len(),
            technical_skills: data.skills.technical.len(),
            experiences: data.experience.len(),
            target_roles: 1,
            target_kind: data.target.kind,
            industry: data.target.industry.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPanel {
    pub markdown: String,
    pub blocks: Vec<Block>,
    pub used_fallback: bool,
    pub fallback_reason: Option<String>,
    pub likelihood: u8,
    pub tier: ScoreTier,
    pub generated_at: DateTime<Utc>,
}

impl From<&GeneratedResume> for GeneratedPanel {
    fn from(resume: &GeneratedResume) -> Self {
        Self {
            blocks: render_all(&resume.markdown),
            markdown: resume.markdown.clone(),
            used_fallback: resume.fallback_reason.is_some(),
            fallback_reason: resume.fallback_reason.clone(),
            likelihood: resume.likelihood,
            tier: ScoreTier::from_score(resume.likelihood),
            generated_at: resume.generated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PreviewPanel {
    Ready(ReadyPanel),
    Generating(ReadyPanel),
    Generated(GeneratedPanel),
}

/// Download name for the exported PDF. Control characters and quotes are
/// dropped so the name is always a valid `Content-Disposition` value.
pub fn export_filename(data: &ResumeData) -> String {
    let name: String = data
        .personal
        .full_name
        .as_deref()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect();
    let name = match name.trim() {
        "" => "Resume",
        trimmed => trimmed,
    };
    format!("{name}_Resume.pdf")
}
