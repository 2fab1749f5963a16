//! Resume Generation — builds the prompt from the wizard data, calls the LLM,
//! and falls back to an offline template when the call fails.
//!
//! `generate_resume` never returns an error: every failure of the external
//! collaborator is folded into `GenerationOutcome::Fallback`.

use tracing::{info, warn};

use crate::generation::prompts::{
    fill, DEFAULT_EMAIL, DEFAULT_EXPERIENCE_DESCRIPTION, DEFAULT_FALLBACK_LOCATION,
    DEFAULT_INDUSTRY, DEFAULT_LOCATION, DEFAULT_NAME, DEFAULT_OBJECTIVE, DEFAULT_PHONE,
    DEFAULT_SUMMARY, EDUCATION_ENTRY_TEMPLATE, EXPERIENCE_ENTRY_TEMPLATE,
    FALLBACK_RESUME_TEMPLATE, GENERATION_PROMPT_TEMPLATE, NOT_AVAILABLE,
};
use crate::llm_client::prompts::MARKDOWN_FORMAT_RULES;
use crate::llm_client::{SamplingParams, TextGenerator};
use crate::models::resume::{non_empty, Education, Experience, PersonalInfo, ResumeData};

/// Bounded output, moderate randomness.
pub const GENERATION_PARAMS: SamplingParams = SamplingParams {
    max_output_tokens: 2048,
    temperature: 0.7,
};

/// Result of a generation attempt, as seen by the preview.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// Markdown returned by the model.
    Generated(String),
    /// The model call failed; `text` is the offline template.
    Fallback { text: String, reason: String },
}

impl GenerationOutcome {
    pub fn text(&self) -> &str {
        match self {
            GenerationOutcome::Generated(text) => text,
            GenerationOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Generated(_) => None,
            GenerationOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Generates resume Markdown for `data`. Always resolves to some Markdown.
pub async fn generate_resume(llm: &dyn TextGenerator, data: &ResumeData) -> GenerationOutcome {
    let prompt = build_generation_prompt(data);

    match llm.generate_text(&prompt, GENERATION_PARAMS).await {
        Ok(text) => {
            info!("Resume generated ({} chars)", text.len());
            GenerationOutcome::Generated(text)
        }
        Err(e) => {
            warn!("Resume generation failed, using fallback template: {e}");
            GenerationOutcome::Fallback {
                text: fallback_resume(data),
                reason: e.to_string(),
            }
        }
    }
}

/// Serializes every section of `data` into the generation prompt.
/// Missing values are replaced by fixed placeholders.
pub fn build_generation_prompt(data: &ResumeData) -> String {
    let personal = &data.personal;

    let summary = non_empty(&personal.summary)
        .or_else(|| present(&data.target.description))
        .unwrap_or(DEFAULT_SUMMARY);

    let education = data
        .education
        .iter()
        .map(education_entry)
        .collect::<Vec<_>>()
        .join("\n\n");

    let experience = data
        .experience
        .iter()
        .map(experience_entry)
        .collect::<Vec<_>>()
        .join("\n\n");

    let technical = joined_or_na(&data.skills.technical);
    let soft = joined_or_na(&data.skills.soft);
    let languages = joined_or_na(&data.skills.languages);
    let links = contact_links(personal);

    let prompt = fill(
        GENERATION_PROMPT_TEMPLATE,
        &[
            ("full_name", non_empty(&personal.full_name).unwrap_or(DEFAULT_NAME)),
            ("email", non_empty(&personal.email).unwrap_or(DEFAULT_EMAIL)),
            ("phone", non_empty(&personal.phone).unwrap_or(DEFAULT_PHONE)),
            ("location", non_empty(&personal.location).unwrap_or(DEFAULT_LOCATION)),
            ("links", links.as_str()),
            ("summary", summary),
            ("education", education.as_str()),
            ("technical", technical.as_str()),
            ("soft", soft.as_str()),
            ("languages", languages.as_str()),
            ("experience", experience.as_str()),
            (
                "objective",
                present(&data.target.description).unwrap_or(DEFAULT_OBJECTIVE),
            ),
            ("format_rules", MARKDOWN_FORMAT_RULES),
        ],
    );

    prompt.trim().to_string()
}

/// Offline resume built by substitution alone. Pure function of `data`.
pub fn fallback_resume(data: &ResumeData) -> String {
    let personal = &data.personal;
    let name = non_empty(&personal.full_name)
        .map(str::to_uppercase)
        .unwrap_or_else(|| DEFAULT_NAME.to_uppercase());

    fill(
        FALLBACK_RESUME_TEMPLATE,
        &[
            ("full_name", name.as_str()),
            ("email", non_empty(&personal.email).unwrap_or(DEFAULT_EMAIL)),
            ("phone", non_empty(&personal.phone).unwrap_or(DEFAULT_PHONE)),
            (
                "location",
                non_empty(&personal.location).unwrap_or(DEFAULT_FALLBACK_LOCATION),
            ),
            (
                "industry",
                non_empty(&data.target.industry).unwrap_or(DEFAULT_INDUSTRY),
            ),
        ],
    )
}

/// `[LinkedIn](..) | [GitHub](..) | [Portfolio](..)` for the links that are set.
fn contact_links(personal: &PersonalInfo) -> String {
    let mut links = String::new();
    if let Some(url) = non_empty(&personal.linkedin) {
        links.push_str(&format!("[LinkedIn]({url})"));
    }
    if let Some(url) = non_empty(&personal.github) {
        links.push_str(&format!(" | [GitHub]({url})"));
    }
    if let Some(url) = non_empty(&personal.portfolio) {
        links.push_str(&format!(" | [Portfolio]({url})"));
    }
    links
}

fn education_entry(edu: &Education) -> String {
    fill(
        EDUCATION_ENTRY_TEMPLATE,
        &[
            ("degree", edu.degree.as_str()),
            ("institution", edu.institution.as_str()),
            ("location", edu.location.as_str()),
            ("start_year", edu.start_year.as_str()),
            ("end_year", edu.end_year.as_str()),
            ("score", present(&edu.score).unwrap_or(NOT_AVAILABLE)),
            ("coursework", present(&edu.coursework).unwrap_or(NOT_AVAILABLE)),
        ],
    )
}

fn experience_entry(exp: &Experience) -> String {
    let organization = match present(&exp.organization) {
        Some(org) => format!("at {org}"),
        None => String::new(),
    };
    let end_date = if exp.current {
        "Present"
    } else {
        exp.end_date.as_str()
    };

    fill(
        EXPERIENCE_ENTRY_TEMPLATE,
        &[
            ("title", exp.title.as_str()),
            ("organization", organization.as_str()),
            ("start_date", exp.start_date.as_str()),
            ("end_date", end_date),
            ("location", present(&exp.location).unwrap_or(NOT_AVAILABLE)),
            (
                "technologies",
                present(&exp.technologies).unwrap_or(NOT_AVAILABLE),
            ),
            (
                "description",
                present(&exp.description).unwrap_or(DEFAULT_EXPERIENCE_DESCRIPTION),
            ),
        ],
    )
}

fn present(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn joined_or_na(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::resume::{ExperienceKind, SkillCategory, Target, TargetKind};

    /// Returns a fixed reply and records the last request.
    struct ScriptedGenerator {
        reply: Result<String, u16>,
        seen: Mutex<Option<(String, SamplingParams)>>,
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate_text(
            &self,
            prompt: &str,
            params: SamplingParams,
        ) -> Result<String, LlmError> {
            *self.seen.lock().unwrap() = Some((prompt.to_string(), params));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "quota exceeded".to_string(),
                }),
            }
        }
    }

    fn sample_data() -> ResumeData {
        let mut data = ResumeData::default();
        data.personal = PersonalInfo {
            full_name: Some("Priya Nair".into()),
            email: Some("priya@example.com".into()),
            phone: Some("+91 9000000000".into()),
            location: Some("Kochi, Kerala".into()),
            github: Some("https://github.com/priya".into()),
            ..Default::default()
        };
        let mut edu = Education::blank();
        edu.degree = "B.Tech CSE".into();
        edu.institution = "CUSAT".into();
        edu.location = "Kochi".into();
        edu.start_year = "2021".into();
        edu.end_year = "2025".into();
        data.education.push(edu);
        data.skills.insert(SkillCategory::Technical, "Rust");
        data.skills.insert(SkillCategory::Technical, "SQL");
        let mut exp = Experience::blank();
        exp.kind = ExperienceKind::Internship;
        exp.title = "Backend Intern".into();
        exp.organization = "Acme".into();
        exp.start_date = "2024-05".into();
        exp.current = true;
        data.experience.push(exp);
        data.target = Target {
            kind: TargetKind::Job,
            description: "Backend engineering role".into(),
            industry: Some("Fintech".into()),
            role: None,
        };
        data
    }

    #[test]
    fn test_prompt_embeds_every_section() {
        let prompt = build_generation_prompt(&sample_data());
        assert!(prompt.starts_with("You are an expert resume writer"));
        assert!(prompt.contains("# Priya Nair\npriya@example.com | +91 9000000000 | Kochi, Kerala"));
        assert!(prompt.contains("\n | [GitHub](https://github.com/priya)\n"));
        assert!(prompt.contains("* **B.Tech CSE** - CUSAT, Kochi\n  * 2021 - 2025 | CGPA: N/A"));
        assert!(prompt.contains("**Technical Skills:** Rust, SQL"));
        assert!(prompt.contains("**Soft Skills:** N/A"));
        assert!(prompt.contains("* **Backend Intern** at Acme (2024-05 - Present)"));
        assert!(prompt.contains("  * Description of responsibilities and achievements."));
        assert!(prompt.ends_with("outside the resume content."));
    }

    #[test]
    fn test_prompt_summary_falls_back_to_target_then_default() {
        let data = sample_data();
        let prompt = build_generation_prompt(&data);
        assert!(prompt.contains("## Professional Summary\nBackend engineering role"));

        let empty = ResumeData::default();
        let prompt = build_generation_prompt(&empty);
        assert!(prompt.contains("# Your Name\nyour.email@example.com | +91 9876543210 | City, State"));
        assert!(prompt.contains(DEFAULT_SUMMARY));
        assert!(prompt.contains(&format!("## Career Objective\n{DEFAULT_OBJECTIVE}")));
    }

    #[test]
    fn test_experience_without_organization_keeps_spacing() {
        let mut exp = Experience::blank();
        exp.title = "Chat App".into();
        exp.start_date = "Jan".into();
        exp.end_date = "Mar".into();
        assert!(experience_entry(&exp).starts_with("* **Chat App**  (Jan - Mar)"));
    }

    #[test]
    fn test_fallback_resume_uses_uppercased_name_and_industry() {
        let text = fallback_resume(&sample_data());
        assert!(text.starts_with("# PRIYA NAIR\npriya@example.com | +91 9000000000 | Kochi, Kerala"));
        assert!(text.contains("Motivated student seeking opportunities in Fintech."));
    }

    #[test]
    fn test_fallback_resume_defaults() {
        let text = fallback_resume(&ResumeData::default());
        assert!(text.starts_with("# YOUR NAME\nyour.email@example.com | +91 9876543210 | India"));
        assert!(text.contains("opportunities in technology."));
    }

    #[tokio::test]
    async fn test_generate_returns_model_text_with_fixed_params() {
        let llm = ScriptedGenerator {
            reply: Ok("# Priya Nair".into()),
            seen: Mutex::new(None),
        };
        let outcome = generate_resume(&llm, &sample_data()).await;
        assert_eq!(outcome, GenerationOutcome::Generated("# Priya Nair".into()));
        let (prompt, params) = llm.seen.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("Priya Nair"));
        assert_eq!(params, GENERATION_PARAMS);
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_failure() {
        let llm = ScriptedGenerator {
            reply: Err(429),
            seen: Mutex::new(None),
        };
        let data = sample_data();
        let outcome = generate_resume(&llm, &data).await;
        assert_eq!(outcome.text(), fallback_resume(&data));
        assert!(outcome.fallback_reason().unwrap().contains("429"));
    }
}
