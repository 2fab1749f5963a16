use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeData, Target, TargetKind};
use crate::wizard::forms::StepForm;
use crate::wizard::SectionUpdate;

pub const INDUSTRIES: &[&str] = &[
    "Technology/Software",
    "Finance/Banking",
    "Healthcare",
    "E-commerce",
    "Education",
    "Gaming",
    "Consulting",
    "Startup",
    "Government",
    "Non-profit",
    "Other",
];

const JOB_ROLES: &[&str] = &[
    "Software Developer",
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Data Scientist",
    "DevOps Engineer",
    "Product Manager",
    "UI/UX Designer",
    "Quality Assurance",
    "Business Analyst",
];

const INTERNSHIP_ROLES: &[&str] = &[
    "Software Development Intern",
    "Data Science Intern",
    "Product Management Intern",
    "UI/UX Design Intern",
    "Marketing Intern",
    "Research Intern",
    "Business Development Intern",
];

const HACKATHON_ROLES: &[&str] = &[
    "Full Stack Developer",
    "Frontend Specialist",
    "Backend Specialist",
    "Data Scientist",
    "UI/UX Designer",
    "Team Lead",
    "Idea Generator",
];

pub fn roles_for(kind: TargetKind) -> &'static [&'static str] {
    match kind {
        TargetKind::Job => JOB_ROLES,
        TargetKind::Internship => INTERNSHIP_ROLES,
        TargetKind::Hackathon => HACKATHON_ROLES,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetField {
    Description,
    Industry,
    Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetForm {
    target: Target,
}

impl TargetForm {
    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn role_options(&self) -> &'static [&'static str] {
        roles_for(self.target.kind)
    }

    pub fn set_kind(&mut self, kind: TargetKind) {
        self.target.kind = kind;
    }

    /// Industry and role are free text; an empty value unsets them.
    pub fn set(&mut self, field: TargetField, value: String) {
        match field {
            TargetField::Description => self.target.description = value,
            TargetField::Industry => self.target.industry = (!value.is_empty()).then_some(value),
            TargetField::Role => self.target.role = (!value.is_empty()).then_some(value),
        }
    }
}

impl StepForm for TargetForm {
    fn load(data: &ResumeData) -> Self {
        Self {
            target: data.target.clone(),
        }
    }

    fn is_valid(&self) -> bool {
        !self.target.description.trim().is_empty()
    }

    fn submit(self) -> SectionUpdate {
        SectionUpdate::Target(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_options_follow_kind() {
        let mut form = TargetForm::load(&ResumeData::default());
        assert_eq!(form.role_options()[0], "Software Developer");
        form.set_kind(TargetKind::Internship);
        assert!(form.role_options().contains(&"Research Intern"));
        form.set_kind(TargetKind::Hackathon);
        assert!(form.role_options().contains(&"Idea Generator"));
    }

    #[test]
    fn test_description_required() {
        let mut form = TargetForm::load(&ResumeData::default());
        assert!(!form.is_valid());
        form.set(TargetField::Description, "  ".into());
        assert!(!form.is_valid());
        form.set(TargetField::Description, "Land a backend role at a fintech".into());
        assert!(form.is_valid());
    }

    #[test]
    fn test_empty_industry_and_role_unset() {
        let mut form = TargetForm::load(&ResumeData::default());
        form.set(TargetField::Industry, "Healthcare".into());
        form.set(TargetField::Role, "Data Scientist".into());
        assert_eq!(form.target().industry.as_deref(), Some("Healthcare"));

        form.set(TargetField::Industry, String::new());
        form.set(TargetField::Role, String::new());
        assert_eq!(form.target().industry, None);
        assert_eq!(form.target().role, None);
    }
}
