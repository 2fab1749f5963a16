use serde::Serialize;

use crate::models::resume::{ResumeData, SkillCategory, Skills};
use crate::wizard::forms::StepForm;
use crate::wizard::SectionUpdate;

const SUGGESTED_TECHNICAL: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "HTML/CSS",
    "SQL",
    "Git",
    "MongoDB",
    "Express.js",
    "TypeScript",
    "C++",
    "AWS",
    "Docker",
    "Linux",
];

const SUGGESTED_SOFT: &[&str] = &[
    "Communication",
    "Leadership",
    "Problem Solving",
    "Teamwork",
    "Time Management",
    "Critical Thinking",
    "Adaptability",
    "Project Management",
    "Public Speaking",
];

const SUGGESTED_LANGUAGES: &[&str] = &[
    "English", "Hindi", "Tamil", "Telugu", "Bengali", "Marathi", "Gujarati", "Kannada",
];

/// Suggestions not yet chosen, per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSuggestions {
    pub technical: Vec<&'static str>,
    pub soft: Vec<&'static str>,
    pub languages: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsForm {
    skills: Skills,
}

impl SkillsForm {
    pub fn skills(&self) -> &Skills {
        &self.skills
    }

    pub fn add(&mut self, category: SkillCategory, value: &str) -> bool {
        self.skills.insert(category, value)
    }

    pub fn remove(&mut self, category: SkillCategory, value: &str) -> bool {
        self.skills.remove(category, value)
    }

    pub fn suggestions(&self) -> SkillSuggestions {
        SkillSuggestions {
            technical: self.unchosen(SkillCategory::Technical),
            soft: self.unchosen(SkillCategory::Soft),
            languages: self.unchosen(SkillCategory::Languages),
        }
    }

    fn unchosen(&self, category: SkillCategory) -> Vec<&'static str> {
        let pool = match category {
            SkillCategory::Technical => SUGGESTED_TECHNICAL,
            SkillCategory::Soft => SUGGESTED_SOFT,
            SkillCategory::Languages => SUGGESTED_LANGUAGES,
        };
        let chosen = self.skills.get(category);
        pool.iter()
            .copied()
            .filter(|s| !chosen.iter().any(|c| c == s))
            .collect()
    }
}

impl StepForm for SkillsForm {
    fn load(data: &ResumeData) -> Self {
        Self {
            skills: data.skills.clone(),
        }
    }

    fn is_valid(&self) -> bool {
        !self.skills.technical.is_empty()
    }

    fn submit(self) -> SectionUpdate {
        SectionUpdate::Skills(self.skills)
    }
}
