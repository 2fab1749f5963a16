use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The full record collected by one wizard session.
/// Lives in memory only; created empty and discarded with the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub target: Target,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_year: String,
    #[serde(default)]
    pub end_year: String,
    /// CGPA or percentage, free text ("8.5/10", "85%").
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub coursework: String,
}

impl Education {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            degree: String::new(),
            institution: String::new(),
            location: String::new(),
            start_year: String::new(),
            end_year: String::new(),
            score: String::new(),
            coursework: String::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.degree.trim().is_empty() && !self.institution.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceKind {
    Internship,
    #[default]
    Project,
    Work,
    Hackathon,
}

impl ExperienceKind {
    /// Heading shown above an entry of this kind.
    pub fn type_label(self) -> &'static str {
        match self {
            ExperienceKind::Internship => "Internship",
            ExperienceKind::Project => "Project",
            ExperienceKind::Work => "Work Experience",
            ExperienceKind::Hackathon => "Hackathon",
        }
    }

    /// Label for the organization field of an entry of this kind.
    pub fn organization_label(self) -> &'static str {
        match self {
            ExperienceKind::Internship | ExperienceKind::Work => "Company",
            ExperienceKind::Project => "Organization/Personal",
            ExperienceKind::Hackathon => "Event Name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    #[serde(default)]
    pub kind: ExperienceKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Still ongoing; the end date is shown as "Present".
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
}

impl Experience {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ExperienceKind::Project,
            title: String::new(),
            organization: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
            technologies: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Languages,
}

/// Three independent ordered sets. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Languages => &self.languages,
        }
    }

    fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Languages => &mut self.languages,
        }
    }

    /// Appends a trimmed skill. Returns false (and changes nothing) for an
    /// empty value or one already present in the category.
    pub fn insert(&mut self, category: SkillCategory, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let set = self.get_mut(category);
        if set.iter().any(|s| s == value) {
            return false;
        }
        set.push(value.to_string());
        true
    }

    pub fn remove(&mut self, category: SkillCategory, value: &str) -> bool {
        let set = self.get_mut(category);
        let before = set.len();
        set.retain(|s| s != value);
        set.len() != before
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    #[default]
    Job,
    Internship,
    Hackathon,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Job => "job",
            TargetKind::Internship => "internship",
            TargetKind::Hackathon => "hackathon",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    #[serde(default)]
    pub kind: TargetKind,
    #[serde(default)]
    pub description: String,
    pub industry: Option<String>,
    pub role: Option<String>,
}

/// Returns the value if it holds something other than whitespace.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_insert_rejects_duplicates() {
        let mut skills = Skills::default();
        assert!(skills.insert(SkillCategory::Technical, "Rust"));
        assert!(!skills.insert(SkillCategory::Technical, "Rust"));
        assert!(!skills.insert(SkillCategory::Technical, "  Rust  "));
        assert_eq!(skills.technical, vec!["Rust"]);
    }

    #[test]
    fn test_skill_insert_ignores_blank_values() {
        let mut skills = Skills::default();
        assert!(!skills.insert(SkillCategory::Soft, "   "));
        assert!(skills.soft.is_empty());
    }

    #[test]
    fn test_skill_sets_are_independent() {
        let mut skills = Skills::default();
        skills.insert(SkillCategory::Languages, "English");
        assert!(skills.insert(SkillCategory::Soft, "English"));
        assert_eq!(skills.get(SkillCategory::Languages), ["English"]);
        assert_eq!(skills.get(SkillCategory::Soft), ["English"]);
    }

    #[test]
    fn test_skill_insertion_order_is_kept() {
        let mut skills = Skills::default();
        for s in ["Python", "Git", "AWS"] {
            skills.insert(SkillCategory::Technical, s);
        }
        assert!(skills.remove(SkillCategory::Technical, "Git"));
        assert!(!skills.remove(SkillCategory::Technical, "Git"));
        assert_eq!(skills.technical, vec!["Python", "AWS"]);
    }

    #[test]
    fn test_experience_labels_follow_kind() {
        assert_eq!(ExperienceKind::Work.type_label(), "Work Experience");
        assert_eq!(ExperienceKind::Hackathon.organization_label(), "Event Name");
        assert_eq!(
            ExperienceKind::Project.organization_label(),
            "Organization/Personal"
        );
    }

    #[test]
    fn test_resume_data_deserializes_from_partial_json() {
        let data: ResumeData = serde_json::from_value(serde_json::json!({
            "personal": { "full_name": "Asha Rao" },
            "target": { "kind": "internship", "description": "ML internship" }
        }))
        .unwrap();
        assert_eq!(data.personal.full_name.as_deref(), Some("Asha Rao"));
        assert!(data.education.is_empty());
        assert_eq!(data.target.kind, TargetKind::Internship);
    }

    #[test]
    fn test_non_empty_treats_whitespace_as_missing() {
        assert_eq!(non_empty(&Some("  ".to_string())), None);
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
    }
}
