//! Resume wizard — the step state machine that owns a session's `ResumeData`.
//!
//! Steps run Personal → Education → Skills → Experience → Target → Preview.
//! `advance` is gated by the current step's form validity and is a silent
//! no-op when the gate fails; `retreat` is unconditional. Neither touches
//! the data. Sections are replaced wholesale through `update`.

use serde::{Deserialize, Serialize};

use crate::models::resume::{Education, Experience, PersonalInfo, ResumeData, Skills, Target};
use crate::wizard::forms::{
    EducationForm, ExperienceForm, PersonalForm, SkillsForm, StepForm, TargetForm,
};

pub mod forms;
pub mod handlers;
pub mod session;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Personal,
    Education,
    Skills,
    Experience,
    Target,
    Preview,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Personal,
        Step::Education,
        Step::Skills,
        Step::Experience,
        Step::Target,
        Step::Preview,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Personal => "Personal Info",
            Step::Education => "Education",
            Step::Skills => "Skills",
            Step::Experience => "Experience",
            Step::Target => "Target & Goals",
            Step::Preview => "Preview & Generate",
        }
    }

    fn next(self) -> Option<Step> {
        Self::ALL.get(self.index() + 1).copied()
    }

    fn prev(self) -> Option<Step> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Validity predicate of the step's form, evaluated on the draft the
    /// form would load from `data`.
    pub fn is_satisfied(self, data: &ResumeData) -> bool {
        match self {
            Step::Personal => PersonalForm::load(data).is_valid(),
            Step::Education => EducationForm::load(data).is_valid(),
            Step::Skills => SkillsForm::load(data).is_valid(),
            Step::Experience => ExperienceForm::load(data).is_valid(),
            Step::Target => TargetForm::load(data).is_valid(),
            Step::Preview => true,
        }
    }
}

/// A complete replacement for one section of `ResumeData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "data", rename_all = "snake_case")]
pub enum SectionUpdate {
    Personal(PersonalInfo),
    Education(Vec<Education>),
    Skills(Skills),
    Experience(Vec<Experience>),
    Target(Target),
}

#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    data: ResumeData,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn is_first(&self) -> bool {
        self.step.prev().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.step.next().is_none()
    }

    pub fn can_advance(&self) -> bool {
        !self.is_last() && self.step.is_satisfied(&self.data)
    }

    /// Moves one step forward if allowed. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Moves one step back unless already on the first step.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Replaces one section wholesale.
    pub fn update(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Personal(personal) => self.data.personal = personal,
            SectionUpdate::Education(education) => self.data.education = education,
            SectionUpdate::Skills(skills) => self.data.skills = skills,
            SectionUpdate::Experience(experience) => self.data.experience = experience,
            SectionUpdate::Target(target) => self.data.target = target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillCategory;

    fn personal_complete() -> PersonalInfo {
        PersonalInfo {
            full_name: Some("Ravi Kumar".into()),
            email: Some("ravi@example.com".into()),
            phone: Some("+91 9123456780".into()),
            ..Default::default()
        }
    }

    fn wizard_at(step: Step) -> Wizard {
        let mut wizard = Wizard::new();
        wizard.step = step;
        wizard
    }

    #[test]
    fn test_new_wizard_starts_empty_on_first_step() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::Personal);
        assert!(wizard.is_first());
        assert_eq!(wizard.data(), &ResumeData::default());
    }

    #[test]
    fn test_advance_blocked_until_personal_fields_present() {
        let mut wizard = Wizard::new();
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::Personal);

        wizard.update(SectionUpdate::Personal(personal_complete()));
        assert!(wizard.advance());
        assert_eq!(wizard.step(), Step::Education);
    }

    #[test]
    fn test_untouched_education_step_is_not_satisfied() {
        let mut wizard = wizard_at(Step::Education);
        assert!(!wizard.can_advance());

        let mut edu = Education::blank();
        edu.degree = "BCA".into();
        wizard.update(SectionUpdate::Education(vec![edu.clone()]));
        assert!(!wizard.advance());

        edu.institution = "Christ University".into();
        wizard.update(SectionUpdate::Education(vec![edu]));
        assert!(wizard.advance());
    }

    #[test]
    fn test_skills_gate_requires_technical_skill() {
        let mut wizard = wizard_at(Step::Skills);
        let mut skills = Skills::default();
        skills.insert(SkillCategory::Soft, "Teamwork");
        wizard.update(SectionUpdate::Skills(skills.clone()));
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::Skills);

        skills.insert(SkillCategory::Technical, "Python");
        wizard.update(SectionUpdate::Skills(skills));
        assert!(wizard.advance());
        assert_eq!(wizard.step().index(), Step::Skills.index() + 1);
    }

    #[test]
    fn test_experience_step_has_no_gate() {
        let mut wizard = wizard_at(Step::Experience);
        assert!(wizard.advance());
        assert_eq!(wizard.step(), Step::Target);
    }

    #[test]
    fn test_target_gate_requires_description() {
        let mut wizard = wizard_at(Step::Target);
        assert!(!wizard.advance());
        wizard.update(SectionUpdate::Target(Target {
            description: "Backend internship".into(),
            ..Default::default()
        }));
        assert!(wizard.advance());
        assert!(wizard.is_last());
    }

    #[test]
    fn test_no_transition_past_last_step() {
        let mut wizard = wizard_at(Step::Preview);
        assert!(!wizard.can_advance());
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::Preview);
    }

    #[test]
    fn test_retreat_is_unconditional_and_stops_at_first() {
        let mut wizard = wizard_at(Step::Skills);
        assert!(wizard.retreat());
        assert_eq!(wizard.step(), Step::Education);
        assert!(wizard.retreat());
        assert!(!wizard.retreat());
        assert_eq!(wizard.step(), Step::Personal);
    }

    #[test]
    fn test_transitions_keep_data() {
        let mut wizard = Wizard::new();
        wizard.update(SectionUpdate::Personal(personal_complete()));
        wizard.advance();
        wizard.retreat();
        assert_eq!(wizard.data().personal, personal_complete());
    }

    #[test]
    fn test_update_replaces_section_wholesale() {
        let mut wizard = Wizard::new();
        wizard.update(SectionUpdate::Personal(personal_complete()));
        wizard.update(SectionUpdate::Personal(PersonalInfo {
            location: Some("Pune".into()),
            ..Default::default()
        }));
        assert_eq!(wizard.data().personal.full_name, None);
        assert_eq!(wizard.data().personal.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_section_update_wire_format() {
        let update: SectionUpdate = serde_json::from_value(serde_json::json!({
            "section": "skills",
            "data": { "technical": ["Rust"], "soft": [], "languages": ["Hindi"] }
        }))
        .unwrap();
        match update {
            SectionUpdate::Skills(skills) => assert_eq!(skills.languages, vec!["Hindi"]),
            other => panic!("unexpected update: {other:?}"),
        }
    }

    #[test]
    fn test_step_titles_and_indices() {
        assert_eq!(Step::ALL.len(), 6);
        assert_eq!(Step::Target.title(), "Target & Goals");
        assert_eq!(Step::Preview.index(), 5);
    }
}
