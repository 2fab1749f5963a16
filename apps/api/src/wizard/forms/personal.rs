use serde::{Deserialize, Serialize};

use crate::models::resume::{non_empty, PersonalInfo, ResumeData};
use crate::wizard::forms::StepForm;
use crate::wizard::SectionUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
    Portfolio,
    Summary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalForm {
    personal: PersonalInfo,
}

impl PersonalForm {
    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    /// Sets one field. An empty value clears it.
    pub fn set(&mut self, field: PersonalField, value: String) {
        let value = (!value.is_empty()).then_some(value);
        let p = &mut self.personal;
        match field {
            PersonalField::FullName => p.full_name = value,
            PersonalField::Email => p.email = value,
            PersonalField::Phone => p.phone = value,
            PersonalField::Location => p.location = value,
            PersonalField::Linkedin => p.linkedin = value,
            PersonalField::Github => p.github = value,
            PersonalField::Portfolio => p.portfolio = value,
            PersonalField::Summary => p.summary = value,
        }
    }
}

impl StepForm for PersonalForm {
    fn load(data: &ResumeData) -> Self {
        Self {
            personal: data.personal.clone(),
        }
    }

    fn is_valid(&self) -> bool {
        let p = &self.personal;
        non_empty(&p.full_name).is_some()
            && non_empty(&p.email).is_some()
            && non_empty(&p.phone).is_some()
    }

    fn submit(self) -> SectionUpdate {
        SectionUpdate::Personal(self.personal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_name_email_and_phone() {
        let mut form = PersonalForm::load(&ResumeData::default());
        assert!(!form.is_valid());

        form.set(PersonalField::FullName, "Kiran Das".into());
        form.set(PersonalField::Email, "kiran@example.com".into());
        assert!(!form.is_valid());

        form.set(PersonalField::Phone, "   ".into());
        assert!(!form.is_valid());

        form.set(PersonalField::Phone, "+91 9988776655".into());
        assert!(form.is_valid());
    }

    #[test]
    fn test_empty_value_clears_field() {
        let mut form = PersonalForm::default();
        form.set(PersonalField::Github, "github.com/kdas".into());
        form.set(PersonalField::Github, String::new());
        assert_eq!(form.personal().github, None);
    }

    #[test]
    fn test_submit_carries_whole_section() {
        let mut data = ResumeData::default();
        data.personal.location = Some("Nagpur".into());

        let mut form = PersonalForm::load(&data);
        form.set(PersonalField::Summary, "Final-year CSE student".into());
        match form.submit() {
            SectionUpdate::Personal(p) => {
                assert_eq!(p.location.as_deref(), Some("Nagpur"));
                assert_eq!(p.summary.as_deref(), Some("Final-year CSE student"));
            }
            other => panic!("unexpected update: {other:?}"),
        }
    }
}
