//! Step forms: one transient draft per wizard section.
//!
//! A form is loaded from the session's `ResumeData`, edited, and submitted
//! back as a complete section (`SectionUpdate`), never as a partial patch.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ExperienceKind, ResumeData, SkillCategory, TargetKind};
use crate::wizard::{SectionUpdate, Step, Wizard};

mod education;
mod experience;
mod personal;
mod skills;
mod target;

pub use education::{EducationField, EducationForm};
pub use experience::{ExperienceField, ExperienceForm, ExperienceView};
pub use personal::{PersonalField, PersonalForm};
pub use skills::{SkillSuggestions, SkillsForm};
pub use target::{TargetField, TargetForm, INDUSTRIES};

pub trait StepForm: Sized {
    /// Builds the draft from the current data.
    fn load(data: &ResumeData) -> Self;

    /// Required-field check gating the wizard's `advance`.
    fn is_valid(&self) -> bool;

    /// The complete section represented by this draft.
    fn submit(self) -> SectionUpdate;
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Entry {0} not found")]
    EntryNotFound(Uuid),
}

impl From<FormError> for AppError {
    fn from(e: FormError) -> Self {
        AppError::NotFound(e.to_string())
    }
}

/// A single edit made on one of the step forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FormEdit {
    SetPersonal {
        field: PersonalField,
        value: String,
    },
    AddEducation,
    RemoveEducation {
        id: Uuid,
    },
    UpdateEducation {
        id: Uuid,
        field: EducationField,
        value: String,
    },
    AddSkill {
        category: SkillCategory,
        value: String,
    },
    RemoveSkill {
        category: SkillCategory,
        value: String,
    },
    AddExperience,
    RemoveExperience {
        id: Uuid,
    },
    UpdateExperience {
        id: Uuid,
        field: ExperienceField,
        value: String,
    },
    SetExperienceKind {
        id: Uuid,
        kind: ExperienceKind,
    },
    SetExperienceCurrent {
        id: Uuid,
        current: bool,
    },
    SetTargetKind {
        kind: TargetKind,
    },
    SetTarget {
        field: TargetField,
        value: String,
    },
}

/// Loads the form the edit belongs to, applies it, and submits the whole
/// section to the wizard. Returns whether the draft changed.
pub fn apply_edit(wizard: &mut Wizard, edit: FormEdit) -> Result<bool, FormError> {
    let data = wizard.data();
    let (changed, update) = match edit {
        FormEdit::SetPersonal { field, value } => {
            let mut form = PersonalForm::load(data);
            form.set(field, value);
            (true, form.submit())
        }
        FormEdit::AddEducation => {
            let mut form = EducationForm::load(data);
            form.add();
            (true, form.submit())
        }
        FormEdit::RemoveEducation { id } => {
            let mut form = EducationForm::load(data);
            let removed = form.remove(id)?;
            (removed, form.submit())
        }
        FormEdit::UpdateEducation { id, field, value } => {
            let mut form = EducationForm::load(data);
            form.update(id, field, value)?;
            (true, form.submit())
        }
        FormEdit::AddSkill { category, value } => {
            let mut form = SkillsForm::load(data);
            let added = form.add(category, &value);
            (added, form.submit())
        }
        FormEdit::RemoveSkill { category, value } => {
            let mut form = SkillsForm::load(data);
            let removed = form.remove(category, &value);
            (removed, form.submit())
        }
        FormEdit::AddExperience => {
            let mut form = ExperienceForm::load(data);
            form.add();
            (true, form.submit())
        }
        FormEdit::RemoveExperience { id } => {
            let mut form = ExperienceForm::load(data);
            let removed = form.remove(id)?;
            (removed, form.submit())
        }
        FormEdit::UpdateExperience { id, field, value } => {
            let mut form = ExperienceForm::load(data);
            form.update(id, field, value)?;
            (true, form.submit())
        }
        FormEdit::SetExperienceKind { id, kind } => {
            let mut form = ExperienceForm::load(data);
            form.set_kind(id, kind)?;
            (true, form.submit())
        }
        FormEdit::SetExperienceCurrent { id, current } => {
            let mut form = ExperienceForm::load(data);
            form.set_current(id, current)?;
            (true, form.submit())
        }
        FormEdit::SetTargetKind { kind } => {
            let mut form = TargetForm::load(data);
            form.set_kind(kind);
            (true, form.submit())
        }
        FormEdit::SetTarget { field, value } => {
            let mut form = TargetForm::load(data);
            form.set(field, value);
            (true, form.submit())
        }
    };

    wizard.update(update);
    Ok(changed)
}

/// The current step's draft as shown to the client, with its labels and
/// suggestion lists.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum FormView {
    Personal {
        #[serde(flatten)]
        form: PersonalForm,
        valid: bool,
    },
    Education {
        #[serde(flatten)]
        form: EducationForm,
        can_remove: bool,
        valid: bool,
    },
    Skills {
        #[serde(flatten)]
        form: SkillsForm,
        suggestions: SkillSuggestions,
        valid: bool,
    },
    Experience {
        entries: Vec<ExperienceView>,
        can_remove: bool,
        valid: bool,
    },
    Target {
        #[serde(flatten)]
        form: TargetForm,
        industries: &'static [&'static str],
        roles: &'static [&'static str],
        valid: bool,
    },
    Preview,
}

impl FormView {
    pub fn for_step(step: Step, data: &ResumeData) -> Self {
        match step {
            Step::Personal => {
                let form = PersonalForm::load(data);
                let valid = form.is_valid();
                FormView::Personal { form, valid }
            }
            Step::Education => {
                let form = EducationForm::load(data);
                FormView::Education {
                    can_remove: form.can_remove(),
                    valid: form.is_valid(),
                    form,
                }
            }
            Step::Skills => {
                let form = SkillsForm::load(data);
                FormView::Skills {
                    suggestions: form.suggestions(),
                    valid: form.is_valid(),
                    form,
                }
            }
            Step::Experience => {
                let form = ExperienceForm::load(data);
                FormView::Experience {
                    entries: form.views(),
                    can_remove: form.can_remove(),
                    valid: form.is_valid(),
                }
            }
            Step::Target => {
                let form = TargetForm::load(data);
                FormView::Target {
                    industries: INDUSTRIES,
                    roles: form.role_options(),
                    valid: form.is_valid(),
                    form,
                }
            }
            Step::Preview => FormView::Preview,
        }
    }
}
