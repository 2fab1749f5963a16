use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{Experience, ExperienceKind, ResumeData};
use crate::wizard::forms::{FormError, StepForm};
use crate::wizard::SectionUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Organization,
    Location,
    StartDate,
    EndDate,
    Description,
    Technologies,
}

/// An entry together with the labels its kind selects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    #[serde(flatten)]
    pub entry: Experience,
    pub type_label: &'static str,
    pub organization_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceForm {
    entries: Vec<Experience>,
}

fn seed_entry() -> Experience {
    Experience {
        id: Uuid::nil(),
        ..Experience::blank()
    }
}

impl ExperienceForm {
    pub fn entries(&self) -> &[Experience] {
        &self.entries
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn views(&self) -> Vec<ExperienceView> {
        self.entries
            .iter()
            .map(|entry| ExperienceView {
                type_label: entry.kind.type_label(),
                organization_label: entry.kind.organization_label(),
                entry: entry.clone(),
            })
            .collect()
    }

    pub fn add(&mut self) -> Uuid {
        let entry = Experience::blank();
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Removes an entry. The last remaining entry is kept (`Ok(false)`).
    pub fn remove(&mut self, id: Uuid) -> Result<bool, FormError> {
        let pos = self.position(id)?;
        if !self.can_remove() {
            return Ok(false);
        }
        self.entries.remove(pos);
        Ok(true)
    }

    pub fn update(&mut self, id: Uuid, field: ExperienceField, value: String) -> Result<(), FormError> {
        let entry = self.entry_mut(id)?;
        let slot = match field {
            ExperienceField::Title => &mut entry.title,
            ExperienceField::Organization => &mut entry.organization,
            ExperienceField::Location => &mut entry.location,
            ExperienceField::StartDate => &mut entry.start_date,
            ExperienceField::EndDate => &mut entry.end_date,
            ExperienceField::Description => &mut entry.description,
            ExperienceField::Technologies => &mut entry.technologies,
        };
        *slot = value;
        Ok(())
    }

    pub fn set_kind(&mut self, id: Uuid, kind: ExperienceKind) -> Result<(), FormError> {
        self.entry_mut(id)?.kind = kind;
        Ok(())
    }

    /// Marks an entry ongoing. The stored end date is kept but not shown.
    pub fn set_current(&mut self, id: Uuid, current: bool) -> Result<(), FormError> {
        self.entry_mut(id)?.current = current;
        Ok(())
    }

    fn position(&self, id: Uuid) -> Result<usize, FormError> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(FormError::EntryNotFound(id))
    }

    fn entry_mut(&mut self, id: Uuid) -> Result<&mut Experience, FormError> {
        let pos = self.position(id)?;
        Ok(&mut self.entries[pos])
    }
}

impl StepForm for ExperienceForm {
    fn load(data: &ResumeData) -> Self {
        let entries = if data.experience.is_empty() {
            vec![seed_entry()]
        } else {
            data.experience.clone()
        };
        Self { entries }
    }

    // Experience is optional.
    fn is_valid(&self) -> bool {
        true
    }

    fn submit(self) -> SectionUpdate {
        SectionUpdate::Experience(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> ExperienceForm {
        ExperienceForm::load(&ResumeData::default())
    }

    #[test]
    fn test_seed_entry_is_a_project() {
        let form = empty();
        assert_eq!(form.entries().len(), 1);
        assert_eq!(form.entries()[0].kind, ExperienceKind::Project);
        assert!(form.is_valid());
    }

    #[test]
    fn test_kind_drives_labels() {
        let mut form = empty();
        let id = form.entries()[0].id;
        form.set_kind(id, ExperienceKind::Internship).unwrap();

        let view = &form.views()[0];
        assert_eq!(view.type_label, "Internship");
        assert_eq!(view.organization_label, "Company");

        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["kind"], "internship");
        assert_eq!(json["organization_label"], "Company");
    }

    #[test]
    fn test_current_flag_and_fields() {
        let mut form = empty();
        let id = form.entries()[0].id;
        form.update(id, ExperienceField::Title, "Campus Connect".into()).unwrap();
        form.update(id, ExperienceField::EndDate, "Mar 2024".into()).unwrap();
        form.set_current(id, true).unwrap();

        let entry = &form.entries()[0];
        assert_eq!(entry.title, "Campus Connect");
        assert!(entry.current);
        assert_eq!(entry.end_date, "Mar 2024");
    }

    #[test]
    fn test_remove_keeps_at_least_one_entry() {
        let mut form = empty();
        let seed = form.entries()[0].id;
        let added = form.add();
        assert_eq!(form.remove(added), Ok(true));
        assert_eq!(form.remove(seed), Ok(false));
        assert_eq!(form.entries().len(), 1);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let mut form = empty();
        let id = Uuid::new_v4();
        assert_eq!(
            form.set_kind(id, ExperienceKind::Work),
            Err(FormError::EntryNotFound(id))
        );
    }
}
