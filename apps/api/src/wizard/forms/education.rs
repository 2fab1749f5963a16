use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{Education, ResumeData};
use crate::wizard::forms::{FormError, StepForm};
use crate::wizard::SectionUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    Institution,
    Location,
    StartYear,
    EndYear,
    Score,
    Coursework,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationForm {
    entries: Vec<Education>,
}

/// The blank entry shown on an untouched step. Its id is fixed so edits
/// addressed to it survive the reload that precedes every edit.
fn seed_entry() -> Education {
    Education {
        id: Uuid::nil(),
        ..Education::blank()
    }
}

impl EducationForm {
    pub fn entries(&self) -> &[Education] {
        &self.entries
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn add(&mut self) -> Uuid {
        let entry = Education::blank();
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

    pub fn update(&mut self, id: Uuid, field: EducationField, value: String) -> Result<(), FormError> {
        let pos = self.position(id)?;
        let entry = &mut self.entries[pos];
        let slot = match field {
            EducationField::Degree => &mut entry.degree,
            EducationField::Institution => &mut entry.institution,
            EducationField::Location => &mut entry.location,
            EducationField::StartYear => &mut entry.start_year,
            EducationField::EndYear => &mut entry.end_year,
            EducationField::Score => &mut entry.score,
            EducationField::Coursework => &mut entry.coursework,
        };
        *slot = value;
        Ok(())
    }

    fn position(&self, id: Uuid) -> Result<usize, FormError> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(FormError::EntryNotFound(id))
    }
}

impl StepForm for EducationForm {
    fn load(data: &ResumeData) -> Self {
        let entries = if data.education.is_empty() {
            vec![seed_entry()]
        } else {
            data.education.clone()
        };
        Self { entries }
    }

    fn is_valid(&self) -> bool {
        self.entries.iter().all(Education::is_complete)
    }

    fn submit(self) -> SectionUpdate {
        SectionUpdate::Education(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> EducationForm {
        EducationForm::load(&ResumeData::default())
    }

    #[test]
    fn test_empty_section_loads_one_stable_seed_entry() {
        let first = empty();
        let second = empty();
        assert_eq!(first.entries().len(), 1);
        assert_eq!(first.entries()[0].id, second.entries()[0].id);
        assert!(!first.is_valid());
        assert!(!first.can_remove());
    }

    #[test]
    fn test_last_entry_cannot_be_removed() {
        let mut form = empty();
        let seed = form.entries()[0].id;
        assert_eq!(form.remove(seed), Ok(false));
        assert_eq!(form.entries().len(), 1);

        let added = form.add();
        assert_ne!(added, seed);
        assert_eq!(form.remove(seed), Ok(true));
        assert_eq!(form.entries()[0].id, added);
    }

    #[test]
    fn test_every_entry_must_be_complete() {
        let mut form = empty();
        let seed = form.entries()[0].id;
        form.update(seed, EducationField::Degree, "B.Tech CSE".into()).unwrap();
        form.update(seed, EducationField::Institution, "VIT Vellore".into()).unwrap();
        assert!(form.is_valid());

        let second = form.add();
        assert!(!form.is_valid());
        form.update(second, EducationField::Degree, "Class XII".into()).unwrap();
        form.update(second, EducationField::Institution, "KV Chennai".into()).unwrap();
        assert!(form.is_valid());
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let mut form = empty();
        let id = Uuid::new_v4();
        assert_eq!(
            form.update(id, EducationField::Score, "9.1".into()),
            Err(FormError::EntryNotFound(id))
        );
        assert_eq!(form.remove(id), Err(FormError::EntryNotFound(id)));
    }

    #[test]
    fn test_existing_entries_load_unchanged() {
        let mut entry = Education::blank();
        entry.degree = "MCA".into();
        let data = ResumeData {
            education: vec![entry.clone()],
            ..Default::default()
        };
        assert_eq!(EducationForm::load(&data).entries(), [entry]);
    }
}
