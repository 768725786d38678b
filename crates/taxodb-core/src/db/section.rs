use crate::{
    db::{Db, commit::SectionCommit},
    error::Error,
};
use taxodb_schema::{prelude::*, sanitize, validate};

impl Db {
    /// Create or update a section.
    ///
    /// Candidates without an id are assigned a fresh one; candidates with an
    /// id replace the existing record wholesale, locale rows included. The
    /// operation is atomic: a rejected candidate leaves the store unchanged.
    pub fn save_section(&mut self, mut candidate: Section) -> Result<SectionId, Error> {
        sanitize::sanitize_section(&mut candidate);

        if let Some(id) = candidate.id
            && !self.sections.contains_key(&id)
        {
            return Err(Error::section_not_found(id));
        }

        if let Err(errs) =
            validate::validate_section(&candidate, self.sections.values(), &self.locales)
        {
            self.metrics_mut().record_validation_failure();
            return Err(Error::Validation(errs));
        }

        let id = match candidate.id {
            Some(id) => id,
            None => SectionId::from(self.section_ids.next_id()),
        };
        candidate.id = Some(id);

        let prepared = match SectionCommit::prepare(id, candidate, &self.sections) {
            Ok(prepared) => prepared,
            Err(err) => {
                self.metrics_mut().record_commit_conflict();
                return Err(err);
            }
        };

        let id = prepared.apply(&mut self.sections);
        self.metrics_mut().record_section_save();

        Ok(id)
    }

    /// Delete a section and cascade to its entry types and their field
    /// layouts. Returns the removed record.
    pub fn delete_section(&mut self, id: SectionId) -> Result<Section, Error> {
        let Some(removed) = self.sections.remove(&id) else {
            return Err(Error::section_not_found(id));
        };

        // Cascade. Both removals are infallible once the section is gone.
        let child_ids: Vec<EntryTypeId> =
            self.entry_types.ids_in_section(id).into_iter().collect();
        for child_id in child_ids {
            self.entry_types.remove(&child_id);
        }

        self.metrics_mut().record_section_delete();

        Ok(removed)
    }
}
