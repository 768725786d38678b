use crate::{
    db::{
        Db,
        commit::{EntryTypeCommit, RankCommit},
    },
    error::Error,
};
use std::collections::BTreeSet;
use taxodb_schema::{prelude::*, sanitize, validate};

impl Db {
    /// Create or update an entry type.
    ///
    /// New entry types are appended at the end of their section's order.
    /// `sort_order` on the candidate is ignored; ranks are store-managed.
    /// An entry type cannot move between sections.
    pub fn save_entry_type(&mut self, mut candidate: EntryType) -> Result<EntryTypeId, Error> {
        sanitize::sanitize_entry_type(&mut candidate);

        if !self.sections.contains_key(&candidate.section_id) {
            return Err(Error::section_not_found(candidate.section_id));
        }

        if let Some(id) = candidate.id {
            let Some(existing) = self.entry_types.get(&id) else {
                return Err(Error::entry_type_not_found(id));
            };

            if existing.section_id != candidate.section_id {
                let mut errs = ErrorTree::new();
                err!(
                    errs,
                    "sectionId",
                    "entry type {id} belongs to section {} and cannot move",
                    existing.section_id
                );
                self.metrics_mut().record_validation_failure();
                return Err(Error::Validation(errs));
            }

            candidate.sort_order = existing.sort_order;
        } else {
            let siblings = self.entry_types.in_section(candidate.section_id).len();
            candidate.sort_order = u32::try_from(siblings + 1).unwrap_or(u32::MAX);
        }

        if let Err(errs) = validate::validate_entry_type(
            &candidate,
            self.entry_types.in_section(candidate.section_id),
        ) {
            self.metrics_mut().record_validation_failure();
            return Err(Error::Validation(errs));
        }

        let id = match candidate.id {
            Some(id) => id,
            None => EntryTypeId::from(self.entry_type_ids.next_id()),
        };
        candidate.id = Some(id);

        let prepared = match EntryTypeCommit::prepare(id, candidate, &self.entry_types) {
            Ok(prepared) => prepared,
            Err(err) => {
                self.metrics_mut().record_commit_conflict();
                return Err(err);
            }
        };

        let id = prepared.apply(&mut self.entry_types);
        self.metrics_mut().record_entry_type_save();

        Ok(id)
    }

    /// Delete an entry type and re-compact the owning section's ranks so
    /// they stay dense and 1-based. Returns the removed record.
    pub fn delete_entry_type(&mut self, id: EntryTypeId) -> Result<EntryType, Error> {
        let Some(removed) = self.entry_types.remove(&id) else {
            return Err(Error::entry_type_not_found(id));
        };

        let remaining: Vec<EntryTypeId> = self
            .entry_types
            .in_section(removed.section_id)
            .iter()
            .filter_map(|row| row.id)
            .collect();
        RankCommit::from_sequence(&remaining).apply(&mut self.entry_types);

        self.metrics_mut().record_entry_type_delete();

        Ok(removed)
    }

    /// Reorder a section's entry types.
    ///
    /// `ordered_ids` must be an exact permutation of the section's current
    /// entry-type id set; a missing, extra, or duplicated id rejects the
    /// whole request and leaves the prior order unchanged.
    pub fn reorder_entry_types(
        &mut self,
        section_id: SectionId,
        ordered_ids: &[EntryTypeId],
    ) -> Result<(), Error> {
        if !self.sections.contains_key(&section_id) {
            return Err(Error::section_not_found(section_id));
        }

        let existing = self.entry_types.ids_in_section(section_id);
        let mut errs = ErrorTree::new();

        let mut seen = BTreeSet::new();
        for id in ordered_ids {
            if !seen.insert(*id) {
                err!(errs, "ids", "entry type {id} appears more than once");
            }
            if !existing.contains(id) {
                err!(
                    errs,
                    "ids",
                    "entry type {id} does not belong to section {section_id}"
                );
            }
        }
        for id in &existing {
            if !seen.contains(id) {
                err!(errs, "ids", "entry type {id} is missing from the new order");
            }
        }

        if !errs.is_empty() {
            self.metrics_mut().record_validation_failure();
            return Err(Error::Validation(errs));
        }

        RankCommit::from_sequence(ordered_ids).apply(&mut self.entry_types);
        self.metrics_mut().record_reorder();

        Ok(())
    }
}
