//! Mutation commit protocol.
//!
//! Contract:
//! - `prepare_*` performs every fallible step: existence checks, validation,
//!   and the commit-boundary conflict re-check.
//! - `apply` is infallible and purely mechanical.
//! - A failed prepare leaves the stores untouched, so every mutation is a
//!   single atomic transition from one consistent snapshot to the next.

use crate::{
    db::store::{EntryTypeStore, SectionStore},
    error::Error,
};
use taxodb_schema::prelude::*;

///
/// SectionCommit
/// Fully validated section mutation, ready to apply.
///

#[derive(Debug)]
pub(crate) struct SectionCommit {
    id: SectionId,
    record: Section,
}

impl SectionCommit {
    /// Final conflict re-check at the commit boundary. Validation has
    /// already scanned peers; in a concurrent adaptation a duplicate could
    /// still race in between, and it must surface as a field error rather
    /// than corrupt the uniqueness invariant.
    pub(crate) fn prepare(
        id: SectionId,
        record: Section,
        store: &SectionStore,
    ) -> Result<Self, Error> {
        let mut errs = ErrorTree::new();

        for (other_id, other) in store.iter() {
            if *other_id == id {
                continue;
            }
            if other.handle == record.handle {
                err!(
                    errs,
                    "handle",
                    "handle '{}' is already in use",
                    record.handle
                );
            }
        }

        errs.result()?;

        Ok(Self { id, record })
    }

    pub(crate) fn apply(self, store: &mut SectionStore) -> SectionId {
        store.insert(self.id, self.record);

        self.id
    }
}

///
/// EntryTypeCommit
///

pub(crate) struct EntryTypeCommit {
    id: EntryTypeId,
    record: EntryType,
}

impl EntryTypeCommit {
    pub(crate) fn prepare(
        id: EntryTypeId,
        record: EntryType,
        store: &EntryTypeStore,
    ) -> Result<Self, Error> {
        let mut errs = ErrorTree::new();

        for other in store.in_section(record.section_id) {
            if other.id == Some(id) {
                continue;
            }
            if other.handle == record.handle {
                err!(
                    errs,
                    "handle",
                    "handle '{}' is already in use in this section",
                    record.handle
                );
            }
        }

        errs.result()?;

        Ok(Self { id, record })
    }

    pub(crate) fn apply(self, store: &mut EntryTypeStore) -> EntryTypeId {
        store.insert(self.id, self.record);

        self.id
    }
}

///
/// RankCommit
/// Dense 1-based rank assignment following a verified id sequence.
///

pub(crate) struct RankCommit {
    ranks: Vec<(EntryTypeId, u32)>,
}

impl RankCommit {
    /// Build ranks `1..=n` in the order the ids are given. The caller has
    /// already verified every id resolves within the target section.
    pub(crate) fn from_sequence(ordered_ids: &[EntryTypeId]) -> Self {
        let ranks = ordered_ids
            .iter()
            .enumerate()
            .map(|(position, id)| (*id, u32::try_from(position + 1).unwrap_or(u32::MAX)))
            .collect();

        Self { ranks }
    }

    pub(crate) fn apply(self, store: &mut EntryTypeStore) {
        for (id, rank) in self.ranks {
            if let Some(row) = store.get_mut(&id) {
                row.sort_order = rank;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_commit_rejects_raced_duplicate_handles() {
        let mut store = SectionStore::new();
        let mut existing = Section::new("Blog", "blog", SectionType::Channel);
        existing.id = Some(SectionId::from(1));
        store.insert(SectionId::from(1), existing);

        let mut candidate = Section::new("News", "blog", SectionType::Channel);
        candidate.id = Some(SectionId::from(2));

        let err = SectionCommit::prepare(SectionId::from(2), candidate, &store).unwrap_err();
        assert!(!err.validation_errors().unwrap().get("handle").is_empty());
    }

    #[test]
    fn rank_commit_assigns_dense_one_based_ranks() {
        let section = SectionId::from(1);
        let mut store = EntryTypeStore::new();
        for id in 1u64..=3 {
            let mut row = EntryType::new(section, format!("T{id}"), format!("t{id}"));
            row.id = Some(EntryTypeId::from(id));
            row.sort_order = id as u32;
            store.insert(EntryTypeId::from(id), row);
        }

        let order = [
            EntryTypeId::from(3),
            EntryTypeId::from(1),
            EntryTypeId::from(2),
        ];
        RankCommit::from_sequence(&order).apply(&mut store);

        assert_eq!(store[&EntryTypeId::from(3)].sort_order, 1);
        assert_eq!(store[&EntryTypeId::from(1)].sort_order, 2);
        assert_eq!(store[&EntryTypeId::from(2)].sort_order, 3);
    }
}
