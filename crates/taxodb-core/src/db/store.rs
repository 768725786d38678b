use derive_more::{Deref, DerefMut};
use std::collections::{BTreeMap, BTreeSet};
use taxodb_schema::prelude::*;

///
/// SectionStore
///
/// Section rows keyed by id. Ids are monotonic, so iteration order is
/// creation order.
///

#[derive(Debug, Default, Deref, DerefMut)]
pub struct SectionStore(BTreeMap<SectionId, Section>);

impl SectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

///
/// EntryTypeStore
///
/// Entry-type rows keyed by id, with per-section views ordered by rank.
///

#[derive(Debug, Default, Deref, DerefMut)]
pub struct EntryTypeStore(BTreeMap<EntryTypeId, EntryType>);

impl EntryTypeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry types of one section, ordered by rank (id breaks ties).
    #[must_use]
    pub fn in_section(&self, section_id: SectionId) -> Vec<&EntryType> {
        let mut rows: Vec<&EntryType> = self
            .0
            .values()
            .filter(|row| row.section_id == section_id)
            .collect();
        rows.sort_by_key(|row| (row.sort_order, row.id));

        rows
    }

    /// Id set of one section's entry types.
    #[must_use]
    pub fn ids_in_section(&self, section_id: SectionId) -> BTreeSet<EntryTypeId> {
        self.0
            .iter()
            .filter(|(_, row)| row.section_id == section_id)
            .map(|(id, _)| *id)
            .collect()
    }
}

///
/// IdAllocator
///
/// Monotonic id source. Ids are never reused, even after deletes, so stale
/// references can only miss, never alias.
///

#[derive(Debug, Default)]
pub struct IdAllocator(u64);

impl IdAllocator {
    pub const fn next_id(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_is_monotonic() {
        let mut ids = IdAllocator::default();

        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn in_section_orders_by_rank() {
        let section = SectionId::from(1);
        let mut store = EntryTypeStore::new();

        for (id, rank) in [(1u64, 2u32), (2, 1), (3, 3)] {
            let mut row = EntryType::new(section, format!("T{id}"), format!("t{id}"));
            row.id = Some(EntryTypeId::from(id));
            row.sort_order = rank;
            store.insert(EntryTypeId::from(id), row);
        }

        let ranks: Vec<u32> = store
            .in_section(section)
            .iter()
            .map(|row| row.sort_order)
            .collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }
}
