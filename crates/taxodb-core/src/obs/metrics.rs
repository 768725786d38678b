use serde::Serialize;

///
/// Metrics
///
/// Mutation counters owned by the `Db`. There is no global sink;
/// observability state travels with the store handle it describes, and a
/// copy of the counters is the snapshot.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Metrics {
    pub section_saves: u64,
    pub section_deletes: u64,
    pub entry_type_saves: u64,
    pub entry_type_deletes: u64,
    pub reorders: u64,
    pub validation_failures: u64,
    pub commit_conflicts: u64,
}

impl Metrics {
    pub(crate) const fn record_section_save(&mut self) {
        self.section_saves += 1;
    }

    pub(crate) const fn record_section_delete(&mut self) {
        self.section_deletes += 1;
    }

    pub(crate) const fn record_entry_type_save(&mut self) {
        self.entry_type_saves += 1;
    }

    pub(crate) const fn record_entry_type_delete(&mut self) {
        self.entry_type_deletes += 1;
    }

    pub(crate) const fn record_reorder(&mut self) {
        self.reorders += 1;
    }

    pub(crate) const fn record_validation_failure(&mut self) {
        self.validation_failures += 1;
    }

    pub(crate) const fn record_commit_conflict(&mut self) {
        self.commit_conflicts += 1;
    }

    /// Total mutations applied.
    #[must_use]
    pub const fn mutations(&self) -> u64 {
        self.section_saves
            + self.section_deletes
            + self.entry_type_saves
            + self.entry_type_deletes
            + self.reorders
    }
}
