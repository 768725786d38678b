//! The section / entry-type store and its mutation surface.
//!
//! Every mutating operation follows the same shape: sanitize the candidate,
//! validate it against the current snapshot, prepare a commit, then apply
//! the commit infallibly. A rejected candidate leaves the store unchanged.

pub(crate) mod commit;
mod entry_type;
mod section;
pub mod store;

use crate::{
    config::SystemConfig,
    db::store::{EntryTypeStore, IdAllocator, SectionStore},
    error::Error,
    obs::Metrics,
};
use taxodb_schema::prelude::*;

///
/// Db
///
/// Handle to the section and entry-type stores plus the injected
/// collaborator contracts (locale registry, system config). Constructed
/// once and passed by reference; there is no ambient global registry.
///
/// A single logical owner drives mutations at a time; reads through the
/// accessors always observe a fully applied snapshot.
///

#[derive(Debug)]
pub struct Db {
    locales: LocaleRegistry,
    config: SystemConfig,
    sections: SectionStore,
    entry_types: EntryTypeStore,
    section_ids: IdAllocator,
    entry_type_ids: IdAllocator,
    metrics: Metrics,
}

impl Db {
    /// Construct an empty store. Deserialized collaborator contracts are
    /// structurally validated here so later operations can rely on them.
    pub fn new(locales: LocaleRegistry, config: SystemConfig) -> Result<Self, Error> {
        locales.validate()?;
        config.validate()?;

        Ok(Self {
            locales,
            config,
            sections: SectionStore::new(),
            entry_types: EntryTypeStore::new(),
            section_ids: IdAllocator::default(),
            entry_type_ids: IdAllocator::default(),
            metrics: Metrics::default(),
        })
    }

    // ======================================================================
    // Reads
    // ======================================================================

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(&id)
    }

    /// All sections in creation order.
    #[must_use]
    pub fn sections(&self) -> Vec<&Section> {
        self.sections.values().collect()
    }

    #[must_use]
    pub fn entry_type(&self, id: EntryTypeId) -> Option<&EntryType> {
        self.entry_types.get(&id)
    }

    /// Entry types of one section in rank order.
    pub fn entry_types(&self, section_id: SectionId) -> Result<Vec<&EntryType>, Error> {
        if !self.sections.contains_key(&section_id) {
            return Err(Error::section_not_found(section_id));
        }

        Ok(self.entry_types.in_section(section_id))
    }

    /// Fetch an entry type and check it belongs to the given section.
    /// Cross-section access is a validation error, not a miss.
    pub fn entry_type_in_section(
        &self,
        section_id: SectionId,
        id: EntryTypeId,
    ) -> Result<&EntryType, Error> {
        if !self.sections.contains_key(&section_id) {
            return Err(Error::section_not_found(section_id));
        }
        let Some(row) = self.entry_types.get(&id) else {
            return Err(Error::entry_type_not_found(id));
        };

        if row.section_id != section_id {
            let mut errs = ErrorTree::new();
            err!(
                errs,
                "sectionId",
                "entry type {id} does not belong to section {section_id}"
            );
            return Err(Error::Validation(errs));
        }

        Ok(row)
    }

    /// Whether any section currently serves the homepage.
    #[must_use]
    pub fn homepage_exists(&self) -> bool {
        self.sections.values().any(Section::is_homepage)
    }

    #[must_use]
    pub const fn locales(&self) -> &LocaleRegistry {
        &self.locales
    }

    #[must_use]
    pub const fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Point-in-time mutation counters.
    #[must_use]
    pub const fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut Metrics {
        &mut self.metrics
    }
}
