use crate::{config::Edition, db::Db, error::Error, obs::Metrics};
use taxodb_schema::types::LocaleId;
use time::Date;

///
/// SystemReport
///
/// Point-in-time system metadata snapshot: the values an administrative
/// surface renders about the install itself, plus store counts and the
/// mutation counters.
///

#[derive(Clone, Debug, PartialEq)]
pub struct SystemReport {
    pub edition: Edition,
    pub edition_name: &'static str,
    pub licensed_edition: Option<Edition>,
    pub has_wrong_edition: bool,
    pub can_upgrade_edition: bool,
    pub version: &'static str,
    pub site_name: String,
    pub site_url: String,
    pub locale: LocaleId,
    pub system_on: bool,
    pub release_date: Option<Date>,
    pub max_upload_bytes: u64,
    pub sections: usize,
    pub entry_types: usize,
    pub metrics: Metrics,
}

impl SystemReport {
    pub(crate) fn collect(db: &Db) -> Result<Self, Error> {
        let config = db.config();
        let release_date = config.release_date().map_err(Error::Validation)?;

        let sections = db.sections();
        let entry_types = sections
            .iter()
            .filter_map(|section| section.id)
            .map(|id| db.entry_types(id).map(|rows| rows.len()))
            .sum::<Result<usize, _>>()?;

        Ok(Self {
            edition: config.edition,
            edition_name: config.edition.name(),
            licensed_edition: config.licensed_edition,
            has_wrong_edition: config.has_wrong_edition(),
            can_upgrade_edition: config.edition.can_upgrade(),
            version: env!("CARGO_PKG_VERSION"),
            site_name: config.site_name.clone(),
            site_url: config.site_url.clone(),
            locale: db.locales().primary().clone(),
            system_on: config.system_on,
            release_date,
            max_upload_bytes: config.max_upload_bytes(),
            sections: sections.len(),
            entry_types,
            metrics: db.metrics(),
        })
    }
}
