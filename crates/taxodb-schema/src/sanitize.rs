//! Candidate normalization.
//!
//! Sanitization is total and non-failing; it runs before validation so
//! validators see the values that would actually be persisted.

use crate::{
    DEFAULT_TITLE_LABEL, HOMEPAGE_URL_FORMAT,
    node::{EntryType, Section},
};

/// Normalize a section candidate in place.
///
/// Trims display strings and forces homepage locale rows to the homepage
/// sentinel with no nested format.
pub fn sanitize_section(section: &mut Section) {
    trim_in_place(&mut section.name);
    trim_in_place(&mut section.handle);
    trim_in_place(&mut section.template);

    for row in section.locales.values_mut() {
        trim_in_place(&mut row.url_format);

        if row.is_homepage {
            row.url_format = HOMEPAGE_URL_FORMAT.to_string();
            row.nested_url_format = None;
        }
    }
}

/// Normalize an entry-type candidate in place.
///
/// Trims display strings and falls back to the default title label when the
/// label is blank.
pub fn sanitize_entry_type(entry_type: &mut EntryType) {
    trim_in_place(&mut entry_type.name);
    trim_in_place(&mut entry_type.handle);
    trim_in_place(&mut entry_type.title_label);
    trim_in_place(&mut entry_type.title_format);

    if entry_type.title_label.is_empty() {
        entry_type.title_label = DEFAULT_TITLE_LABEL.to_string();
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}
