use crate::{
    DEFAULT_TITLE_LABEL, err,
    error::ErrorTree,
    types::{EntryTypeId, SectionId},
    validate::naming,
};
use derive_more::From;
use serde::{Deserialize, Serialize};

///
/// EntryType
///
/// Named, ordered content-shape definition belonging to exactly one section.
/// `sort_order` is store-managed: dense, contiguous, 1-based within the
/// owning section.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntryType {
    pub id: Option<EntryTypeId>,
    pub section_id: SectionId,
    pub name: String,
    pub handle: String,
    pub has_title_field: bool,
    pub title_label: String,
    pub title_format: String,
    pub sort_order: u32,
    pub field_layout: FieldLayout,
}

impl EntryType {
    pub fn new(
        section_id: SectionId,
        name: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            section_id,
            name: name.into(),
            handle: handle.into(),
            has_title_field: true,
            title_label: DEFAULT_TITLE_LABEL.to_string(),
            title_format: String::new(),
            sort_order: 0,
            field_layout: FieldLayout::default(),
        }
    }

    // Node-local invariants. Sibling uniqueness lives in
    // `validate::validate_entry_type`.
    pub(crate) fn validate(&self) -> ErrorTree {
        let mut errs = ErrorTree::new();

        naming::validate_name(&mut errs, "name", &self.name);
        naming::validate_handle(&mut errs, "handle", &self.handle);

        if !self.has_title_field && self.title_format.is_empty() {
            err!(
                errs,
                "titleFormat",
                "title format is required when titles are auto-generated"
            );
        }

        errs
    }
}

///
/// FieldLayout
///
/// Opaque field-arrangement blob supplied by the excluded field-layout
/// subsystem. The store persists and cascades it, never interprets it.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, From, PartialEq, Serialize)]
pub struct FieldLayout(serde_json::Value);

impl FieldLayout {
    #[must_use]
    pub const fn inner(&self) -> &serde_json::Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_generated_titles_need_a_format() {
        let mut et = EntryType::new(SectionId::from(1), "Article", "article");
        et.has_title_field = false;

        let errs = et.validate();
        assert!(!errs.get("titleFormat").is_empty());

        et.title_format = "{section.name} entry".to_string();
        assert!(et.validate().is_empty());
    }

    #[test]
    fn title_field_entry_types_need_no_format() {
        let et = EntryType::new(SectionId::from(1), "Article", "article");

        assert!(et.validate().is_empty());
    }
}
