//! Content-taxonomy configuration model: sections, entry types, per-locale
//! URL behavior, and the validation and sanitization that guard them.

pub mod error;
pub mod node;
pub mod registry;
pub mod sanitize;
pub mod types;
pub mod validate;

///
/// CONSTANTS
///

/// Maximum length for section and entry-type display names.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length for section and entry-type handles.
pub const MAX_HANDLE_LEN: usize = 64;

/// Sentinel URL format carried by the homepage section's locale rows.
pub const HOMEPAGE_URL_FORMAT: &str = "__home__";

/// Title label applied when an entry type leaves its label blank.
pub const DEFAULT_TITLE_LABEL: &str = "Title";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::{EntryType, FieldLayout, Section, SectionLocale},
        registry::LocaleRegistry,
        types::{EntryTypeId, LocaleId, SectionId, SectionType},
    };
    pub use serde::{Deserialize, Serialize};
}
