use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

///
/// SectionType
///
/// Which of a section's fields are meaningful:
/// - `Single` sections hold exactly one entry and may serve the homepage.
/// - `Channel` sections hold a flat stream of entries.
/// - `Structure` sections nest entries up to `max_levels` deep.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[remain::sorted]
pub enum SectionType {
    #[default]
    Channel,
    Single,
    Structure,
}

impl SectionType {
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::Single)
    }

    #[must_use]
    pub const fn is_structure(self) -> bool {
        matches!(self, Self::Structure)
    }
}

///
/// SectionId
///
/// Store-assigned monotonic section identifier. Absent on a candidate until
/// it has been persisted.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct SectionId(u64);

impl SectionId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// EntryTypeId
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct EntryTypeId(u64);

impl EntryTypeId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// LocaleId
///
/// Language/region identifier for which a section may define distinct URL
/// formatting. Validity is decided by the [`LocaleRegistry`](crate::registry::LocaleRegistry).
///

#[derive(
    Clone, Debug, Default, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
