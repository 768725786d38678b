//! Configuration nodes: the records the store persists.

mod entry_type;
mod section;

pub use entry_type::{EntryType, FieldLayout};
pub use section::{Section, SectionLocale};
