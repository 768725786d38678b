use crate::{err, error::ErrorTree, types::LocaleId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// LocaleRegistry
///
/// Typed contract for the excluded locale-registry collaborator: the set of
/// configured site locales and which one is primary. Constructed once and
/// handed to the store; validation consults it to reject unknown locales.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LocaleRegistry {
    primary: LocaleId,
    site_locales: BTreeSet<LocaleId>,
}

impl LocaleRegistry {
    pub fn new(primary: LocaleId, site_locales: impl IntoIterator<Item = LocaleId>) -> Self {
        let mut site_locales: BTreeSet<LocaleId> = site_locales.into_iter().collect();
        site_locales.insert(primary.clone());

        Self {
            primary,
            site_locales,
        }
    }

    /// Registry for a single-locale install.
    pub fn single(primary: impl Into<LocaleId>) -> Self {
        let primary = primary.into();

        Self::new(primary, [])
    }

    #[must_use]
    pub const fn primary(&self) -> &LocaleId {
        &self.primary
    }

    #[must_use]
    pub fn is_known(&self, locale: &LocaleId) -> bool {
        self.site_locales.contains(locale)
    }

    /// Whether the install carries more than one site locale.
    #[must_use]
    pub fn is_localized(&self) -> bool {
        self.site_locales.len() > 1
    }

    pub fn site_locales(&self) -> impl Iterator<Item = &LocaleId> {
        self.site_locales.iter()
    }

    /// Structural check for registries built from deserialized config.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.primary.as_str().is_empty() {
            err!(errs, "primary", "primary locale must not be empty");
        }
        if !self.site_locales.contains(&self.primary) {
            err!(
                errs,
                "primary",
                "primary locale '{}' is not a configured site locale",
                self.primary
            );
        }

        errs.result()
    }
}
