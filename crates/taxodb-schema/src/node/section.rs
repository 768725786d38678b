use crate::{
    err,
    error::ErrorTree,
    registry::LocaleRegistry,
    types::{LocaleId, SectionId, SectionType},
    validate::naming,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Section
///
/// Top-level content-type configuration grouping one or more entry types,
/// with per-locale URL behavior. A section exclusively owns its locale rows;
/// entry types reference it by id.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Section {
    pub id: Option<SectionId>,
    pub name: String,
    pub handle: String,
    #[serde(rename = "type")]
    pub ty: SectionType,
    pub enable_versioning: bool,
    pub has_urls: bool,
    pub template: String,
    pub max_levels: Option<u32>,
    pub locales: BTreeMap<LocaleId, SectionLocale>,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            handle: String::new(),
            ty: SectionType::default(),
            enable_versioning: true,
            has_urls: false,
            template: String::new(),
            max_levels: None,
            locales: BTreeMap::new(),
        }
    }
}

impl Section {
    pub fn new(name: impl Into<String>, handle: impl Into<String>, ty: SectionType) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
            ty,
            ..Self::default()
        }
    }

    /// Whether any locale row marks this section as the site homepage.
    #[must_use]
    pub fn is_homepage(&self) -> bool {
        self.locales.values().any(|row| row.is_homepage)
    }

    // Node-local invariants. Uniqueness against peers and homepage
    // exclusivity live in `validate::validate_section`.
    pub(crate) fn validate(&self, registry: &LocaleRegistry) -> ErrorTree {
        let mut errs = ErrorTree::new();

        naming::validate_name(&mut errs, "name", &self.name);
        naming::validate_handle(&mut errs, "handle", &self.handle);

        if self.has_urls && self.template.is_empty() {
            err!(errs, "template", "template is required when URLs are enabled");
        }

        match self.max_levels {
            Some(0) => err!(errs, "maxLevels", "max levels must be a positive integer"),
            Some(levels) if !self.ty.is_structure() => err!(
                errs,
                "maxLevels",
                "max levels ({levels}) only applies to structure sections"
            ),
            _ => {}
        }

        self.validate_locales(registry, &mut errs);

        errs
    }

    fn validate_locales(&self, registry: &LocaleRegistry, errs: &mut ErrorTree) {
        if self.locales.is_empty() {
            err!(errs, "locales", "at least one locale is required");
        }

        if !registry.is_localized()
            && self
                .locales
                .keys()
                .any(|locale| locale != registry.primary())
        {
            err!(
                errs,
                "locales",
                "only the primary locale '{}' is allowed on a non-localized site",
                registry.primary()
            );
        }

        let mut homepage_rows = 0usize;

        for (locale, row) in &self.locales {
            let prefix = format!("locales.{locale}");

            if locale != &row.locale {
                err!(
                    errs,
                    &prefix,
                    "locale key '{locale}' does not match row locale '{}'",
                    row.locale
                );
            }
            if !registry.is_known(locale) {
                err!(errs, &prefix, "unknown locale '{locale}'");
            }

            if row.is_homepage {
                homepage_rows += 1;
                if !self.ty.is_single() {
                    err!(
                        errs,
                        &prefix,
                        "only single sections may serve the homepage"
                    );
                }
            }

            errs.merge_under(&prefix, row.validate(self.has_urls, self.ty));
        }

        if homepage_rows > 1 {
            err!(errs, "locales", "at most one locale row may be the homepage");
        }
    }
}

///
/// SectionLocale
///
/// Per-locale URL behavior for one section. Homepage rows are forced to the
/// sentinel URL format during sanitization.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct SectionLocale {
    pub locale: LocaleId,
    pub enabled_by_default: bool,
    pub url_format: String,
    pub nested_url_format: Option<String>,
    pub is_homepage: bool,
}

impl SectionLocale {
    pub fn new(locale: impl Into<LocaleId>, url_format: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            url_format: url_format.into(),
            ..Self::default()
        }
    }

    fn validate(&self, has_urls: bool, ty: SectionType) -> ErrorTree {
        let mut errs = ErrorTree::new();

        if has_urls && self.url_format.is_empty() {
            err!(errs, "urlFormat", "URL format is required when URLs are enabled");
        }

        if self.nested_url_format.is_some() && !ty.is_structure() {
            err!(
                errs,
                "nestedUrlFormat",
                "nested URL format only applies to structure sections"
            );
        }

        errs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::new(LocaleId::from("en"), [LocaleId::from("de")])
    }

    fn channel(name: &str, handle: &str) -> Section {
        let mut section = Section::new(name, handle, SectionType::Channel);
        section
            .locales
            .insert(LocaleId::from("en"), SectionLocale::new("en", "blog/{slug}"));

        section
    }

    #[test]
    fn valid_channel_passes() {
        let section = channel("Blog", "blog");

        assert!(section.validate(&registry()).is_empty());
    }

    #[test]
    fn urls_require_template_and_url_format() {
        let mut section = channel("Blog", "blog");
        section.has_urls = true;
        section
            .locales
            .insert(LocaleId::from("en"), SectionLocale::new("en", ""));

        let errs = section.validate(&registry());
        assert!(!errs.get("template").is_empty());
        assert!(!errs.get("locales.en.urlFormat").is_empty());
    }

    #[test]
    fn max_levels_rejected_outside_structures() {
        let mut section = channel("Blog", "blog");
        section.max_levels = Some(3);

        let errs = section.validate(&registry());
        assert!(!errs.get("maxLevels").is_empty());
    }

    #[test]
    fn structure_allows_positive_max_levels_only() {
        let mut section = channel("Docs", "docs");
        section.ty = SectionType::Structure;
        section.max_levels = Some(0);

        let errs = section.validate(&registry());
        assert!(!errs.get("maxLevels").is_empty());

        section.max_levels = Some(4);
        assert!(section.validate(&registry()).is_empty());
    }

    #[test]
    fn homepage_rows_only_on_singles() {
        let mut section = channel("Home", "home");
        section.locales.get_mut(&LocaleId::from("en")).unwrap().is_homepage = true;

        let errs = section.validate(&registry());
        assert!(!errs.get("locales.en").is_empty());

        section.ty = SectionType::Single;
        assert!(section.validate(&registry()).is_empty());
    }

    #[test]
    fn unknown_locales_are_rejected() {
        let mut section = channel("Blog", "blog");
        section
            .locales
            .insert(LocaleId::from("xx"), SectionLocale::new("xx", "blog/{slug}"));

        let errs = section.validate(&registry());
        assert!(!errs.get("locales.xx").is_empty());
    }

    #[test]
    fn non_localized_site_only_accepts_primary() {
        let mut section = channel("Blog", "blog");
        section
            .locales
            .insert(LocaleId::from("de"), SectionLocale::new("de", "blog/{slug}"));

        let errs = section.validate(&LocaleRegistry::single("en"));
        assert!(!errs.get("locales").is_empty());
    }

    #[test]
    fn missing_locales_are_an_error() {
        let section = Section::new("Blog", "blog", SectionType::Channel);

        let errs = section.validate(&registry());
        assert!(!errs.get("locales").is_empty());
    }
}
