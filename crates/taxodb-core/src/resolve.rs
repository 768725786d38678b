//! Per-locale URL format resolution.
//!
//! Pure functions over a section snapshot; no failure modes beyond the
//! empty string, which means "no override".

use taxodb_schema::{HOMEPAGE_URL_FORMAT, node::Section, types::LocaleId};

/// Resolve the URL format for one locale of a section.
///
/// Homepage rows always resolve to the homepage sentinel, regardless of the
/// stored value. Sections without URLs and unknown locales resolve to the
/// empty string.
#[must_use]
pub fn resolve_url_format(section: &Section, locale: &LocaleId, is_homepage: bool) -> String {
    if is_homepage {
        return HOMEPAGE_URL_FORMAT.to_string();
    }
    if !section.has_urls {
        return String::new();
    }

    section.locales.get(locale).map_or_else(String::new, |row| {
        if row.is_homepage {
            HOMEPAGE_URL_FORMAT.to_string()
        } else {
            row.url_format.clone()
        }
    })
}

/// Resolve the nested URL format for one locale of a structure section.
/// Non-structure sections and rows without a nested format resolve empty.
#[must_use]
pub fn resolve_nested_url_format(section: &Section, locale: &LocaleId) -> String {
    if !section.has_urls || !section.ty.is_structure() {
        return String::new();
    }

    section
        .locales
        .get(locale)
        .and_then(|row| row.nested_url_format.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxodb_schema::{
        node::SectionLocale,
        types::SectionType,
    };

    fn section(ty: SectionType, has_urls: bool) -> Section {
        let mut section = Section::new("Docs", "docs", ty);
        section.has_urls = has_urls;

        let mut row = SectionLocale::new("en", "docs/{slug}");
        row.nested_url_format = Some("docs/{parent}/{slug}".to_string());
        section.locales.insert(LocaleId::from("en"), row);

        section
    }

    #[test]
    fn homepage_overrides_any_stored_value() {
        let section = section(SectionType::Single, true);

        assert_eq!(
            resolve_url_format(&section, &LocaleId::from("en"), true),
            HOMEPAGE_URL_FORMAT
        );
    }

    #[test]
    fn known_locale_resolves_its_stored_format() {
        let section = section(SectionType::Channel, true);

        assert_eq!(
            resolve_url_format(&section, &LocaleId::from("en"), false),
            "docs/{slug}"
        );
    }

    #[test]
    fn unknown_locale_and_url_less_sections_resolve_empty() {
        let with_urls = section(SectionType::Channel, true);
        assert_eq!(
            resolve_url_format(&with_urls, &LocaleId::from("xx"), false),
            ""
        );

        let without_urls = section(SectionType::Channel, false);
        assert_eq!(
            resolve_url_format(&without_urls, &LocaleId::from("en"), false),
            ""
        );
    }

    #[test]
    fn nested_formats_only_apply_to_structures() {
        let structure = section(SectionType::Structure, true);
        assert_eq!(
            resolve_nested_url_format(&structure, &LocaleId::from("en")),
            "docs/{parent}/{slug}"
        );

        let channel = section(SectionType::Channel, true);
        assert_eq!(resolve_nested_url_format(&channel, &LocaleId::from("en")), "");
    }

    #[test]
    fn homepage_rows_resolve_to_the_sentinel() {
        let mut section = section(SectionType::Single, true);
        section
            .locales
            .get_mut(&LocaleId::from("en"))
            .unwrap()
            .is_homepage = true;

        assert_eq!(
            resolve_url_format(&section, &LocaleId::from("en"), false),
            HOMEPAGE_URL_FORMAT
        );
    }
}
