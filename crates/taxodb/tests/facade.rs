//! The facade re-exports must be enough to drive the store end to end.

use taxodb::prelude::*;

#[test]
fn prelude_covers_the_adapter_surface() {
    let mut db = Db::new(LocaleRegistry::single("en"), SystemConfig::default()).unwrap();

    let mut section = Section::new("Blog", "blog", SectionType::Channel);
    section
        .locales
        .insert(LocaleId::from("en"), SectionLocale::new("en", "blog/{slug}"));

    let id = db.save_section(section).unwrap();
    assert!(db.section(id).is_some());

    let report = system_report(&db).unwrap();
    assert_eq!(report.sections, 1);
    assert_eq!(report.version, taxodb::VERSION);
}
