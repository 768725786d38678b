//! Property coverage for entry-type reordering: any permutation of the
//! existing ids yields dense 1-based ranks in the given order, and any
//! non-permutation input is rejected without touching the prior order.

use proptest::prelude::*;
use taxodb_core::prelude::*;

fn seeded(n: u64) -> (Db, SectionId) {
    let mut db = Db::new(LocaleRegistry::single("en"), SystemConfig::default()).unwrap();

    let mut section = Section::new("Blog", "blog", SectionType::Channel);
    section
        .locales
        .insert(LocaleId::from("en"), SectionLocale::new("en", "blog/{slug}"));
    let section_id = db.save_section(section).unwrap();

    for i in 1..=n {
        db.save_entry_type(EntryType::new(section_id, format!("T{i}"), format!("t{i}")))
            .unwrap();
    }

    (db, section_id)
}

fn permutation(n: u64) -> impl Strategy<Value = Vec<u64>> {
    Just((1..=n).collect::<Vec<u64>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn permutations_assign_dense_ranks(
        (n, perm) in (1u64..6).prop_flat_map(|n| (Just(n), permutation(n))),
    ) {
        let (mut db, section_id) = seeded(n);

        let order: Vec<EntryTypeId> = perm.iter().copied().map(EntryTypeId::from).collect();
        db.reorder_entry_types(section_id, &order).unwrap();

        let rows = db.entry_types(section_id).unwrap();
        for (position, id) in perm.iter().enumerate() {
            prop_assert_eq!(rows[position].id, Some(EntryTypeId::from(*id)));
            prop_assert_eq!(rows[position].sort_order as usize, position + 1);
        }
    }

    #[test]
    fn non_permutations_are_rejected_and_preserve_order(
        (n, ids) in (1u64..6).prop_flat_map(|n| {
            (Just(n), prop::collection::vec(1u64..=n + 2, 0..8))
        }),
    ) {
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assume!(sorted != (1..=n).collect::<Vec<u64>>());

        let (mut db, section_id) = seeded(n);

        let order: Vec<EntryTypeId> = ids.iter().copied().map(EntryTypeId::from).collect();
        let err = db.reorder_entry_types(section_id, &order).unwrap_err();
        prop_assert_eq!(err.class(), ErrorClass::Validation);

        let rows = db.entry_types(section_id).unwrap();
        for (position, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.id, Some(EntryTypeId::from(position as u64 + 1)));
            prop_assert_eq!(row.sort_order as usize, position + 1);
        }
    }
}
