//! Property-based tests for listing and id assignment.

use proptest::prelude::*;
use shelf_engine::{
    collate, Book, BookDraft, Catalog, IdStrategy, ListQuery, SortKey, SortOrder, PAGE_SIZE,
};
use std::cmp::Ordering;
use std::collections::HashSet;

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,8}",
        Just("Ádám".to_string()),
        Just("ádám".to_string()),
        Just(String::new()),
    ]
}

fn arb_draft() -> impl Strategy<Value = BookDraft> {
    (arb_text(), arb_text(), 1800i64..2030, 1i64..2000, any::<bool>()).prop_map(
        |(title, author, year, pages, available)| BookDraft {
            title,
            author,
            year,
            genre: "Novel".to_string(),
            pages,
            available,
        },
    )
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arb_draft(), 0..40).prop_map(|drafts| {
        let mut catalog = Catalog::new();
        for draft in drafts {
            catalog
                .create(draft, IdStrategy::LastPlusOne)
                .expect("ids fit in i64");
        }
        catalog
    })
}

fn arb_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![Just(SortKey::Title), Just(SortKey::Author)]
}

fn arb_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)]
}

fn field(book: &Book, key: SortKey) -> &str {
    match key {
        SortKey::Title => &book.title,
        SortKey::Author => &book.author,
        SortKey::Year => unreachable!("year has no string field"),
    }
}

proptest! {
    #[test]
    fn prop_page_is_contiguous_slice(
        catalog in arb_catalog(),
        key in arb_key(),
        order in arb_order(),
        page in 1i64..6,
    ) {
        let full = catalog.sorted(&ListQuery::new(1, Some(key), order));
        let result = catalog.list(&ListQuery::new(page, Some(key), order));

        prop_assert!(result.len() <= PAGE_SIZE);

        let start = (page as usize - 1) * PAGE_SIZE;
        let expected: Vec<Book> = full
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|b| (*b).clone())
            .collect();
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_sorted_is_monotonic(
        catalog in arb_catalog(),
        key in arb_key(),
        order in arb_order(),
    ) {
        let sorted = catalog.sorted(&ListQuery::new(1, Some(key), order));

        for pair in sorted.windows(2) {
            let ordering = collate(field(pair[0], key), field(pair[1], key));
            match order {
                SortOrder::Asc => {
                    prop_assert_ne!(ordering, Ordering::Greater);
                }
                SortOrder::Desc => {
                    prop_assert_ne!(ordering, Ordering::Less);
                }
            }
        }
    }

    #[test]
    fn prop_sort_by_year_is_identity(catalog in arb_catalog(), order in arb_order()) {
        let sorted = catalog.sorted(&ListQuery::new(1, Some(SortKey::Year), order));
        let stored: Vec<&Book> = catalog.books().iter().collect();

        prop_assert_eq!(sorted, stored);
    }

    #[test]
    fn prop_pages_partition_catalog(catalog in arb_catalog(), key in arb_key()) {
        let mut seen = Vec::new();
        let mut page = 1;
        loop {
            let chunk = catalog.list(&ListQuery::new(page, Some(key), SortOrder::Asc));
            if chunk.is_empty() {
                break;
            }
            seen.extend(chunk);
            page += 1;
        }

        prop_assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn prop_ids_unique_without_deletes(catalog in arb_catalog()) {
        let ids: HashSet<i64> = catalog.books().iter().map(|b| b.id).collect();
        prop_assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn prop_max_strategy_unique_after_deletes(
        catalog in arb_catalog(),
        deletes in prop::collection::vec(0usize..40, 0..10),
        extra in prop::collection::vec(arb_draft(), 1..5),
    ) {
        let mut catalog = catalog;
        for index in deletes {
            if let Some(id) = catalog.books().get(index).map(|b| b.id) {
                catalog.delete(id).unwrap();
            }
        }
        for draft in extra {
            catalog.create(draft, IdStrategy::MaxPlusOne).unwrap();
        }

        let ids: HashSet<i64> = catalog.books().iter().map(|b| b.id).collect();
        prop_assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn prop_failed_mutations_leave_catalog_unchanged(
        catalog in arb_catalog(),
        draft in arb_draft(),
    ) {
        let mut mutated = catalog.clone();
        let missing = catalog.books().iter().map(|b| b.id).max().unwrap_or(0) + 1;

        prop_assert!(mutated.update(missing, draft).is_err());
        prop_assert!(mutated.delete(missing).is_err());
        prop_assert_eq!(mutated, catalog);
    }
}
