use super::*;
use proptest::prelude::*;
use crate::catalog::Catalog;

#[test]
fn test_new_index_is_empty() {
    let index = SelectionIndex::new();
    assert!(index.is_empty());
    assert!(index.resolve("Chess").is_none());
}

#[test]
fn test_replace_indexes_by_name() {
    let mut index = SelectionIndex::new();
    index.replace(&vec![AppEntry::new(7, "Chess")]);

    assert_eq!(index.len(), 1);
    assert_eq!(index.resolve("Chess"), Some(&AppEntry::new(7, "Chess")));
}

#[test]
fn test_replace_discards_previous_fetch() {
    let mut index = SelectionIndex::new();
    index.replace(&vec![AppEntry::new(7, "Chess"), AppEntry::new(8, "Go")]);
    index.replace(&vec![AppEntry::new(9, "Steam")]);

    assert_eq!(index.len(), 1);
    assert!(index.resolve("Chess").is_none());
    assert!(index.resolve("Go").is_none());
    assert_eq!(index.resolve("Steam").map(|e| e.id), Some(9));
}

#[test]
fn test_replace_with_empty_catalog_clears() {
    let mut index = SelectionIndex::new();
    index.replace(&vec![AppEntry::new(7, "Chess")]);
    index.replace(&Vec::new());
    assert!(index.is_empty());
}

#[test]
fn test_duplicate_names_last_write_wins() {
    let mut index = SelectionIndex::new();
    index.replace(&vec![AppEntry::new(1, "Desktop"), AppEntry::new(2, "Desktop")]);

    assert_eq!(index.len(), 1);
    assert_eq!(index.resolve("Desktop").map(|e| e.id), Some(2));
}

#[test]
fn test_lookup_is_exact_match() {
    let mut index = SelectionIndex::new();
    index.replace(&vec![AppEntry::new(7, "Chess")]);
    assert!(index.resolve("chess").is_none());
    assert!(index.resolve("Chess ").is_none());
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((0u32..50, "[a-e]{1,3}"), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, name)| AppEntry::new(id, name))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_replace_keeps_only_second_catalog(first in arb_catalog(), second in arb_catalog()) {
        let mut index = SelectionIndex::new();
        index.replace(&first);
        index.replace(&second);

        let mut expected = SelectionIndex::new();
        expected.replace(&second);

        prop_assert_eq!(index.len(), expected.len());
        for entry in &first {
            let in_second = second.iter().any(|e| e.name == entry.name);
            prop_assert_eq!(index.resolve(&entry.name).is_some(), in_second);
        }
        for entry in &second {
            let last = second.iter().rev().find(|e| e.name == entry.name);
            prop_assert_eq!(index.resolve(&entry.name), last);
        }
    }
}
