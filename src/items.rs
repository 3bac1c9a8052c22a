//! Item Store
//!
//! Ordered list of items. Store order is both display order and drag order.

use tracing::debug;

use crate::models::{Item, ItemId};

/// Ordered sequence of items with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Find an item by id
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Append a new item. Blank titles are ignored.
    ///
    /// The title is stored as given; trimming is only used for the blank check.
    pub fn add(&mut self, title: impl Into<String>) -> Option<ItemId> {
        let title = title.into();
        if title.trim().is_empty() {
            debug!("add: ignoring blank title");
            return None;
        }

        let item = Item::new(title);
        let id = item.id.clone();
        debug!(%id, position = self.items.len(), "add");
        self.items.push(item);
        Some(id)
    }

    /// Remove the item with this id. Returns false if there was none.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(%id, "remove");
        } else {
            debug!(%id, "remove: no such item");
        }
        removed
    }

    /// Move the item at `source` so it ends up at `destination`.
    ///
    /// Remove-then-insert: the elements between the two positions shift by
    /// one, every other element keeps its place. A missing destination is a
    /// cancelled drag. Out-of-range indices are ignored.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) -> bool {
        let Some(destination) = destination else {
            debug!(source, "reorder: cancelled");
            return false;
        };
        let len = self.items.len();
        if source >= len || destination >= len {
            debug!(source, destination, len, "reorder: index out of range");
            return false;
        }

        let item = self.items.remove(source);
        self.items.insert(destination, item);
        debug!(source, destination, "reorder");
        true
    }

    /// Replace the title of the item with this id. No validation.
    pub fn update_title(&mut self, id: &ItemId, title: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.title = title.into();
                debug!(%id, "update title");
                true
            }
            None => {
                debug!(%id, "update title: no such item");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> (ItemStore, Vec<ItemId>) {
        let mut store = ItemStore::new();
        let ids = titles
            .iter()
            .map(|t| store.add(*t).expect("non-blank title"))
            .collect();
        (store, ids)
    }

    fn titles(store: &ItemStore) -> Vec<&str> {
        store.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_add_appends_to_end() {
        let (mut store, _) = store_with(&["A", "B"]);
        let id = store.add("C").unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.as_slice()[2].id, id);
        assert_eq!(titles(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let (mut store, _) = store_with(&["A"]);
        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   "), None);
        assert_eq!(store.add("\t\n"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_keeps_surrounding_whitespace() {
        let mut store = ItemStore::new();
        let id = store.add("  padded ").unwrap();
        assert_eq!(store.get(&id).unwrap().title, "  padded ");
    }

    #[test]
    fn test_add_allows_duplicate_titles() {
        let (store, ids) = store_with(&["same", "same"]);
        assert_eq!(store.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_remove() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        assert!(store.remove(&ids[1]));
        assert_eq!(titles(&store), vec!["A", "C"]);
        assert!(store.get(&ids[1]).is_none());
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let (mut store, ids) = store_with(&["A", "B"]);
        assert!(store.remove(&ids[0]));
        let snapshot = store.clone();
        assert!(!store.remove(&ids[0]));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_reorder_forward_and_back() {
        let (mut store, _) = store_with(&["A", "B", "C", "D"]);
        assert!(store.reorder(0, Some(2)));
        assert_eq!(titles(&store), vec!["B", "C", "A", "D"]);

        assert!(store.reorder(3, Some(0)));
        assert_eq!(titles(&store), vec!["D", "B", "C", "A"]);
    }

    #[test]
    fn test_reorder_same_index_is_unchanged() {
        let (mut store, _) = store_with(&["A", "B", "C"]);
        let snapshot = store.clone();
        store.reorder(1, Some(1));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_reorder_cancelled() {
        let (mut store, _) = store_with(&["A", "B", "C"]);
        let snapshot = store.clone();
        assert!(!store.reorder(0, None));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_reorder_out_of_range() {
        let (mut store, _) = store_with(&["A", "B"]);
        let snapshot = store.clone();
        assert!(!store.reorder(2, Some(0)));
        assert!(!store.reorder(0, Some(2)));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_update_title() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        assert!(store.update_title(&ids[1], "B2"));
        assert_eq!(titles(&store), vec!["A", "B2", "C"]);

        assert!(store.update_title(&ids[0], ""));
        assert_eq!(titles(&store), vec!["", "B2", "C"]);
    }

    #[test]
    fn test_update_title_missing_id() {
        let (mut store, _) = store_with(&["A"]);
        let snapshot = store.clone();
        assert!(!store.update_title(&ItemId::from("nope"), "X"));
        assert_eq!(store, snapshot);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn ids(store: &ItemStore) -> Vec<ItemId> {
            store.iter().map(|i| i.id.clone()).collect()
        }

        proptest! {
            #[test]
            fn add_non_blank_appends_one(existing in 0usize..8, title in "[a-z ]{0,6}[a-z][a-z ]{0,6}") {
                let mut store = ItemStore::new();
                for n in 0..existing {
                    store.add(format!("item {n}"));
                }
                let id = store.add(title.clone()).unwrap();
                prop_assert_eq!(store.len(), existing + 1);
                prop_assert_eq!(&store.as_slice()[existing].id, &id);
                prop_assert_eq!(&store.as_slice()[existing].title, &title);
            }

            #[test]
            fn add_blank_never_grows(existing in 0usize..8, blank in "[ \t\n]{0,6}") {
                let mut store = ItemStore::new();
                for n in 0..existing {
                    store.add(format!("item {n}"));
                }
                prop_assert!(store.add(blank).is_none());
                prop_assert_eq!(store.len(), existing);
            }

            #[test]
            fn reorder_is_remove_then_insert(len in 1usize..10, source in 0usize..10, destination in 0usize..10) {
                prop_assume!(source < len && destination < len);
                let mut store = ItemStore::new();
                for n in 0..len {
                    store.add(format!("item {n}"));
                }

                let before = ids(&store);
                let mut expected = before.clone();
                let moved = expected.remove(source);
                expected.insert(destination, moved);

                prop_assert!(store.reorder(source, Some(destination)));
                let actual = ids(&store);
                prop_assert_eq!(&actual, &expected);

                let mut sorted_before = before;
                let mut sorted_after = actual;
                sorted_before.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                sorted_after.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                prop_assert_eq!(sorted_before, sorted_after);
            }

            #[test]
            fn remove_drops_exactly_one(len in 1usize..10, pick in 0usize..10) {
                prop_assume!(pick < len);
                let mut store = ItemStore::new();
                for n in 0..len {
                    store.add(format!("item {n}"));
                }
                let mut expected = ids(&store);
                let target = expected.remove(pick);

                prop_assert!(store.remove(&target));
                prop_assert_eq!(ids(&store), expected);
            }

            #[test]
            fn update_title_touches_only_target(len in 1usize..10, pick in 0usize..10, title in ".{0,12}") {
                prop_assume!(pick < len);
                let mut store = ItemStore::new();
                for n in 0..len {
                    store.add(format!("item {n}"));
                }
                let before = store.to_vec();
                let target = before[pick].id.clone();

                prop_assert!(store.update_title(&target, title.clone()));
                for (index, (old, new)) in before.iter().zip(store.iter()).enumerate() {
                    prop_assert_eq!(&old.id, &new.id);
                    if index == pick {
                        prop_assert_eq!(&new.title, &title);
                    } else {
                        prop_assert_eq!(&old.title, &new.title);
                    }
                }
            }
        }
    }
}
