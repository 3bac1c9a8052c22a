//! List Editor App
//!
//! Root component: add form, draggable list, edit modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EditItemModal, ItemListView, NewItemForm};
use crate::config::EditorConfig;
use crate::context::AppContext;
use crate::editor::ListEditor;
use crate::store::{store_item_count, AppStore};

#[component]
pub fn App(config: EditorConfig) -> impl IntoView {
    // State
    let store: AppStore = Store::new(ListEditor::new());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(config));

    view! {
        <div class="container app-layout">
            <NewItemForm />

            <ItemListView />

            <p class="item-count">{move || item_count_label(store_item_count(&store))}</p>

            <EditItemModal />
        </div>
    }
}

/// Footer text, singular for exactly one item
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count_label() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(2), "2 items");
    }
}
