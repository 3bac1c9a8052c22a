//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! `ListEditor` fields. Each helper takes one field guard at a time and drops
//! it before touching the next.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::debug;

use crate::editor::{DragEnd, DropOutcome, ListEditor, ListEditorStoreFields, TitleEdit};
use crate::models::{Item, ItemId};

/// Type alias for the store
pub type AppStore = Store<ListEditor>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Reads
// ========================

/// Items in store order
pub fn store_items(store: &AppStore) -> Vec<Item> {
    store.items().read().to_vec()
}

pub fn store_item_count(store: &AppStore) -> usize {
    store.items().read().len()
}

pub fn store_new_item_draft(store: &AppStore) -> String {
    store.new_item().read().as_str().to_string()
}

pub fn store_edit_is_open(store: &AppStore) -> bool {
    store.modal().read().is_open()
}

pub fn store_edit_draft(store: &AppStore) -> String {
    store.modal().read().draft().to_string()
}

// ========================
// Add form
// ========================

pub fn store_set_new_item_draft(store: &AppStore, text: String) {
    store.new_item().write().set(text);
}

/// Submit the add form. The draft is cleared whether or not an item was added.
pub fn store_submit_new_item(store: &AppStore) -> Option<ItemId> {
    let title = store.new_item().write().take();
    store.items().write().add(title)
}

// ========================
// List
// ========================

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, id: &ItemId) -> bool {
    store.items().write().remove(id)
}

/// Apply a finished drag. Cancelled and unchanged drops leave the list untouched.
pub fn store_drag_end(store: &AppStore, drag: DragEnd) -> DropOutcome {
    let outcome = drag.resolve(store.items().read_untracked().len());
    if let DropOutcome::Moved { from, to } = outcome {
        store.items().write().reorder(from, Some(to));
    }
    debug!(?drag, ?outcome, "drag end");
    outcome
}

// ========================
// Edit modal
// ========================

pub fn store_open_edit(store: &AppStore, id: ItemId, current_title: String) {
    store.modal().write().open(id, current_title);
}

pub fn store_update_edit_draft(store: &AppStore, text: String) {
    store.modal().write().update_draft(text);
}

/// Apply the modal draft to its item and close the modal
pub fn store_confirm_edit(store: &AppStore) -> bool {
    let edit = store.modal().write().confirm();
    match edit {
        Some(TitleEdit { id, title }) => store.items().write().update_title(&id, title),
        None => false,
    }
}

pub fn store_cancel_edit(store: &AppStore) {
    store.modal().write().cancel();
}
