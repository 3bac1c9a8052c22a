//! List Editor
//!
//! All editor state in one owned value: the items, the add-form draft and
//! the edit modal. Every operation is synchronous and either applies fully
//! or not at all, so the whole thing is testable without a browser.

mod draft;
mod drag;
mod modal;

pub use draft::NewItemDraft;
pub use drag::{DragEnd, DropOutcome};
pub use modal::{EditModal, TitleEdit};

use reactive_stores::Store;

use crate::items::ItemStore;
use crate::models::ItemId;

#[derive(Debug, Clone, Default, Store)]
pub struct ListEditor {
    pub items: ItemStore,
    pub new_item: NewItemDraft,
    pub modal: EditModal,
}

impl ListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_new_item_draft(&mut self, text: impl Into<String>) {
        self.new_item.set(text);
    }

    /// Add the drafted item. The draft is cleared even when nothing was added.
    pub fn submit_new_item(&mut self) -> Option<ItemId> {
        let title = self.new_item.take();
        self.items.add(title)
    }

    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        self.items.remove(id)
    }

    pub fn drag_end(&mut self, drag: DragEnd) -> DropOutcome {
        drag.apply(&mut self.items)
    }

    pub fn open_edit(&mut self, id: ItemId, current_title: impl Into<String>) {
        self.modal.open(id, current_title);
    }

    pub fn update_edit_draft(&mut self, text: impl Into<String>) {
        self.modal.update_draft(text);
    }

    /// Apply the modal draft to its item and close the modal
    pub fn confirm_edit(&mut self) -> bool {
        match self.modal.confirm() {
            Some(TitleEdit { id, title }) => self.items.update_title(&id, title),
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.modal.cancel();
    }
}
