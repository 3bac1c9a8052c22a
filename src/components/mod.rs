//! UI Components
//!
//! Leptos components for the list editor.

mod new_item_form;
mod item_list_view;
mod list_item;
mod edit_item_modal;

pub use new_item_form::NewItemForm;
pub use item_list_view::{ItemListView, DropZone};
pub use list_item::ListItem;
pub use edit_item_modal::EditItemModal;
