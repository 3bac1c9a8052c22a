//! List Item Component
//!
//! A single row: title, edit button, delete button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;
use crate::store::{store_open_edit, store_remove_item, use_app_store};

#[component]
pub fn ListItem(item: Item) -> impl IntoView {
    let store = use_app_store();
    let config = use_app_context().config();

    let Item { id, title } = item;
    let edit_id = id.clone();
    let edit_title = title.clone();

    view! {
        <div class="item-row">
            <span class="item-text">{title}</span>

            <button
                class="btn btn-warning edit-btn"
                on:click=move |_| store_open_edit(&store, edit_id.clone(), edit_title.clone())
            >
                {config.edit_label}
            </button>

            <button
                class="btn btn-danger delete-btn"
                on:click=move |_| {
                    store_remove_item(&store, &id);
                }
            >
                {config.delete_label}
            </button>
        </div>
    }
}
