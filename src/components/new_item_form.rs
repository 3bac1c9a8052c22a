//! New Item Form Component
//!
//! Text field and submit button above the list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_new_item_draft, store_set_new_item_draft, store_submit_new_item, use_app_store};

/// Form for appending new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let config = use_app_context().config();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_submit_new_item(&store).is_none() {
            tracing::debug!("[FORM] blank submit, field cleared");
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    class="form-control"
                    placeholder=config.placeholder
                    prop:value=move || store_new_item_draft(&store)
                    on:input=move |ev| store_set_new_item_draft(&store, event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">{config.add_label}</button>
            </div>
        </form>
    }
}
