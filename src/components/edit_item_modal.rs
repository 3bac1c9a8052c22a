//! Edit Item Modal Component
//!
//! Rename dialog. The backdrop is static: clicking outside or pressing
//! Escape does nothing, only Close or the confirm button dismiss it.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{
    store_cancel_edit, store_confirm_edit, store_edit_draft, store_edit_is_open,
    store_update_edit_draft, use_app_store,
};

#[component]
pub fn EditItemModal() -> impl IntoView {
    let store = use_app_store();
    let config = use_app_context().config();
    let close_label = config.close_label;
    let confirm_label = config.confirm_label;

    view! {
        <Show when=move || store_edit_is_open(&store)>
            <div class="modal-backdrop">
                <div class="modal-dialog" role="dialog">
                    <div class="modal-body">
                        <input
                            type="text"
                            prop:value=move || store_edit_draft(&store)
                            on:input=move |ev| store_update_edit_draft(&store, event_target_value(&ev))
                        />
                    </div>
                    <div class="modal-footer">
                        <button class="btn btn-secondary" on:click=move |_| store_cancel_edit(&store)>
                            {close_label.clone()}
                        </button>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| {
                                store_confirm_edit(&store);
                            }
                        >
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
