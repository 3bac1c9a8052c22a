//! Item List View Component
//!
//! Displays items in store order with drag-and-drop reordering.
//! Uses leptos-dragdrop with explicit DropZones between rows.

use leptos::prelude::*;

use crate::components::ListItem;
use crate::context::use_app_context;
use crate::editor::DragEnd;
use crate::store::{store_drag_end, store_items, use_app_store};

use leptos_dragdrop::*;

/// Item list with DnD support
#[component]
pub fn ItemListView() -> impl IntoView {
    let store = use_app_store();
    let config = use_app_context().config();

    let dnd = create_dnd_signals(config.drag_threshold_px);

    bind_global_mouseup(dnd, move |release| {
        store_drag_end(&store, DragEnd::from(release));
    });

    let rows = move || store_items(&store).into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="item-list">
            // Slot before the first row
            <DropZone dnd=dnd slot=0 />

            <For
                each=rows
                key=|(index, item)| (item.id.clone(), *index, item.title.clone())
                children=move |(index, item)| {
                    let on_mousedown = make_on_mousedown(dnd, index);
                    let on_mouseenter = make_on_item_mouseenter(dnd, index);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    // Visual state
                    let is_dragging = move || dnd.dragging_read.get() == Some(index);
                    let is_drop_target = move || {
                        matches!(dnd.drop_target_read.get(), Some(DropTarget::Item(i)) if i == index)
                    };

                    let item_class = move || {
                        let mut c = String::from("item-wrapper");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=item_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <ListItem item=item />
                        </div>

                        // Slot after this row
                        <DropZone dnd=dnd slot=index + 1 />
                    }
                }
            />
        </div>
    }
}

/// Drop zone component - a horizontal separator for dropping between rows
#[component]
pub fn DropZone(
    dnd: DndSignals,
    slot: usize,
) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, slot);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Is this zone the current drop target?
    let is_active = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Slot(s)) if s == slot)
    };

    // Only show when dragging
    let is_dragging = move || dnd.dragging_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
