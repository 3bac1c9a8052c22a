//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop reordering for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on a row (take that row's index)
    Item(usize),
    /// Drop on an insertion slot between rows (0 = before the first row)
    Slot(usize),
}

impl DropTarget {
    /// Destination index for a remove-then-insert move of `source`.
    ///
    /// A slot sits between rows, so once the dragged row is removed every
    /// slot after it shifts up by one.
    pub fn destination(self, source: usize) -> usize {
        match self {
            DropTarget::Item(index) => index,
            DropTarget::Slot(slot) if slot > source => slot - 1,
            DropTarget::Slot(slot) => slot,
        }
    }
}

/// Result of releasing a dragged row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragRelease {
    /// Index of the row that was dragged
    pub source: usize,
    /// Where it was released (None = released outside any target)
    pub target: Option<DropTarget>,
}

impl DragRelease {
    /// Destination index, or None when the drag was cancelled
    pub fn destination(&self) -> Option<usize> {
        self.target.map(|t| t.destination(self.source))
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Movement threshold in pixels to start dragging
    pub threshold_px: i32,
}

pub fn create_dnd_signals(threshold_px: i32) -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        threshold_px: threshold_px.max(0),
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(index));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Whether the pointer moved far enough from the mousedown point to start dragging
fn beyond_threshold(threshold_px: i32, start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > threshold_px || dy > threshold_px
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if beyond_threshold(dnd.threshold_px, start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows
pub fn make_on_item_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Item(index)));
        }
    }
}

/// Create mouseenter handler for insertion slots
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop` runs once per finished drag, including drags released outside
/// any target (`DragRelease::target` is then None). Plain clicks never reach it.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragRelease) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        if let Some(source) = dragging {
            on_drop(DragRelease { source, target });
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_target_takes_row_index() {
        assert_eq!(DropTarget::Item(0).destination(3), 0);
        assert_eq!(DropTarget::Item(4).destination(1), 4);
    }

    #[test]
    fn test_slot_before_source() {
        // [A, B, C, D], drag C (2) to slot 1 (between A and B)
        assert_eq!(DropTarget::Slot(1).destination(2), 1);
        assert_eq!(DropTarget::Slot(0).destination(2), 0);
    }

    #[test]
    fn test_slot_after_source() {
        // [A, B, C, D], drag A (0) to the end slot (4)
        assert_eq!(DropTarget::Slot(4).destination(0), 3);
        // drag B (1) to slot 3 (between C and D)
        assert_eq!(DropTarget::Slot(3).destination(1), 2);
    }

    #[test]
    fn test_slots_adjacent_to_source_keep_position() {
        assert_eq!(DropTarget::Slot(2).destination(2), 2);
        assert_eq!(DropTarget::Slot(3).destination(2), 2);
    }

    #[test]
    fn test_release_without_target_is_cancel() {
        let release = DragRelease { source: 1, target: None };
        assert_eq!(release.destination(), None);

        let release = DragRelease { source: 1, target: Some(DropTarget::Slot(0)) };
        assert_eq!(release.destination(), Some(0));
    }

    #[test]
    fn test_threshold() {
        assert!(!beyond_threshold(5, (10, 10), (15, 15)));
        assert!(beyond_threshold(5, (10, 10), (16, 10)));
        assert!(beyond_threshold(5, (10, 10), (10, 4)));
        assert!(beyond_threshold(0, (0, 0), (1, 0)));
    }
}
