//! Leptos DragDrop Utilities
//!
//! Mouse-based drag-and-drop between column slots for Leptos.
//! Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A position inside a named column: the drag source or the drop destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotRef {
    /// Column identifier (the droppable list the slot belongs to)
    pub column: String,
    /// Insertion index inside the column
    pub index: usize,
}

impl SlotRef {
    pub fn new(column: impl Into<String>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    /// Slot the dragged item came from
    pub drag_source_read: ReadSignal<Option<SlotRef>>,
    pub drag_source_write: WriteSignal<Option<SlotRef>>,
    /// Slot currently hovered as drop destination
    pub drop_slot_read: ReadSignal<Option<SlotRef>>,
    pub drop_slot_write: WriteSignal<Option<SlotRef>>,
    /// Pending item (mousedown but not yet dragging): id + origin slot
    pub pending_read: ReadSignal<Option<(String, SlotRef)>>,
    pub pending_write: WriteSignal<Option<(String, SlotRef)>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// True once the pointer moved far enough from the mousedown position
/// for the gesture to count as a drag rather than a click.
pub fn moved_beyond_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drag_source_read, drag_source_write) = signal(None::<SlotRef>);
    let (drop_slot_read, drop_slot_write) = signal(None::<SlotRef>);
    let (pending_read, pending_write) = signal(None::<(String, SlotRef)>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drag_source_read,
        drag_source_write,
        drop_slot_read,
        drop_slot_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation, clearing all transient state
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drag_source_write.set(None);
    dnd.drop_slot_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable items.
/// Records the pending drag with its origin slot and start position.
pub fn make_on_mousedown(
    dnd: DndSignals,
    item_id: String,
    source: SlotRef,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                    return;
                }
            }
            dnd.pending_write.set(Some((item_id.clone(), source.clone())));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if let Some((id, source)) = pending {
            if dnd.dragging_id_read.get_untracked().is_none() {
                let dx = ev.client_x() - dnd.start_x_read.get_untracked();
                let dy = ev.client_y() - dnd.start_y_read.get_untracked();

                if moved_beyond_threshold(dx, dy) {
                    dnd.dragging_id_write.set(Some(id));
                    dnd.drag_source_write.set(Some(source));
                }
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

/// Create mouseenter handler for drop slots
pub fn make_on_slot_mouseenter(
    dnd: DndSignals,
    slot: SlotRef,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(Some(slot.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_slot_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
/// `on_drop` receives the dragged item id, its source slot and the
/// destination slot. A release without a hovered destination only clears
/// the drag state.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, SlotRef, SlotRef) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let source = dnd.drag_source_read.get_untracked();
        let drop_slot = dnd.drop_slot_read.get_untracked();

        end_drag(&dnd);

        // Only fire when an actual drag ended over a destination slot
        if let (Some(dragged), Some(from), Some(to)) = (dragging_id, source, drop_slot) {
            on_drop(dragged, from, to);
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
    fn threshold_requires_real_movement() {
        assert!(!moved_beyond_threshold(0, 0));
        assert!(!moved_beyond_threshold(5, -5));
        assert!(moved_beyond_threshold(6, 0));
        assert!(moved_beyond_threshold(0, -6));
    }

    #[test]
    fn slot_refs_compare_by_column_and_index() {
        assert_eq!(SlotRef::new("todo", 0), SlotRef::new("todo", 0));
        assert_ne!(SlotRef::new("todo", 0), SlotRef::new("todo", 1));
        assert_ne!(SlotRef::new("todo", 0), SlotRef::new("done", 0));
    }
}
