//! Task Column Component
//!
//! One status bucket of the board: a drop slot before every card, one
//! after the last, and the cards themselves. Hovering a card while
//! dragging targets the slot at that card's index.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_slot_mouseenter, DndSignals, SlotRef};

use crate::components::TaskCard;
use crate::models::BoardColumn;

#[component]
pub fn TaskColumn(
    column: BoardColumn,
    dnd: DndSignals,
    set_delete_task_id: WriteSignal<Option<String>>,
) -> impl IntoView {
    let status = column.status.clone();
    let tail_slot = SlotRef::new(status.clone(), column.tasks.len());

    view! {
        <div class="board-column">
            <h2 class="board-column-title">{column.status.clone()}</h2>

            {column
                .tasks
                .iter()
                .enumerate()
                .map(|(index, task)| {
                    let slot = SlotRef::new(status.clone(), index);
                    view! {
                        <DropSlot slot=slot.clone() dnd=dnd />
                        <TaskCard
                            task=task.clone()
                            slot=slot
                            dnd=dnd
                            set_delete_task_id=set_delete_task_id
                        />
                    }
                })
                .collect_view()}

            <DropSlot slot=tail_slot dnd=dnd />
        </div>
    }
}

/// Drop slot shown between cards while a drag is in progress
#[component]
fn DropSlot(slot: SlotRef, dnd: DndSignals) -> impl IntoView {
    let enter_slot = slot.clone();
    let is_active = move || dnd.drop_slot_read.get().as_ref() == Some(&slot);
    let is_visible = move || dnd.dragging_id_read.get().is_some();

    view! {
        <div
            class=move || {
                let mut c = "drop-slot".to_string();
                if is_active() {
                    c.push_str(" active");
                }
                if !is_visible() {
                    c.push_str(" hidden");
                }
                c
            }
            on:mouseenter=make_on_slot_mouseenter(dnd, enter_slot)
            on:mouseleave=make_on_mouseleave(dnd)
        />
    }
}
