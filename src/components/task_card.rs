//! Task Card Component

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_slot_mouseenter, DndSignals, SlotRef};

use crate::models::Task;

#[component]
pub fn TaskCard(
    task: Task,
    slot: SlotRef,
    dnd: DndSignals,
    set_delete_task_id: WriteSignal<Option<String>>,
) -> impl IntoView {
    let delete_id = task.id.clone();
    let dragging_id = task.id.clone();
    let is_dragging = move || dnd.dragging_id_read.get().as_deref() == Some(dragging_id.as_str());

    view! {
        <div
            class=move || if is_dragging() { "task-card dragging" } else { "task-card" }
            on:mousedown=make_on_mousedown(dnd, task.id.clone(), slot.clone())
            on:mouseenter=make_on_slot_mouseenter(dnd, slot.clone())
        >
            <div class="task-card-body">
                <h3 class="task-card-name">{task.task_name.clone()}</h3>
                <p class="task-card-description">{task.task_description.clone()}</p>
            </div>
            <button
                class="task-delete-btn"
                on:click=move |_| set_delete_task_id.set(Some(delete_id.clone()))
            >
                "✕"
            </button>
        </div>
    }
}
