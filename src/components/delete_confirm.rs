//! Delete Confirmation Modal

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient};
use crate::context::use_app_context;

/// Modal shown while a task id is pending deletion
#[component]
pub fn DeleteConfirm(
    task_id: ReadSignal<Option<String>>,
    set_task_id: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();

    let confirm = move |_| {
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let client = ApiClient::new(ctx.session);
            match api::task::delete_task(&client, &id).await {
                Ok(()) => {
                    ctx.reload_tasks();
                    set_task_id.set(None);
                }
                Err(err) => log::error!("Failed to delete task {id}: {err}"),
            }
        });
    };

    view! {
        {move || task_id.get().map(|_| view! {
            <div class="modal-backdrop">
                <div class="modal">
                    <h2>"Are you sure you want to delete this task?"</h2>
                    <div class="modal-actions">
                        <button class="btn-cancel" on:click=move |_| set_task_id.set(None)>
                            "Cancel"
                        </button>
                        <button class="btn-delete" on:click=confirm>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
