//! Task Board View
//!
//! The protected home screen: header with the signed-in user, the create
//! form, one droppable column per status, the delete confirmation, and
//! the feed underneath. Drag moves are applied optimistically; when the
//! remote write fails the board is re-fetched so it resyncs with the
//! server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, SlotRef};

use crate::api::{self, ApiClient};
use crate::components::{DeleteConfirm, FeedView, NewTaskForm, TaskColumn};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (delete_task_id, set_delete_task_id) = signal(Option::<String>::None);

    // Load the board; re-runs whenever a mutation bumps the reload trigger
    Effect::new(move |_| {
        let _ = ctx.tasks_reload.get();
        spawn_local(async move {
            let client = ApiClient::new(ctx.session);
            match api::task::get_tasks(&client).await {
                Ok(board) => *store.board().write() = board,
                Err(err) => log::error!("Failed to fetch tasks: {err}"),
            }
        });
    });

    // Load the signed-in user's name once
    Effect::new(move |_| {
        spawn_local(async move {
            let client = ApiClient::new(ctx.session);
            match api::user::user_detail(&client).await {
                Ok(details) => match details.into_iter().next() {
                    Some(user) => *store.username().write() = user.username,
                    None => log::warn!("user-detail returned an empty list"),
                },
                Err(err) => log::error!("Failed to fetch user details: {err}"),
            }
        });
    });

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |task_id: String, source: SlotRef, dest: SlotRef| {
        let snapshot = store.board().get_untracked();
        let moved = store.board().write().apply_move(&source, &dest);
        let Some(moved) = moved else { return };
        if moved.id != task_id {
            // Stale drag: the board changed under the gesture
            *store.board().write() = snapshot;
            return;
        }

        spawn_local(async move {
            let client = ApiClient::new(ctx.session);
            if let Err(err) = api::task::update_task_status(&client, &moved.id, &dest.column).await {
                log::error!("Failed to update status of task {}: {err}", moved.id);
                // The board may have been replaced by a concurrent
                // re-fetch; resync instead of writing the snapshot back
                ctx.reload_tasks();
            }
        });
    });

    view! {
        <div class="board-screen">
            <header class="board-header">
                <h1>"TaskBoard"</h1>
                <button class="btn-logout" on:click=move |_| ctx.logout()>
                    {move || store.username().get()}
                </button>
            </header>

            <main class="board-main">
                <section class="task-form-panel">
                    <h2>"Task Management"</h2>
                    <NewTaskForm />
                </section>

                <div class="board-columns">
                    <For
                        each=move || store.board().get().columns
                        key=|column| {
                            // Re-render a column when its membership changes
                            (
                                column.status.clone(),
                                column.tasks.iter().map(|t| t.id.clone()).collect::<Vec<_>>(),
                            )
                        }
                        children=move |column| {
                            view! {
                                <TaskColumn
                                    column=column
                                    dnd=dnd
                                    set_delete_task_id=set_delete_task_id
                                />
                            }
                        }
                    />
                </div>

                <FeedView />
            </main>

            <footer class="board-footer">
                <span>"© 2025 TaskBoard. All rights reserved."</span>
            </footer>

            <DeleteConfirm task_id=delete_task_id set_task_id=set_delete_task_id />
        </div>
    }
}
