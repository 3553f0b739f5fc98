//! New Task Form Component
//!
//! Creates a task and re-fetches the whole list to resynchronize; the
//! inputs are only cleared once the service accepted the task.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiClient};
use crate::context::use_app_context;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_val = name.get();
        let description_val = description.get();
        if name_val.trim().is_empty() || description_val.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            let client = ApiClient::new(ctx.session);
            match api::task::create_task(&client, &name_val, &description_val).await {
                Ok(()) => {
                    set_name.set(String::new());
                    set_description.set(String::new());
                    ctx.reload_tasks();
                }
                Err(err) => log::error!("Failed to create task: {err}"),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Task Name"
                prop:value=move || name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <textarea
                placeholder="Task Description"
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_description.set(input.value());
                }
            ></textarea>
            <button type="submit" class="btn-primary">"Add Task"</button>
        </form>
    }
}
