//! Registration Form

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiClient, ApiError};
use crate::context::use_app_context;
use crate::route::Route;
use crate::validation;

/// Delay before bouncing back to login after a successful flow
const REDIRECT_DELAY_MS: u32 = 1_000;

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name_error, set_name_error) = signal(String::new());
    let (email_error, set_email_error) = signal(String::new());
    let (password_error, set_password_error) = signal(String::new());
    let (success_message, set_success_message) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_val = name.get();
        let email_val = email.get();
        let password_val = password.get();

        let name_err = validation::require(&name_val, "Name");
        let email_err = validation::require(&email_val, "Email");
        let password_err = validation::require(&password_val, "Password");
        set_name_error.set(name_err.clone());
        set_email_error.set(email_err.clone());
        set_password_error.set(password_err.clone());
        if !name_err.is_empty() || !email_err.is_empty() || !password_err.is_empty() {
            return;
        }

        set_loading.set(true);
        set_success_message.set(String::new());
        spawn_local(async move {
            let client = ApiClient::new(ctx.session);
            match api::user::register(&client, &name_val, &email_val, &password_val).await {
                Ok(()) => {
                    set_loading.set(false);
                    set_success_message
                        .set("Registration successful! Redirecting to login...".to_string());
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    ctx.navigate(Route::Login);
                    return;
                }
                Err(ApiError::Server { message, .. }) => {
                    // The service reports conflicts on the email field
                    set_email_error
                        .set(message.unwrap_or_else(|| "Email is already registered".to_string()));
                }
                Err(err) => {
                    log::error!("Registration failed: {err}");
                    set_email_error
                        .set("Something went wrong. Please try again later.".to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form on:submit=submit>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />
                    {move || (!name_error.get().is_empty()).then(|| view! {
                        <p class="field-error">{name_error.get()}</p>
                    })}

                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                        }
                    />
                    {move || (!email_error.get().is_empty()).then(|| view! {
                        <p class="field-error">{email_error.get()}</p>
                    })}

                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                        }
                    />
                    {move || (!password_error.get().is_empty()).then(|| view! {
                        <p class="field-error">{password_error.get()}</p>
                    })}

                    {move || (!success_message.get().is_empty()).then(|| view! {
                        <p class="form-success">{success_message.get()}</p>
                    })}

                    <button type="submit" class="btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="auth-links">
                    <p>
                        <span class="link" on:click=move |_| ctx.navigate(Route::Login)>
                            "Back to Login"
                        </span>
                    </p>
                </div>
            </div>
        </div>
    }
}
