//! Reset Password Form
//!
//! Reached from the emailed link; the one-time token arrives in the
//! `?token=` query parameter.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiClient, ApiError};
use crate::context::use_app_context;
use crate::route::Route;
use crate::validation;

const REDIRECT_DELAY_MS: u32 = 1_000;

#[component]
pub fn ResetPassword(token: Option<String>) -> impl IntoView {
    let ctx = use_app_context();

    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal(if token.is_none() {
        "Invalid or expired token.".to_string()
    } else {
        String::new()
    });
    let (success_message, set_success_message) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        set_success_message.set(String::new());

        let Some(token_val) = token.clone() else {
            set_error.set("Invalid or expired token.".to_string());
            return;
        };

        let rule_err = validation::password_rule_error(&new_password.get(), &confirm_password.get());
        if !rule_err.is_empty() {
            set_error.set(rule_err);
            return;
        }

        let password_val = new_password.get();
        set_loading.set(true);
        spawn_local(async move {
            let client = ApiClient::new(ctx.session);
            match api::user::reset_password(&client, &token_val, &password_val).await {
                Ok(()) => {
                    set_loading.set(false);
                    set_success_message
                        .set("Your password has been updated successfully!".to_string());
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    ctx.navigate(Route::Login);
                    return;
                }
                Err(ApiError::Server { message, .. }) => {
                    set_error.set(message.unwrap_or_else(|| "Token expired".to_string()));
                }
                Err(err) => {
                    log::error!("Password reset failed: {err}");
                    set_error.set("An error occurred. Please try again later.".to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Reset Password"</h1>

                {move || (!error.get().is_empty()).then(|| view! {
                    <p class="form-error">{error.get()}</p>
                })}
                {move || (!success_message.get().is_empty()).then(|| view! {
                    <p class="form-success">{success_message.get()}</p>
                })}

                <form on:submit=submit>
                    <input
                        type="password"
                        placeholder="New Password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_new_password.set(input.value());
                        }
                    />
                    <input
                        type="password"
                        placeholder="Confirm New Password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_confirm_password.set(input.value());
                        }
                    />
                    <button type="submit" class="btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Updating..." } else { "Update Password" }}
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
