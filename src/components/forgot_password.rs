//! Forgot Password Form
//!
//! Sends the reset link request with the current origin so the service
//! can build a link back to this deployment's /reset-password route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiClient, ApiError};
use crate::context::use_app_context;
use crate::route::Route;
use crate::validation;

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (email_error, set_email_error) = signal(String::new());
    let (success_message, set_success_message) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get();

        let email_err = validation::require(&email_val, "Email");
        set_email_error.set(email_err.clone());
        if !email_err.is_empty() {
            return;
        }

        set_loading.set(true);
        set_success_message.set(String::new());
        spawn_local(async move {
            let origin = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default();

            let client = ApiClient::new(ctx.session);
            match api::user::forgot_password(&client, &email_val, &origin).await {
                Ok(()) => {
                    set_success_message.set("Password reset link sent to your email.".to_string());
                }
                Err(ApiError::Server { message, .. }) => {
                    set_email_error
                        .set(message.unwrap_or_else(|| "Invalid email address".to_string()));
                }
                Err(err) => {
                    log::error!("Forgot-password request failed: {err}");
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
                <h1>"Forgot Password"</h1>
                <form on:submit=submit>
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

                    {move || (!success_message.get().is_empty()).then(|| view! {
                        <p class="form-success">{success_message.get()}</p>
                    })}

                    <button type="submit" class="btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Sending..." } else { "Send Reset Link" }}
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
