//! Login Form
//!
//! Email/password login plus the identity-provider button. On success the
//! session is authenticated and the app switches to the board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiClient, ApiError};
use crate::context::use_app_context;
use crate::identity;
use crate::route::Route;
use crate::validation;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal(String::new());
    let (password_error, set_password_error) = signal(String::new());
    let (error_message, set_error_message) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get();
        let password_val = password.get();

        let email_err = validation::require(&email_val, "Email");
        let password_err = validation::require(&password_val, "Password");
        set_email_error.set(email_err.clone());
        set_password_error.set(password_err.clone());
        if !email_err.is_empty() || !password_err.is_empty() {
            return;
        }

        set_loading.set(true);
        set_error_message.set(String::new());
        spawn_local(async move {
            let client = ApiClient::new(ctx.session);
            match api::user::login(&client, &email_val, &password_val).await {
                Ok(token) => {
                    log::info!("Login succeeded");
                    ctx.session.authenticate(token);
                    ctx.navigate(Route::Board);
                }
                Err(ApiError::Server { message, .. }) => {
                    set_error_message
                        .set(message.unwrap_or_else(|| "Invalid email or password".to_string()));
                }
                Err(err) => {
                    log::error!("Login failed: {err}");
                    set_error_message
                        .set("Something went wrong. Please try again later.".to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1>"Login"</h1>
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

                    {move || (!error_message.get().is_empty()).then(|| view! {
                        <p class="form-error">{error_message.get()}</p>
                    })}

                    <button type="submit" class="btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <IdentitySignIn />

                <div class="auth-links">
                    <p>
                        "Don't have an account? "
                        <span class="link" on:click=move |_| ctx.navigate(Route::Register)>
                            "Sign up"
                        </span>
                    </p>
                    <p>
                        <span class="link" on:click=move |_| ctx.navigate(Route::ForgotPassword)>
                            "Forgot Password?"
                        </span>
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Identity-provider sign-in: fetch a credential from the page hook,
/// decode it, then run the validate-then-register-or-login protocol.
#[component]
fn IdentitySignIn() -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |_| {
        spawn_local(async move {
            let credential = match identity::request_provider_credential().await {
                Ok(credential) => credential,
                Err(err) => {
                    log::error!("Identity sign-in failed: {err}");
                    return;
                }
            };
            let profile = match identity::decode_credential(&credential) {
                Ok(profile) => profile,
                Err(err) => {
                    log::error!("Identity sign-in failed: {err}");
                    return;
                }
            };

            let client = ApiClient::new(ctx.session);
            match identity::sign_in(&client, &profile).await {
                Ok(token) => {
                    log::info!("Identity sign-in succeeded");
                    ctx.session.authenticate(token);
                    ctx.navigate(Route::Board);
                }
                Err(err) => log::error!("Identity sign-in failed: {err}"),
            }
        });
    };

    view! {
        <button type="button" class="btn-identity" on:click=on_click>
            "Sign in with Google"
        </button>
    }
}
