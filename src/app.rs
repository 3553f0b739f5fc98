//! App Component
//!
//! Wires the session, the route signal and the global store together and
//! dispatches to the view for the current route. The board is the only
//! protected view: it requires a session, and a signed-in user landing on
//! the login route is sent straight to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BoardView, ForgotPassword, Login, Register, ResetPassword};
use crate::context::AppContext;
use crate::route::{self, Route};
use crate::session::Session;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::load();
    let (current_route, set_current_route) = signal(route::current_route());
    let (tasks_reload, set_tasks_reload) = signal(0u32);

    route::bind_popstate(set_current_route);

    let ctx = AppContext::new(
        session,
        (current_route, set_current_route),
        (tasks_reload, set_tasks_reload),
    );
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Route guards: an authenticated user never sees the login form, an
    // unauthenticated one never sees the board.
    Effect::new(move |_| {
        let authenticated = session.is_authenticated();
        match current_route.get() {
            Route::Login if authenticated => ctx.navigate(Route::Board),
            Route::Board if !authenticated => ctx.navigate(Route::Login),
            _ => {}
        }
    });

    view! {
        {move || match current_route.get() {
            Route::Register => view! { <Register /> }.into_any(),
            Route::ForgotPassword => view! { <ForgotPassword /> }.into_any(),
            Route::ResetPassword { token } => view! { <ResetPassword token=token /> }.into_any(),
            Route::Board if session.is_authenticated() => view! { <BoardView /> }.into_any(),
            Route::Login | Route::Board => view! { <Login /> }.into_any(),
        }}
    }
}
