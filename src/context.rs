//! Application Context
//!
//! Shared state provided via Leptos Context API: the session, the current
//! route, and the task-list reload trigger. Views are functions of this
//! state; there are no parent/child auth callbacks.

use leptos::prelude::*;

use crate::route::{self, Route};
use crate::session::Session;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The session injected into views and API calls
    pub session: Session,
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write (history push goes through `navigate`)
    set_route: WriteSignal<Route>,
    /// Trigger to reload tasks from the service - read
    pub tasks_reload: ReadSignal<u32>,
    set_tasks_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        session: Session,
        route: (ReadSignal<Route>, WriteSignal<Route>),
        tasks_reload: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            session,
            route: route.0,
            set_route: route.1,
            tasks_reload: tasks_reload.0,
            set_tasks_reload: tasks_reload.1,
        }
    }

    /// Push a history entry and switch views
    pub fn navigate(&self, to: Route) {
        route::navigate(self.set_route, to);
    }

    /// Trigger a re-fetch of the task list
    pub fn reload_tasks(&self) {
        self.set_tasks_reload.update(|v| *v += 1);
    }

    /// Clear the session and return to the login view
    pub fn logout(&self) {
        log::info!("Logging out");
        self.session.clear();
        self.navigate(Route::Login);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn test_context() -> (AppContext, ReadSignal<u32>) {
        let (route, set_route) = signal(Route::Board);
        let (reload, set_reload) = signal(0u32);
        let ctx = AppContext::new(
            Session::with_token(None),
            (route, set_route),
            (reload, set_reload),
        );
        (ctx, reload)
    }

    #[test]
    fn reload_trigger_counts_every_request() {
        let (ctx, reload) = test_context();
        assert_eq!(reload.get_untracked(), 0);

        // A failed status update and a completed mutation each ask for a
        // re-fetch; every request must bump the trigger so the board
        // effect re-runs
        ctx.reload_tasks();
        ctx.reload_tasks();
        assert_eq!(reload.get_untracked(), 2);
    }
}
