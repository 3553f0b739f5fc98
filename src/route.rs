//! Client-side Routes
//!
//! Route state lives in a signal synced with the history API: `navigate`
//! pushes an entry, a popstate listener follows the back/forward buttons.

use leptos::prelude::*;
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    ResetPassword { token: Option<String> },
    Board,
}

impl Route {
    /// Parse a location pathname + search string. Unknown paths fall back
    /// to the login view.
    pub fn parse(path: &str, query: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Route::Login,
            "/register" => Route::Register,
            "/forgot-password" => Route::ForgotPassword,
            "/reset-password" => Route::ResetPassword {
                token: query_param(query, "token"),
            },
            "/task" => Route::Board,
            _ => Route::Login,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::ResetPassword { token: Some(token) } => {
                format!(
                    "/reset-password?token={}",
                    utf8_percent_encode(token, NON_ALPHANUMERIC)
                )
            }
            Route::ResetPassword { token: None } => "/reset-password".to_string(),
            Route::Board => "/task".to_string(),
        }
    }
}

/// Extract a single query parameter from a `?a=1&b=2` search string,
/// percent-decoded.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

/// Route for the browser's current location.
pub fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Login;
    };
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

/// Push a history entry for `route` and update the route signal.
pub fn navigate(set_route: WriteSignal<Route>, route: Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path()));
    }
    set_route.set(route);
}

/// Follow browser back/forward navigation.
pub fn bind_popstate(set_route: WriteSignal<Route>) {
    use wasm_bindgen::closure::Closure;

    let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        set_route.set(current_route());
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_exposed_routes() {
        assert_eq!(Route::parse("/", ""), Route::Login);
        assert_eq!(Route::parse("/register", ""), Route::Register);
        assert_eq!(Route::parse("/forgot-password", ""), Route::ForgotPassword);
        assert_eq!(Route::parse("/task", ""), Route::Board);
    }

    #[test]
    fn reset_password_carries_token_from_query() {
        assert_eq!(
            Route::parse("/reset-password", "?token=abc123"),
            Route::ResetPassword {
                token: Some("abc123".to_string())
            }
        );
        assert_eq!(
            Route::parse("/reset-password", ""),
            Route::ResetPassword { token: None }
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_login() {
        assert_eq!(Route::parse("/nope", ""), Route::Login);
        assert_eq!(Route::parse("/task/extra", ""), Route::Login);
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::parse("/register/", ""), Route::Register);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Login,
            Route::Register,
            Route::ForgotPassword,
            Route::Board,
        ] {
            let path = route.path();
            assert_eq!(Route::parse(&path, ""), route);
        }
        let reset = Route::ResetPassword {
            token: Some("tok".to_string()),
        };
        assert_eq!(Route::parse("/reset-password", "?token=tok"), reset);
    }

    #[test]
    fn reset_token_with_reserved_characters_round_trips() {
        let route = Route::ResetPassword {
            token: Some("a&b=c%2/d".to_string()),
        };
        let path = route.path();
        let (pathname, query) = path.split_once('?').unwrap();
        assert_eq!(Route::parse(pathname, query), route);
    }

    #[test]
    fn query_params_are_percent_decoded() {
        assert_eq!(
            query_param("?token=a%2Fb&x=1", "token").as_deref(),
            Some("a/b")
        );
        assert_eq!(query_param("?x=1", "token"), None);
    }
}
