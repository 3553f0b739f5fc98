//! Session Lifecycle
//!
//! The bearer token as an explicit object instead of ambient localStorage
//! lookups: set on successful auth, cleared on logout. The token is opaque
//! and never inspected locally; an expired one simply surfaces as a
//! failed request.

use leptos::prelude::*;

use crate::storage;

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Session handle injected into views and the API client via context.
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    /// Restore the session persisted from a previous visit, if any.
    pub fn load() -> Self {
        Self::with_token(storage::get_item(TOKEN_STORAGE_KEY))
    }

    /// Session seeded with a known token.
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            token: RwSignal::new(token),
        }
    }

    /// Reactive: true while a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|t| t.is_some())
    }

    /// Current bearer token for request building.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Store the token returned by a successful auth flow.
    pub fn authenticate(&self, token: String) {
        if let Err(err) = storage::set_item(TOKEN_STORAGE_KEY, &token) {
            log::error!("Failed to persist session token: {err}");
        }
        self.token.set(Some(token));
    }

    /// Drop the session on logout.
    pub fn clear(&self) {
        if let Err(err) = storage::remove_item(TOKEN_STORAGE_KEY) {
            log::error!("Failed to clear session token: {err}");
        }
        self.token.set(None);
    }
}
