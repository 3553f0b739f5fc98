//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the data
//! fetched from the service.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Board, Post};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Task board grouped by status, as the service returned it
    pub board: Board,
    /// Display name of the signed-in user
    pub username: String,
    /// Posts authored by the current user
    pub my_posts: Vec<Post>,
    /// Posts authored by everyone else
    pub other_posts: Vec<Post>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
