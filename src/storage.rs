//! Browser localStorage helpers
//!
//! Thin wrappers over web-sys `Storage`. Values are stored as raw strings;
//! the only persisted client state is the session token.

use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("failed to write localStorage key {key}"))
}

pub fn remove_item(key: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| format!("failed to remove localStorage key {key}"))
}
