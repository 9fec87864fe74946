//! Browser storage helpers for durable and session-scoped records.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so state and
//! components can persist records without repeating web-sys glue. Failures
//! (quota, disabled storage) are logged and absorbed; in-memory state stays
//! authoritative for the current session.

use serde::Serialize;

/// Read a raw string from `localStorage` for `key`.
pub fn local_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn local_set_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            leptos::logging::warn!("localStorage unavailable; skipping write for {key}");
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            leptos::logging::warn!("failed to serialize record for {key}");
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            leptos::logging::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Delete the `localStorage` record for `key`.
pub fn local_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Read a raw string from `sessionStorage` for `key`.
pub fn session_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string to `sessionStorage` for `key`.
pub fn session_set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
            leptos::logging::warn!("sessionStorage unavailable; skipping write for {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("sessionStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Delete the `sessionStorage` record for `key`.
pub fn session_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
