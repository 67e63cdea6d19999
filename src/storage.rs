//! Persisted Key/Value Storage
//!
//! Session identity, bare token, and theme survive page reloads in
//! localStorage. On native targets (unit tests) a thread-local map backs the
//! same interface, so persistence-dependent behavior stays testable.

use crate::models::User;

/// Serialized identity + token record.
pub const SESSION_KEY: &str = "session";
/// Bare credential, kept redundantly for transport header injection.
pub const TOKEN_KEY: &str = "token";
pub const THEME_KEY: &str = "theme";

#[cfg(target_arch = "wasm32")]
mod backend {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    pub fn set(key: &str, value: &str) {
        if let Some(s) = local_storage() {
            let _ = s.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(s) = local_storage() {
            let _ = s.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        STORE.with(|s| s.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) {
        STORE.with(|s| {
            s.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}

pub use backend::{get, remove, set};

/// Persist the authenticated identity under both session keys.
pub fn save_session(user: &User) {
    if let Ok(serialized) = serde_json::to_string(user) {
        set(SESSION_KEY, &serialized);
    }
    set(TOKEN_KEY, &user.token);
}

/// Read back a previously saved session record, if parseable.
pub fn load_session() -> Option<User> {
    get(SESSION_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Both keys are removed together; logout never leaves a dangling token.
pub fn clear_session() {
    remove(SESSION_KEY);
    remove(TOKEN_KEY);
}

pub fn token() -> Option<String> {
    get(TOKEN_KEY)
}
