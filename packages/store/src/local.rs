//! # `localStorage` session store: browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. It
//! reads and writes the window's `localStorage`, so the session survives
//! reloads and is shared between tabs of the same origin.
//!
//! Every operation looks the storage object up again; there is nothing to
//! cache across calls and the lookup keeps the struct zero-sized.
//!
//! Errors (storage disabled, quota exceeded, no window) are logged and
//! swallowed: reads become `None` and writes are dropped. Another tab clearing
//! the token is only noticed on the next navigation.

use crate::session::SessionStore;

/// `localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(_) => {
                tracing::warn!("localStorage is not accessible");
                None
            }
        }
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("failed to write {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!("failed to remove {key} from localStorage");
        }
    }
}
