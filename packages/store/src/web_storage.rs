//! # Web Storage — browser-side persistence
//!
//! [`WebStorage`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It wraps either `window.localStorage` (durable, shared across
//! tabs) or `window.sessionStorage` (cleared when the tab closes) via `web-sys`.
//!
//! ## Handle management
//!
//! `WebStorage` only records which area it targets and looks up the
//! `web_sys::Storage` handle on every call. `web_sys::Storage` is not `Send`
//! and holding it across renders buys nothing, since the browser keeps the
//! area alive anyway.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). Storage can be disabled (private mode, quota exceeded);
//! that degrades to "nothing remembered" rather than breaking the page.

use crate::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Area {
    Local,
    Session,
}

/// `localStorage` / `sessionStorage` backed KeyValueStore.
#[derive(Clone, Copy, Debug)]
pub struct WebStorage {
    area: Area,
}

impl WebStorage {
    /// Durable `localStorage`.
    pub fn local() -> Self {
        Self { area: Area::Local }
    }

    /// Tab-scoped `sessionStorage`.
    pub fn session() -> Self {
        Self {
            area: Area::Session,
        }
    }

    fn handle(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            Area::Local => window.local_storage(),
            Area::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.handle()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.handle() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("Failed to write {key} to browser storage: {e:?}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.handle() {
            let _ = storage.remove_item(key);
        }
    }
}
