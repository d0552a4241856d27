//! Durable key-value storage
//!
//! The session persists its connection id and selected account through this
//! narrow interface instead of calling the browser API directly, so the
//! session machine stays testable off-browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Minimal durable key-value interface.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// `window.localStorage` backend.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// `None` when the browser exposes no local storage (disabled or
    /// non-browser context).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KvStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            log::warn!("failed to persist {key}");
        }
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// In-memory backend: the fallback when local storage is unavailable, and
/// the test double. Nothing survives a reload.
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Best-available store for this browser session.
pub fn browser_store() -> Box<dyn KvStore> {
    match LocalStore::open() {
        Some(store) => Box::new(store),
        None => {
            log::warn!("local storage unavailable, session will not survive reloads");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));

        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2".to_string()));

        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn clones_share_the_same_entries() {
        let store = MemoryStore::new();
        let alias = store.clone();
        store.set("k", "v");
        assert_eq!(alias.get("k"), Some("v".to_string()));
    }
}
