//! LocalStorage wrapper
//!
//! `KeyValueStore` abstracts the browser's `localStorage` so the session
//! token can be read per request and faked in tests.

use gloo_storage::{LocalStorage, Storage};
use std::sync::Arc;

pub trait KeyValueStore: Send + Sync {
    /// `None` if the key is missing or storage is unavailable
    fn get(&self, key: &str) -> Option<String>;
    /// `true` if the value was written
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str);
}

/// Browser `localStorage`, values stored as plain strings
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        match LocalStorage::raw().set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::error!("failed to write {key} to localStorage: {e:?}");
                false
            }
        }
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// The persisted session token
///
/// Nothing is cached: every read goes to the backing store, so a token
/// written by login is visible to the very next request.
#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
}

impl TokenStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn get(&self) -> Option<String> {
        self.store.get(self.key).filter(|token| !token.is_empty())
    }

    pub fn set(&self, token: &str) -> bool {
        self.store.set(self.key, token)
    }

    pub fn clear(&self) {
        self.store.delete(self.key);
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;
